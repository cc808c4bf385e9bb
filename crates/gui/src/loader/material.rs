//! Viewer material and the substitution applied to every loaded mesh

/// Fallback roughness applied to every substituted material
pub const FALLBACK_ROUGHNESS: f32 = 0.6;
/// Fallback metalness applied to every substituted material
pub const FALLBACK_METALNESS: f32 = 0.0;
/// Colour factor for materials without a diffuse map
pub const UNTEXTURED_DARKENING: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Linear,
    Srgb,
}

/// Reference to an image of the loaded container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRef {
    pub image_index: usize,
    pub tex_coord: u32,
    pub color_space: ColorSpace,
}

/// The viewer's extended material
#[derive(Debug, Clone, PartialEq)]
pub struct UberMaterial {
    pub name: Option<String>,
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub double_sided: bool,
    pub map: Option<TextureRef>,
    pub normal_map: Option<TextureRef>,
    pub normal_scale: f32,
}

impl Default for UberMaterial {
    fn default() -> Self {
        Self {
            name: None,
            color: [1.0; 3],
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            emissive: [0.0; 3],
            double_sided: false,
            map: None,
            normal_map: None,
            normal_scale: 1.0,
        }
    }
}

impl UberMaterial {
    /// Copy the metallic-roughness parameters of a glTF material
    pub fn from_standard(material: &gltf::Material) -> Self {
        let pbr = material.pbr_metallic_roughness();
        let [r, g, b, a] = pbr.base_color_factor();

        Self {
            name: material.name().map(str::to_string),
            color: [r, g, b],
            opacity: a,
            roughness: pbr.roughness_factor(),
            metalness: pbr.metallic_factor(),
            emissive: material.emissive_factor(),
            double_sided: material.double_sided(),
            map: pbr.base_color_texture().map(|info| TextureRef {
                image_index: info.texture().source().index(),
                tex_coord: info.tex_coord(),
                color_space: ColorSpace::Linear,
            }),
            normal_map: material.normal_texture().map(|normal| TextureRef {
                image_index: normal.texture().source().index(),
                tex_coord: normal.tex_coord(),
                color_space: ColorSpace::Linear,
            }),
            normal_scale: material
                .normal_texture()
                .map_or(1.0, |normal| normal.scale()),
        }
    }

    /// Diffuse maps are sampled as sRGB; roughness and metalness are forced to
    /// the fallback values and untextured colours are darkened.
    pub fn apply_fallbacks(&mut self) {
        if let Some(map) = &mut self.map {
            map.color_space = ColorSpace::Srgb;
        }

        self.roughness = FALLBACK_ROUGHNESS;
        self.metalness = FALLBACK_METALNESS;

        if self.map.is_none() {
            for channel in &mut self.color {
                *channel *= UNTEXTURED_DARKENING;
            }
        }
    }
}

/// Material for a mesh primitive. Unlit materials are not copied.
pub fn substitute(material: &gltf::Material) -> UberMaterial {
    let mut uber = if material.unlit() {
        UberMaterial::default()
    } else {
        UberMaterial::from_standard(material)
    };
    uber.apply_fallbacks();
    uber
}
