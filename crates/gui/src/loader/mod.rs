//! glTF model loading into an in-memory scene group.
//!
//! Decoding is delegated to the `gltf` crate and runs on the blocking pool.
//! Every mesh primitive goes through material substitution, see [`material`].

pub mod material;

use glam::{Mat4, Vec3};
use thiserror::Error;
use tracing::{error, info};

pub use material::{ColorSpace, TextureRef, UberMaterial};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoaderError {
    #[error("failed to load '{url}': {message}")]
    Load { url: String, message: String },

    #[error("'{url}' is not a valid gltf scene: {reason}")]
    Format { url: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Translate each geometry so its bounding box is centred on the origin
    pub center_geometry: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            center_geometry: true,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_points(points: &[[f32; 3]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let first = Vec3::from(*first);
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |bounds, p| Self {
                min: bounds.min.min(Vec3::from(*p)),
                max: bounds.max.max(Vec3::from(*p)),
            },
        ))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub indices: Option<Vec<u32>>,
    pub bounds: Option<Bounds>,
}

impl Geometry {
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        let bounds = Bounds::from_points(&positions);
        Self {
            positions,
            normals: None,
            indices: None,
            bounds,
        }
    }

    /// Move the bounding box centre to the origin
    pub fn center(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let offset = bounds.center();
        for p in &mut self.positions {
            *p = (Vec3::from(*p) - offset).to_array();
        }
        self.bounds = Some(Bounds {
            min: bounds.min - offset,
            max: bounds.max - offset,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshPrimitive {
    pub geometry: Geometry,
    pub material: UberMaterial,
}

/// Node of the loaded scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: Option<String>,
    pub transform: Mat4,
    pub primitives: Vec<MeshPrimitive>,
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    pub fn is_mesh(&self) -> bool {
        !self.primitives.is_empty()
    }

    fn visit<'a>(&'a self, out: &mut Vec<&'a MeshPrimitive>) {
        out.extend(&self.primitives);
        for child in &self.children {
            child.visit(out);
        }
    }
}

/// Root children of the loaded scene, regrouped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelGroup {
    pub name: Option<String>,
    pub children: Vec<SceneObject>,
}

impl ModelGroup {
    /// All mesh primitives, depth first
    pub fn primitives(&self) -> Vec<&MeshPrimitive> {
        let mut out = Vec::new();
        for child in &self.children {
            child.visit(&mut out);
        }
        out
    }

    /// Union of local geometry bounds (node transforms not applied)
    pub fn bounds(&self) -> Option<Bounds> {
        self.primitives()
            .into_iter()
            .filter_map(|p| p.geometry.bounds)
            .reduce(|a, b| a.union(&b))
    }
}

/// Loads glTF 2.0 containers
#[derive(Debug, Clone, Default)]
pub struct ModelLoader {
    options: LoaderOptions,
}

impl ModelLoader {
    pub const EXTENSIONS: [&'static str; 2] = ["gltf", "glb"];
    pub const MIME_TYPES: [&'static str; 2] = ["model/gltf+json", "model/gltf-binary"];

    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn can_load(&self, url: &str) -> bool {
        let extension = url.rsplit('.').next().unwrap_or_default().to_lowercase();
        Self::EXTENSIONS.contains(&extension.as_str())
    }

    pub fn can_load_mime_type(&self, mime_type: &str) -> bool {
        Self::MIME_TYPES.contains(&mime_type)
    }

    /// Decode the container at `url` (a file path) on the blocking pool
    pub async fn load(&self, url: &str) -> Result<ModelGroup, LoaderError> {
        let path = url.to_string();
        let options = self.options.clone();

        let result = tokio::task::spawn_blocking(move || {
            let imported = gltf::import(&path).map_err(|e| LoaderError::Load {
                url: path.clone(),
                message: e.to_string(),
            })?;
            create_model_group(&path, imported, &options)
        })
        .await
        .unwrap_or_else(|e| {
            Err(LoaderError::Load {
                url: url.to_string(),
                message: e.to_string(),
            })
        });

        match &result {
            Ok(group) => info!(url, primitives = group.primitives().len(), "model loaded"),
            Err(err) => error!(%err, "model load failed"),
        }
        result
    }

    /// Decode an in-memory `.gltf` (with embedded buffers) or `.glb` container
    pub fn load_slice(&self, bytes: &[u8]) -> Result<ModelGroup, LoaderError> {
        const URL: &str = "<memory>";

        let result = gltf::import_slice(bytes)
            .map_err(|e| LoaderError::Load {
                url: URL.to_string(),
                message: e.to_string(),
            })
            .and_then(|imported| create_model_group(URL, imported, &self.options));

        if let Err(err) = &result {
            error!(%err, "model load failed");
        }
        result
    }
}

type Imported = (gltf::Document, Vec<gltf::buffer::Data>, Vec<gltf::image::Data>);

fn create_model_group(
    url: &str,
    (document, buffers, _images): Imported,
    options: &LoaderOptions,
) -> Result<ModelGroup, LoaderError> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| LoaderError::Format {
            url: url.to_string(),
            reason: "container has no scene".to_string(),
        })?;

    let children = scene
        .nodes()
        .map(|node| load_node(url, &node, &buffers, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ModelGroup {
        name: scene.name().map(str::to_string),
        children,
    })
}

fn load_node(
    url: &str,
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    options: &LoaderOptions,
) -> Result<SceneObject, LoaderError> {
    let primitives = match node.mesh() {
        Some(mesh) => mesh
            .primitives()
            .map(|primitive| load_primitive(url, &primitive, buffers, options))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let children = node
        .children()
        .map(|child| load_node(url, &child, buffers, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SceneObject {
        name: node.name().map(str::to_string),
        transform: Mat4::from_cols_array_2d(&node.transform().matrix()),
        primitives,
        children,
    })
}

fn load_primitive(
    url: &str,
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    options: &LoaderOptions,
) -> Result<MeshPrimitive, LoaderError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data.0[..]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| LoaderError::Format {
            url: url.to_string(),
            reason: "mesh primitive without positions".to_string(),
        })?
        .collect();

    let mut geometry = Geometry::new(positions);
    geometry.normals = reader.read_normals().map(|normals| normals.collect());
    geometry.indices = reader.read_indices().map(|indices| indices.into_u32().collect());
    if options.center_geometry {
        geometry.center();
    }

    Ok(MeshPrimitive {
        geometry,
        material: material::substitute(&primitive.material()),
    })
}
