use shared::{OptionEnum, ShaderMode, ViewerData};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Shading and tone mapping of the model view
#[derive(Debug, Clone)]
pub struct Viewer {
    ins: PropertySet,
}

impl Viewer {
    pub const SHADER: &'static str = "Shader";
    pub const EXPOSURE: &'static str = "Exposure";
    pub const GAMMA: &'static str = "Gamma";
    pub const ANNOTATIONS_VISIBLE: &'static str = "Annotations.Visible";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::option(Self::SHADER, ShaderMode::OPTIONS, 0),
                Property::number(Self::EXPOSURE, 1.0).with_range(0.0, 10.0),
                Property::number(Self::GAMMA, 1.0).with_range(0.5, 3.0),
                Property::boolean(Self::ANNOTATIONS_VISIBLE, true),
            ]),
        }
    }

    pub fn shader(&self) -> ShaderMode {
        ShaderMode::from_index(self.ins.option(Self::SHADER)).unwrap_or_default()
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Viewer {
    fn type_name(&self) -> &'static str {
        "Viewer"
    }

    fn display_name(&self) -> &'static str {
        "Viewer"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Viewer {
    type Data = ViewerData;

    fn to_data(&self) -> Option<ViewerData> {
        if self.ins.is_default() {
            return None;
        }
        Some(ViewerData {
            shader: self.shader(),
            exposure: self.ins.number(Self::EXPOSURE),
            gamma: self.ins.number(Self::GAMMA),
            annotations_visible: self.ins.boolean(Self::ANNOTATIONS_VISIBLE),
        })
    }

    fn from_data(&mut self, data: &ViewerData) -> Result<(), PropertyError> {
        self.ins.set(Self::SHADER, PropertyValue::Option(data.shader.index()))?;
        self.ins.set(Self::EXPOSURE, PropertyValue::Number(data.exposure))?;
        self.ins.set(Self::GAMMA, PropertyValue::Number(data.gamma))?;
        self.ins.set(
            Self::ANNOTATIONS_VISIBLE,
            PropertyValue::Boolean(data.annotations_visible),
        )?;
        Ok(())
    }
}
