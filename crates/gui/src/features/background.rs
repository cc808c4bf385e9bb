use shared::{BackgroundData, BackgroundStyle, OptionEnum};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

#[derive(Debug, Clone)]
pub struct Background {
    ins: PropertySet,
}

impl Background {
    pub const STYLE: &'static str = "Style";
    pub const COLOR0: &'static str = "Color0";
    pub const COLOR1: &'static str = "Color1";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::option(
                    Self::STYLE,
                    BackgroundStyle::OPTIONS,
                    BackgroundStyle::RadialGradient.index(),
                ),
                Property::color(Self::COLOR0, [0.2, 0.25, 0.3]),
                Property::color(Self::COLOR1, [0.01, 0.03, 0.05]),
            ]),
        }
    }

    pub fn style(&self) -> BackgroundStyle {
        BackgroundStyle::from_index(self.ins.option(Self::STYLE)).unwrap_or_default()
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Background {
    fn type_name(&self) -> &'static str {
        "Background"
    }

    fn display_name(&self) -> &'static str {
        "Background"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Background {
    type Data = BackgroundData;

    fn to_data(&self) -> Option<BackgroundData> {
        if self.ins.is_default() {
            return None;
        }
        Some(BackgroundData {
            style: self.style(),
            color0: self.ins.vector3(Self::COLOR0),
            color1: self.ins.vector3(Self::COLOR1),
        })
    }

    fn from_data(&mut self, data: &BackgroundData) -> Result<(), PropertyError> {
        self.ins.set(Self::STYLE, PropertyValue::Option(data.style.index()))?;
        self.ins.set(Self::COLOR0, PropertyValue::Color(data.color0))?;
        self.ins.set(Self::COLOR1, PropertyValue::Color(data.color1))?;
        Ok(())
    }
}
