use shared::FloorData;

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Ground plane below the model
#[derive(Debug, Clone)]
pub struct Floor {
    ins: PropertySet,
}

impl Floor {
    pub const VISIBLE: &'static str = "Visible";
    pub const POSITION: &'static str = "Position";
    pub const SIZE: &'static str = "Size";
    pub const COLOR: &'static str = "Color";
    pub const OPACITY: &'static str = "Opacity";
    pub const RECEIVE_SHADOW: &'static str = "ReceiveShadow";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::VISIBLE, false),
                Property::vector3(Self::POSITION, [0.0, -25.0, 0.0]),
                Property::number(Self::SIZE, 50.0).with_range(0.0, f64::MAX),
                Property::color(Self::COLOR, [0.6, 0.75, 0.8]),
                Property::number(Self::OPACITY, 0.5).with_range(0.0, 1.0),
                Property::boolean(Self::RECEIVE_SHADOW, false),
            ]),
        }
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Floor {
    fn type_name(&self) -> &'static str {
        "Floor"
    }

    fn display_name(&self) -> &'static str {
        "Floor"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Floor {
    type Data = FloorData;

    fn to_data(&self) -> Option<FloorData> {
        if self.ins.is_default() {
            return None;
        }
        Some(FloorData {
            visible: self.ins.boolean(Self::VISIBLE),
            position: self.ins.vector3(Self::POSITION),
            size: self.ins.number(Self::SIZE),
            color: self.ins.vector3(Self::COLOR),
            opacity: self.ins.number(Self::OPACITY),
            receive_shadow: self.ins.boolean(Self::RECEIVE_SHADOW),
        })
    }

    fn from_data(&mut self, data: &FloorData) -> Result<(), PropertyError> {
        self.ins.set(Self::VISIBLE, PropertyValue::Boolean(data.visible))?;
        self.ins.set(Self::POSITION, PropertyValue::Vector3(data.position))?;
        self.ins.set(Self::SIZE, PropertyValue::Number(data.size))?;
        self.ins.set(Self::COLOR, PropertyValue::Color(data.color))?;
        self.ins.set(Self::OPACITY, PropertyValue::Number(data.opacity))?;
        self.ins.set(
            Self::RECEIVE_SHADOW,
            PropertyValue::Boolean(data.receive_shadow),
        )?;
        Ok(())
    }
}
