use shared::GridData;

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Reference grid on the floor plane
#[derive(Debug, Clone)]
pub struct Grid {
    ins: PropertySet,
}

impl Grid {
    pub const VISIBLE: &'static str = "Visible";
    pub const COLOR: &'static str = "Color";
    pub const LINES: &'static str = "Lines";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::VISIBLE, false),
                Property::color(Self::COLOR, [0.5, 0.7, 0.8]),
                Property::number(Self::LINES, 10.0).with_range(1.0, 100.0),
            ]),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Grid {
    fn type_name(&self) -> &'static str {
        "Grid"
    }

    fn display_name(&self) -> &'static str {
        "Grid"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Grid {
    type Data = GridData;

    fn to_data(&self) -> Option<GridData> {
        if self.ins.is_default() {
            return None;
        }
        Some(GridData {
            visible: self.ins.boolean(Self::VISIBLE),
            color: self.ins.vector3(Self::COLOR),
            lines: self.ins.number(Self::LINES),
        })
    }

    fn from_data(&mut self, data: &GridData) -> Result<(), PropertyError> {
        self.ins.set(Self::VISIBLE, PropertyValue::Boolean(data.visible))?;
        self.ins.set(Self::COLOR, PropertyValue::Color(data.color))?;
        self.ins.set(Self::LINES, PropertyValue::Number(data.lines))?;
        Ok(())
    }
}
