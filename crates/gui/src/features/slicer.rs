use shared::{OptionEnum, SliceAxis, SlicerData};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Section plane cutting through the model
#[derive(Debug, Clone)]
pub struct Slicer {
    ins: PropertySet,
}

impl Slicer {
    pub const ENABLED: &'static str = "Enabled";
    pub const AXIS: &'static str = "Axis";
    pub const INVERTED: &'static str = "Inverted";
    pub const POSITION: &'static str = "Position";
    pub const COLOR: &'static str = "Color";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::ENABLED, false),
                Property::option(Self::AXIS, SliceAxis::OPTIONS, 0),
                Property::boolean(Self::INVERTED, false),
                Property::number(Self::POSITION, 0.5).with_range(0.0, 1.0),
                Property::color(Self::COLOR, [0.0, 0.61, 0.87]),
            ]),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.ins.boolean(Self::ENABLED)
    }

    pub fn axis(&self) -> SliceAxis {
        SliceAxis::from_index(self.ins.option(Self::AXIS)).unwrap_or_default()
    }

    /// Plane position along the axis, normalized to the model bounds
    pub fn position(&self) -> f64 {
        self.ins.number(Self::POSITION)
    }
}

impl Default for Slicer {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Slicer {
    fn type_name(&self) -> &'static str {
        "Slicer"
    }

    fn display_name(&self) -> &'static str {
        "Slicer"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Slicer {
    type Data = SlicerData;

    fn to_data(&self) -> Option<SlicerData> {
        if self.ins.is_default() {
            return None;
        }
        Some(SlicerData {
            enabled: self.is_enabled(),
            axis: self.axis(),
            inverted: self.ins.boolean(Self::INVERTED),
            position: self.position(),
            color: self.ins.vector3(Self::COLOR),
        })
    }

    fn from_data(&mut self, data: &SlicerData) -> Result<(), PropertyError> {
        self.ins.set(Self::ENABLED, PropertyValue::Boolean(data.enabled))?;
        self.ins.set(Self::AXIS, PropertyValue::Option(data.axis.index()))?;
        self.ins.set(Self::INVERTED, PropertyValue::Boolean(data.inverted))?;
        self.ins.set(Self::POSITION, PropertyValue::Number(data.position))?;
        self.ins.set(Self::COLOR, PropertyValue::Color(data.color))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slicer_has_no_data() {
        assert!(Slicer::new().to_data().is_none());
    }

    #[test]
    fn test_slicer_data() {
        let mut slicer = Slicer::new();
        slicer
            .ins_mut()
            .set(Slicer::AXIS, PropertyValue::Option(SliceAxis::Z.index()))
            .unwrap();
        let data = slicer.to_data().unwrap();
        assert_eq!(data.axis, SliceAxis::Z);
        assert_eq!(data.position, 0.5);
        assert!(!data.enabled);
    }

    #[test]
    fn test_position_range_enforced() {
        let mut slicer = Slicer::new();
        let result = slicer.from_data(&SlicerData {
            enabled: true,
            axis: SliceAxis::Y,
            inverted: false,
            position: -0.5,
            color: [1.0, 0.0, 0.0],
        });
        assert!(matches!(result, Err(PropertyError::OutOfRange { .. })));
    }
}
