use shared::TapeData;

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Measuring tape between two picked surface points
#[derive(Debug, Clone)]
pub struct Tape {
    ins: PropertySet,
}

impl Tape {
    pub const ENABLED: &'static str = "Enabled";
    pub const START_POSITION: &'static str = "Start.Position";
    pub const START_DIRECTION: &'static str = "Start.Direction";
    pub const END_POSITION: &'static str = "End.Position";
    pub const END_DIRECTION: &'static str = "End.Direction";
    pub const DISTANCE: &'static str = "Distance";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::ENABLED, false),
                Property::vector3(Self::START_POSITION, [0.0; 3]),
                Property::vector3(Self::START_DIRECTION, [0.0; 3]),
                Property::vector3(Self::END_POSITION, [0.0; 3]),
                Property::vector3(Self::END_DIRECTION, [0.0; 3]),
                Property::number(Self::DISTANCE, 0.0).into_static(),
            ]),
        }
    }

    /// Distance between start and end
    pub fn distance(&self) -> f64 {
        let start = glam::DVec3::from_array(self.ins.vector3(Self::START_POSITION));
        let end = glam::DVec3::from_array(self.ins.vector3(Self::END_POSITION));
        start.distance(end)
    }

    fn update_distance(&mut self) -> Result<(), PropertyError> {
        let distance = self.distance();
        self.ins.set(Self::DISTANCE, PropertyValue::Number(distance))?;
        Ok(())
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Tape {
    fn type_name(&self) -> &'static str {
        "Tape"
    }

    fn display_name(&self) -> &'static str {
        "Tape"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Tape {
    type Data = TapeData;

    fn to_data(&self) -> Option<TapeData> {
        if self.ins.is_default() {
            return None;
        }
        Some(TapeData {
            enabled: self.ins.boolean(Self::ENABLED),
            start_position: self.ins.vector3(Self::START_POSITION),
            start_direction: self.ins.vector3(Self::START_DIRECTION),
            end_position: self.ins.vector3(Self::END_POSITION),
            end_direction: self.ins.vector3(Self::END_DIRECTION),
        })
    }

    fn from_data(&mut self, data: &TapeData) -> Result<(), PropertyError> {
        self.ins.set(Self::ENABLED, PropertyValue::Boolean(data.enabled))?;
        self.ins.set(Self::START_POSITION, PropertyValue::Vector3(data.start_position))?;
        self.ins.set(Self::START_DIRECTION, PropertyValue::Vector3(data.start_direction))?;
        self.ins.set(Self::END_POSITION, PropertyValue::Vector3(data.end_position))?;
        self.ins.set(Self::END_DIRECTION, PropertyValue::Vector3(data.end_direction))?;
        self.update_distance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_follows_data() {
        let mut tape = Tape::new();
        tape.from_data(&TapeData {
            enabled: true,
            start_position: [0.0, 0.0, 0.0],
            start_direction: [0.0, 1.0, 0.0],
            end_position: [3.0, 4.0, 0.0],
            end_direction: [0.0, 1.0, 0.0],
        })
        .unwrap();
        assert_eq!(tape.ins().number(Tape::DISTANCE), 5.0);
        assert!(!tape.ins().get(Tape::DISTANCE).unwrap().is_tween_target());
    }
}
