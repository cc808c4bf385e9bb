use shared::{NavigationData, NavigationType, OptionEnum, OrbitData};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Orbit camera navigation
#[derive(Debug, Clone)]
pub struct OrbitNavigation {
    ins: PropertySet,
}

impl OrbitNavigation {
    pub const TYPE: &'static str = "Type";
    pub const ENABLED: &'static str = "Enabled";
    pub const AUTO_ZOOM: &'static str = "AutoZoom";
    pub const LIGHTS_FOLLOW_CAMERA: &'static str = "LightsFollowCamera";
    pub const AUTO_ROTATION: &'static str = "AutoRotation";
    pub const ZOOM_EXTENTS: &'static str = "ZoomExtents";
    pub const ORBIT: &'static str = "Orbit.Orbit";
    pub const OFFSET: &'static str = "Orbit.Offset";
    pub const MIN_ORBIT: &'static str = "Limits.Min.Orbit";
    pub const MAX_ORBIT: &'static str = "Limits.Max.Orbit";
    pub const MIN_OFFSET: &'static str = "Limits.Min.Offset";
    pub const MAX_OFFSET: &'static str = "Limits.Max.Offset";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::option(Self::TYPE, NavigationType::OPTIONS, 0).into_static(),
                Property::boolean(Self::ENABLED, true),
                Property::boolean(Self::AUTO_ZOOM, true),
                Property::boolean(Self::LIGHTS_FOLLOW_CAMERA, true),
                Property::boolean(Self::AUTO_ROTATION, false),
                Property::event(Self::ZOOM_EXTENTS),
                Property::vector3(Self::ORBIT, [-25.0, -25.0, 0.0]),
                Property::vector3(Self::OFFSET, [0.0, 0.0, 100.0]),
                Property::vector3(Self::MIN_ORBIT, [-90.0, -360.0, -360.0]),
                Property::vector3(Self::MAX_ORBIT, [90.0, 360.0, 360.0]),
                Property::vector3(Self::MIN_OFFSET, [-1000.0, -1000.0, 0.1]),
                Property::vector3(Self::MAX_OFFSET, [1000.0, 1000.0, 1000.0]),
            ]),
        }
    }

    /// Trigger a zoom to the model's extents
    pub fn zoom_extents(&mut self) {
        if let Some(event) = self.ins.get_mut(Self::ZOOM_EXTENTS) {
            event.fire();
        }
    }
}

impl Default for OrbitNavigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for OrbitNavigation {
    fn type_name(&self) -> &'static str {
        "OrbitNavigation"
    }

    fn display_name(&self) -> &'static str {
        "Navigation"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for OrbitNavigation {
    type Data = NavigationData;

    fn to_data(&self) -> Option<NavigationData> {
        if self.ins.is_default() {
            return None;
        }
        let ins = &self.ins;
        Some(NavigationData {
            nav_type: NavigationType::from_index(ins.option(Self::TYPE)).unwrap_or_default(),
            enabled: ins.boolean(Self::ENABLED),
            auto_zoom: ins.boolean(Self::AUTO_ZOOM),
            lights_follow_camera: ins.boolean(Self::LIGHTS_FOLLOW_CAMERA),
            auto_rotation: ins.boolean(Self::AUTO_ROTATION),
            orbit: OrbitData {
                orbit: ins.vector3(Self::ORBIT),
                offset: ins.vector3(Self::OFFSET),
                min_orbit: ins.vector3(Self::MIN_ORBIT),
                max_orbit: ins.vector3(Self::MAX_ORBIT),
                min_offset: ins.vector3(Self::MIN_OFFSET),
                max_offset: ins.vector3(Self::MAX_OFFSET),
            },
        })
    }

    fn from_data(&mut self, data: &NavigationData) -> Result<(), PropertyError> {
        let ins = &mut self.ins;
        ins.set(Self::TYPE, PropertyValue::Option(data.nav_type.index()))?;
        ins.set(Self::ENABLED, PropertyValue::Boolean(data.enabled))?;
        ins.set(Self::AUTO_ZOOM, PropertyValue::Boolean(data.auto_zoom))?;
        ins.set(
            Self::LIGHTS_FOLLOW_CAMERA,
            PropertyValue::Boolean(data.lights_follow_camera),
        )?;
        ins.set(Self::AUTO_ROTATION, PropertyValue::Boolean(data.auto_rotation))?;

        let orbit = &data.orbit;
        ins.set(Self::ORBIT, PropertyValue::Vector3(orbit.orbit))?;
        ins.set(Self::OFFSET, PropertyValue::Vector3(orbit.offset))?;
        ins.set(Self::MIN_ORBIT, PropertyValue::Vector3(orbit.min_orbit))?;
        ins.set(Self::MAX_ORBIT, PropertyValue::Vector3(orbit.max_orbit))?;
        ins.set(Self::MIN_OFFSET, PropertyValue::Vector3(orbit.min_offset))?;
        ins.set(Self::MAX_OFFSET, PropertyValue::Vector3(orbit.max_offset))?;
        Ok(())
    }
}
