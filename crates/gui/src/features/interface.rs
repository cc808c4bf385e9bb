use shared::InterfaceData;

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Visibility of the viewer's chrome
#[derive(Debug, Clone)]
pub struct Interface {
    ins: PropertySet,
}

impl Interface {
    pub const VISIBLE: &'static str = "Visible";
    pub const LOGO: &'static str = "Logo";
    pub const MENU: &'static str = "Menu";
    pub const TOOLS: &'static str = "Tools";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::VISIBLE, true),
                Property::boolean(Self::LOGO, true),
                Property::boolean(Self::MENU, true),
                Property::boolean(Self::TOOLS, true),
            ]),
        }
    }
}

impl Default for Interface {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Interface {
    fn type_name(&self) -> &'static str {
        "Interface"
    }

    fn display_name(&self) -> &'static str {
        "Interface"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Interface {
    type Data = InterfaceData;

    fn to_data(&self) -> Option<InterfaceData> {
        if self.ins.is_default() {
            return None;
        }
        Some(InterfaceData {
            visible: self.ins.boolean(Self::VISIBLE),
            logo: self.ins.boolean(Self::LOGO),
            menu: self.ins.boolean(Self::MENU),
            tools: self.ins.boolean(Self::TOOLS),
        })
    }

    fn from_data(&mut self, data: &InterfaceData) -> Result<(), PropertyError> {
        self.ins.set(Self::VISIBLE, PropertyValue::Boolean(data.visible))?;
        self.ins.set(Self::LOGO, PropertyValue::Boolean(data.logo))?;
        self.ins.set(Self::MENU, PropertyValue::Boolean(data.menu))?;
        self.ins.set(Self::TOOLS, PropertyValue::Boolean(data.tools))?;
        Ok(())
    }
}
