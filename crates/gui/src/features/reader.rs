use shared::{OptionEnum, ReaderData, ReaderPosition};

use super::{Feature, FeatureData};
use crate::property::{Property, PropertyError, PropertySet, PropertyValue};

/// Article reader panel
#[derive(Debug, Clone)]
pub struct Reader {
    ins: PropertySet,
}

impl Reader {
    pub const ENABLED: &'static str = "Enabled";
    pub const POSITION: &'static str = "Position";
    pub const ARTICLE: &'static str = "Article";

    pub fn new() -> Self {
        Self {
            ins: PropertySet::new(vec![
                Property::boolean(Self::ENABLED, false),
                Property::option(Self::POSITION, ReaderPosition::OPTIONS, 0),
                Property::text(Self::ARTICLE, "").into_static(),
            ]),
        }
    }

    pub fn position(&self) -> ReaderPosition {
        ReaderPosition::from_index(self.ins.option(Self::POSITION)).unwrap_or_default()
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Feature for Reader {
    fn type_name(&self) -> &'static str {
        "Reader"
    }

    fn display_name(&self) -> &'static str {
        "Reader"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}

impl FeatureData for Reader {
    type Data = ReaderData;

    fn to_data(&self) -> Option<ReaderData> {
        if self.ins.is_default() {
            return None;
        }
        let article = self.ins.text(Self::ARTICLE);
        Some(ReaderData {
            enabled: self.ins.boolean(Self::ENABLED),
            position: self.position(),
            article_id: (!article.is_empty()).then(|| article.to_string()),
        })
    }

    fn from_data(&mut self, data: &ReaderData) -> Result<(), PropertyError> {
        self.ins.set(Self::ENABLED, PropertyValue::Boolean(data.enabled))?;
        self.ins.set(Self::POSITION, PropertyValue::Option(data.position.index()))?;
        let article = data.article_id.clone().unwrap_or_default();
        self.ins.set(Self::ARTICLE, PropertyValue::Text(article))?;
        Ok(())
    }
}
