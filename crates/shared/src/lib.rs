use serde::{Deserialize, Serialize};

mod setup;

pub use setup::*;

/// Индекс записи в `Document::setups`
pub type SetupIndex = usize;

/// Описание формата документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Default for Asset {
    fn default() -> Self {
        Self {
            asset_type: "application/si-dpo-3d.document+json".to_string(),
            version: "1.0".to_string(),
            generator: Some("Voyager".to_string()),
            copyright: None,
        }
    }
}

/// Единицы измерения сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Mm,
    #[default]
    Cm,
    M,
    Km,
    In,
    Ft,
    Yd,
    Mi,
}

/// Сцена документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    /// Ссылка на запись setup. Отсутствует, если ни одна фича не записала данные
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<SetupIndex>,
}

/// Документ — сцены и их записи setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    /// Индекс активной сцены
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<usize>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setups: Option<Vec<Setup>>,
}

impl Document {
    /// Новый документ с заданным числом пустых сцен
    pub fn with_scenes(count: usize) -> Self {
        Self {
            asset: Some(Asset::default()),
            scene: (count > 0).then_some(0),
            scenes: vec![Scene::default(); count],
            setups: None,
        }
    }

    /// Запись setup сцены, если ссылка на неё валидна
    pub fn scene_setup(&self, scene_index: usize) -> Option<&Setup> {
        let index = self.scenes.get(scene_index)?.setup?;
        self.setups.as_ref()?.get(index)
    }

    /// Разобрать документ из JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Сериализовать документ в форматированный JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(val: &T) {
        let json = serde_json::to_string(val).expect("serialize");
        let back: T = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*val, back);
    }

    #[test]
    fn test_scene_without_setup_omits_field() {
        let scene = Scene {
            name: Some("Main".to_string()),
            units: None,
            setup: None,
        };
        let json = serde_json::to_string(&scene).unwrap();
        assert_eq!(json, r#"{"name":"Main"}"#);
        roundtrip(&scene);
    }

    #[test]
    fn test_scene_setup_null_is_absent() {
        let scene: Scene = serde_json::from_str(r#"{ "setup": null }"#).unwrap();
        assert_eq!(scene.setup, None);
    }

    #[test]
    fn test_document_without_setups() {
        let doc = Document::with_scenes(2);
        let json = doc.to_json_pretty().unwrap();
        assert!(!json.contains("setups"));
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_scene_setup_lookup() {
        let mut doc = Document::with_scenes(2);
        doc.setups = Some(vec![Setup::default()]);
        doc.scenes[1].setup = Some(0);

        assert!(doc.scene_setup(0).is_none());
        assert!(doc.scene_setup(1).is_some());

        doc.scenes[1].setup = Some(5);
        assert!(doc.scene_setup(1).is_none());
        assert!(doc.scene_setup(9).is_none());
    }

    #[test]
    fn test_units_lowercase() {
        let json = serde_json::to_string(&Units::Mm).unwrap();
        assert_eq!(json, r#""mm""#);
        roundtrip(&Units::Ft);
    }

    #[test]
    fn test_asset_type_field() {
        let json = serde_json::to_string(&Asset::default()).unwrap();
        assert!(json.contains(r#""type":"application/si-dpo-3d.document+json""#));
    }
}
