//! Typed, named properties exposed by scene features.
//!
//! Every feature publishes an ordered [`PropertySet`]. Each [`Property`] carries a
//! [`PropertySchema`] whose flags decide whether it is persisted and whether the
//! tour system may animate it.

use serde_json::Value;
use thiserror::Error;

/// Value category of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Boolean,
    Number,
    Enum,
    String,
    Vector,
    Color,
    Object,
}

impl PropertyType {
    /// Free-form objects cannot be tweened; scalars and numeric arrays can
    pub fn is_tweenable(self) -> bool {
        !matches!(self, PropertyType::Object)
    }
}

/// Current value of a property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Boolean(bool),
    Number(f64),
    /// Index into the schema's option labels
    Option(usize),
    Text(String),
    Vector3([f64; 3]),
    Color([f64; 3]),
    Object(Value),
}

impl PropertyValue {
    pub fn value_type(&self) -> PropertyType {
        match self {
            PropertyValue::Boolean(_) => PropertyType::Boolean,
            PropertyValue::Number(_) => PropertyType::Number,
            PropertyValue::Option(_) => PropertyType::Enum,
            PropertyValue::Text(_) => PropertyType::String,
            PropertyValue::Vector3(_) => PropertyType::Vector,
            PropertyValue::Color(_) => PropertyType::Color,
            PropertyValue::Object(_) => PropertyType::Object,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<usize> {
        match self {
            PropertyValue::Option(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector3(&self) -> Option<[f64; 3]> {
        match self {
            PropertyValue::Vector3(v) | PropertyValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// JSON form used by snapshot states
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Boolean(v) => Value::Bool(*v),
            PropertyValue::Number(v) => serde_json::json!(v),
            PropertyValue::Option(v) => serde_json::json!(v),
            PropertyValue::Text(v) => Value::String(v.clone()),
            PropertyValue::Vector3(v) | PropertyValue::Color(v) => serde_json::json!(v),
            PropertyValue::Object(v) => v.clone(),
        }
    }
}

/// Errors raised when reading or writing properties
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("property '{0}' not found")]
    NotFound(String),
    #[error("property '{path}' expects {expected:?}, got {found:?}")]
    TypeMismatch {
        path: String,
        expected: PropertyType,
        found: PropertyType,
    },
    #[error("property '{path}': option {index} out of range (0..{count})")]
    OptionOutOfRange {
        path: String,
        index: usize,
        count: usize,
    },
    #[error("property '{path}': {value} outside [{min}, {max}]")]
    OutOfRange {
        path: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("property '{path}': value is not finite")]
    NotFinite { path: String },
    #[error("property '{path}': cannot read value from {value}")]
    InvalidJson { path: String, value: String },
}

/// Behavioral flags and constraints of a property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySchema {
    /// Structural, read-only from the tour's point of view
    pub is_static: bool,
    /// Fire-and-forget signal; carries no state
    pub event: bool,
    /// Labels for `Enum` properties
    pub options: Option<&'static [&'static str]>,
    /// Inclusive bounds for `Number` properties
    pub range: Option<(f64, f64)>,
}

/// A named, typed value with schema and default
#[derive(Debug, Clone)]
pub struct Property {
    path: &'static str,
    schema: PropertySchema,
    value: PropertyValue,
    default: PropertyValue,
}

impl Property {
    fn new(path: &'static str, value: PropertyValue) -> Self {
        Self {
            path,
            schema: PropertySchema::default(),
            default: value.clone(),
            value,
        }
    }

    pub fn boolean(path: &'static str, value: bool) -> Self {
        Self::new(path, PropertyValue::Boolean(value))
    }

    pub fn number(path: &'static str, value: f64) -> Self {
        Self::new(path, PropertyValue::Number(value))
    }

    pub fn option(path: &'static str, options: &'static [&'static str], index: usize) -> Self {
        let mut property = Self::new(path, PropertyValue::Option(index));
        property.schema.options = Some(options);
        property
    }

    pub fn text(path: &'static str, value: &str) -> Self {
        Self::new(path, PropertyValue::Text(value.to_string()))
    }

    pub fn vector3(path: &'static str, value: [f64; 3]) -> Self {
        Self::new(path, PropertyValue::Vector3(value))
    }

    pub fn color(path: &'static str, value: [f64; 3]) -> Self {
        Self::new(path, PropertyValue::Color(value))
    }

    pub fn object(path: &'static str, value: Value) -> Self {
        Self::new(path, PropertyValue::Object(value))
    }

    /// Event property: a counter bumped on every trigger
    pub fn event(path: &'static str) -> Self {
        let mut property = Self::new(path, PropertyValue::Number(0.0));
        property.schema.event = true;
        property
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.schema.range = Some((min, max));
        self
    }

    pub fn into_static(mut self) -> Self {
        self.schema.is_static = true;
        self
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn default_value(&self) -> &PropertyValue {
        &self.default
    }

    pub fn value_type(&self) -> PropertyType {
        self.value.value_type()
    }

    pub fn is_default(&self) -> bool {
        self.schema.event || self.value == self.default
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Non-static, non-event, non-object properties may be tour targets
    pub fn is_tween_target(&self) -> bool {
        !self.schema.is_static && !self.schema.event && self.value_type().is_tweenable()
    }

    /// Validate and store a new value. Returns whether the value changed.
    pub fn set(&mut self, value: PropertyValue) -> Result<bool, PropertyError> {
        let expected = self.value_type();
        let found = value.value_type();
        if expected != found {
            return Err(PropertyError::TypeMismatch {
                path: self.path.to_string(),
                expected,
                found,
            });
        }

        match &value {
            PropertyValue::Number(v) => self.check_number(*v)?,
            PropertyValue::Option(index) => {
                let count = self.schema.options.map_or(0, |options| options.len());
                if *index >= count {
                    return Err(PropertyError::OptionOutOfRange {
                        path: self.path.to_string(),
                        index: *index,
                        count,
                    });
                }
            }
            PropertyValue::Vector3(v) | PropertyValue::Color(v) => {
                if v.iter().any(|c| !c.is_finite()) {
                    return Err(PropertyError::NotFinite {
                        path: self.path.to_string(),
                    });
                }
            }
            _ => {}
        }

        let changed = self.value != value;
        self.value = value;
        Ok(changed)
    }

    /// Trigger an event property
    pub fn fire(&mut self) {
        if let (true, PropertyValue::Number(count)) = (self.schema.event, &mut self.value) {
            *count += 1.0;
        }
    }

    /// Read a value from its JSON form, interpreted by this property's type
    pub fn set_json(&mut self, json: &Value) -> Result<bool, PropertyError> {
        let value = match self.value_type() {
            PropertyType::Boolean => json.as_bool().map(PropertyValue::Boolean),
            PropertyType::Number => json.as_f64().map(PropertyValue::Number),
            PropertyType::Enum => match json {
                Value::String(label) => self
                    .schema
                    .options
                    .and_then(|options| options.iter().position(|o| o == label))
                    .map(PropertyValue::Option),
                _ => json
                    .as_u64()
                    .and_then(|i| usize::try_from(i).ok())
                    .map(PropertyValue::Option),
            },
            PropertyType::String => json.as_str().map(|s| PropertyValue::Text(s.to_string())),
            PropertyType::Vector => json_vector3(json).map(PropertyValue::Vector3),
            PropertyType::Color => json_vector3(json).map(PropertyValue::Color),
            PropertyType::Object => Some(PropertyValue::Object(json.clone())),
        };

        match value {
            Some(value) => self.set(value),
            None => Err(PropertyError::InvalidJson {
                path: self.path.to_string(),
                value: json.to_string(),
            }),
        }
    }

    fn check_number(&self, value: f64) -> Result<(), PropertyError> {
        if !value.is_finite() {
            return Err(PropertyError::NotFinite {
                path: self.path.to_string(),
            });
        }
        if let Some((min, max)) = self.schema.range {
            if value < min || value > max {
                return Err(PropertyError::OutOfRange {
                    path: self.path.to_string(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

fn json_vector3(json: &Value) -> Option<[f64; 3]> {
    let items = json.as_array()?;
    if items.len() != 3 {
        return None;
    }
    Some([items[0].as_f64()?, items[1].as_f64()?, items[2].as_f64()?])
}

/// Ordered collection of a feature's properties
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<Property>,
}

impl PropertySet {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn get(&self, path: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.path == path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.path == path)
    }

    pub fn property(&self, path: &str) -> Result<&Property, PropertyError> {
        self.get(path)
            .ok_or_else(|| PropertyError::NotFound(path.to_string()))
    }

    pub fn set(&mut self, path: &str, value: PropertyValue) -> Result<bool, PropertyError> {
        self.get_mut(path)
            .ok_or_else(|| PropertyError::NotFound(path.to_string()))?
            .set(value)
    }

    pub fn set_json(&mut self, path: &str, json: &Value) -> Result<bool, PropertyError> {
        self.get_mut(path)
            .ok_or_else(|| PropertyError::NotFound(path.to_string()))?
            .set_json(json)
    }

    // Typed readers fall back to the type's zero value for unknown paths.

    pub fn boolean(&self, path: &str) -> bool {
        self.get(path)
            .and_then(|p| p.value().as_bool())
            .unwrap_or(false)
    }

    pub fn number(&self, path: &str) -> f64 {
        self.get(path)
            .and_then(|p| p.value().as_number())
            .unwrap_or(0.0)
    }

    pub fn option(&self, path: &str) -> usize {
        self.get(path)
            .and_then(|p| p.value().as_option())
            .unwrap_or(0)
    }

    pub fn text(&self, path: &str) -> &str {
        self.get(path)
            .and_then(|p| p.value().as_text())
            .unwrap_or("")
    }

    pub fn vector3(&self, path: &str) -> [f64; 3] {
        self.get(path)
            .and_then(|p| p.value().as_vector3())
            .unwrap_or([0.0; 3])
    }

    /// True when nothing differs from construction defaults
    pub fn is_default(&self) -> bool {
        self.properties.iter().all(Property::is_default)
    }

    pub fn reset(&mut self) {
        for property in &mut self.properties {
            property.reset();
        }
    }

    pub fn tween_targets(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_tween_target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXES: &[&str] = &["X", "Y", "Z"];

    fn sample_set() -> PropertySet {
        PropertySet::new(vec![
            Property::boolean("Enabled", false),
            Property::option("Axis", AXES, 0),
            Property::number("Position", 0.5).with_range(0.0, 1.0),
            Property::color("Color", [0.0, 0.61, 0.87]),
            Property::vector3("Offset", [0.0, 0.0, 100.0]),
            Property::text("Title", "Intro"),
            Property::text("Article", "").into_static(),
            Property::object("Overlay", serde_json::json!({ "tags": ["a"] })),
            Property::event("Next"),
        ])
    }

    #[test]
    fn test_tween_target_predicate() {
        let set = sample_set();
        let targets: Vec<&str> = set.tween_targets().map(Property::path).collect();
        assert_eq!(
            targets,
            vec!["Enabled", "Axis", "Position", "Color", "Offset", "Title"]
        );
    }

    #[test]
    fn test_object_property() {
        let mut set = sample_set();
        let overlay = set.property("Overlay").unwrap();
        assert_eq!(overlay.value_type(), PropertyType::Object);
        assert!(!overlay.is_tween_target());

        let value = serde_json::json!({ "tags": ["a", "b"] });
        assert_eq!(set.set_json("Overlay", &value), Ok(true));
        assert_eq!(set.get("Overlay").unwrap().value().to_json(), value);
        assert!(matches!(
            set.set("Overlay", PropertyValue::Boolean(true)),
            Err(PropertyError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_tweenable_types() {
        assert!(PropertyType::Vector.is_tweenable());
        assert!(PropertyType::Color.is_tweenable());
        assert!(PropertyType::Enum.is_tweenable());
        assert!(!PropertyType::Object.is_tweenable());
    }

    #[test]
    fn test_set_validates_type() {
        let mut set = sample_set();
        let err = set.set("Enabled", PropertyValue::Number(1.0)).unwrap_err();
        assert!(matches!(err, PropertyError::TypeMismatch { .. }));
        assert!(!set.boolean("Enabled"));
    }

    #[test]
    fn test_set_validates_range_and_options() {
        let mut set = sample_set();
        assert!(matches!(
            set.set("Position", PropertyValue::Number(1.5)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            set.set("Axis", PropertyValue::Option(3)),
            Err(PropertyError::OptionOutOfRange { index: 3, count: 3, .. })
        ));
        assert!(matches!(
            set.set("Position", PropertyValue::Number(f64::NAN)),
            Err(PropertyError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_set_reports_change() {
        let mut set = sample_set();
        assert_eq!(set.set("Enabled", PropertyValue::Boolean(true)), Ok(true));
        assert_eq!(set.set("Enabled", PropertyValue::Boolean(true)), Ok(false));
        assert!(!set.is_default());
        set.reset();
        assert!(set.is_default());
    }

    #[test]
    fn test_set_json_by_type() {
        let mut set = sample_set();
        set.set_json("Axis", &serde_json::json!("Z")).unwrap();
        assert_eq!(set.option("Axis"), 2);
        set.set_json("Axis", &serde_json::json!(1)).unwrap();
        assert_eq!(set.option("Axis"), 1);
        set.set_json("Color", &serde_json::json!([1.0, 0.5, 0.0])).unwrap();
        assert_eq!(set.vector3("Color"), [1.0, 0.5, 0.0]);

        let err = set.set_json("Enabled", &serde_json::json!("yes")).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidJson { .. }));
    }

    #[test]
    fn test_event_never_dirty() {
        let mut set = sample_set();
        set.get_mut("Next").unwrap().fire();
        assert!(set.is_default());
        assert_eq!(set.number("Next"), 1.0);
    }

    #[test]
    fn test_unknown_path() {
        let mut set = sample_set();
        assert_eq!(
            set.set("Missing", PropertyValue::Boolean(true)),
            Err(PropertyError::NotFound("Missing".to_string()))
        );
        assert_eq!(set.text("Missing"), "");
    }

    #[test]
    fn test_value_json_form() {
        assert_eq!(PropertyValue::Option(2).to_json(), serde_json::json!(2));
        assert_eq!(
            PropertyValue::Vector3([1.0, 2.0, 3.0]).to_json(),
            serde_json::json!([1.0, 2.0, 3.0])
        );
    }
}
