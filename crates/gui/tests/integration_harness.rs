//! Integration tests for TestHarness.
//!
//! Drives setup edits, tour selection and document round trips headlessly.

use voyager_gui_lib::features::{FeatureName, Floor, Grid, Slicer, Tape};
use voyager_gui_lib::harness::TestHarness;
use voyager_gui_lib::property::{PropertyError, PropertyValue};
use voyager_gui_lib::SetupError;

#[test]
fn test_harness_starts_clean() {
    let h = TestHarness::new().unwrap();
    assert!(h.changed_features().is_empty());
    assert_eq!(
        h.target_names(),
        vec![
            "navigation/AutoRotation",
            "navigation/AutoZoom",
            "navigation/Enabled",
            "navigation/LightsFollowCamera",
            "navigation/Limits.Max.Offset",
            "navigation/Limits.Max.Orbit",
            "navigation/Limits.Min.Offset",
            "navigation/Limits.Min.Orbit",
            "navigation/Orbit.Offset",
            "navigation/Orbit.Orbit",
        ]
    );
    assert_eq!(h.node.components().len(), FeatureName::ALL.len() + 1);
}

#[test]
fn test_harness_edit_and_reload() {
    let mut h = TestHarness::new().unwrap();
    assert!(h
        .set(FeatureName::Grid, Grid::VISIBLE, PropertyValue::Boolean(true))
        .unwrap());
    h.set(FeatureName::Floor, Floor::VISIBLE, PropertyValue::Boolean(true))
        .unwrap();
    assert_eq!(h.changed_features(), vec![FeatureName::Floor, FeatureName::Grid]);

    let reloaded = h.reload(1).unwrap();
    assert_eq!(reloaded.changed_features(), h.changed_features());
    assert_eq!(
        reloaded.get(FeatureName::Grid, Grid::VISIBLE),
        Some(PropertyValue::Boolean(true))
    );
}

#[test]
fn test_harness_rejects_invalid_values() {
    let mut h = TestHarness::new().unwrap();
    let err = h
        .set(FeatureName::Slicer, Slicer::POSITION, PropertyValue::Number(1.5))
        .unwrap_err();
    assert!(matches!(err, PropertyError::OutOfRange { .. }));

    let err = h
        .set(FeatureName::Tape, Tape::ENABLED, PropertyValue::Number(1.0))
        .unwrap_err();
    assert!(matches!(err, PropertyError::TypeMismatch { .. }));
    assert!(h.changed_features().is_empty());
}

#[test]
fn test_harness_tour_selection() {
    let mut h = TestHarness::new().unwrap();
    h.select_tour_features(&[FeatureName::Slicer]);
    let names = h.target_names();
    assert!(names.contains(&"slicer/Position".to_string()));
    assert!(names.iter().all(|n| n.starts_with("slicer/")));
    assert!(names.contains(&"slicer/Color".to_string()));

    h.select_tour_features(&[]);
    assert!(h.target_names().is_empty());
}

#[test]
fn test_harness_unchanged_export_has_no_setup() {
    let h = TestHarness::new().unwrap();
    let document = h.export(2, 1).unwrap();
    assert!(document.setups.is_none());

    let err = h.reload(0).unwrap_err();
    assert_eq!(err, SetupError::MissingReference { scene_index: 0 });
}

#[test]
fn test_harness_export_path_map() {
    let mut h = TestHarness::new().unwrap();
    h.set(FeatureName::Grid, Grid::LINES, PropertyValue::Number(20.0))
        .unwrap();

    let mut document = voyager_gui_lib::fixtures::empty_document(3);
    let path_map = h.export_into(&mut document, 2).unwrap();
    assert_eq!(path_map.len(), FeatureName::ALL.len());
    assert!(path_map.contains_path("scenes/2/setup/grid"));
    assert_eq!(document.scenes[2].setup, Some(0));

    let mut other = TestHarness::new().unwrap();
    let imported = other.import(&document, 2).unwrap();
    assert_eq!(imported.paths(), path_map.paths());
    assert_eq!(
        other.get(FeatureName::Grid, Grid::LINES),
        Some(PropertyValue::Number(20.0))
    );
}
