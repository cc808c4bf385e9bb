//! Integration tests for the feature registry and document import/export.

use shared::{Document, SliceAxis};
use voyager_gui_lib::features::{
    Feature, FeatureName, Grid, OrbitNavigation, Slicer, TargetProperty, Tours,
};
use voyager_gui_lib::fixtures;
use voyager_gui_lib::node::{Node, NodeError};
use voyager_gui_lib::path_map::PathMap;
use voyager_gui_lib::property::{PropertyError, PropertyValue};
use voyager_gui_lib::setup::{FeatureRegistry, TourFeatureSelection};
use voyager_gui_lib::SetupError;

fn registry() -> FeatureRegistry {
    FeatureRegistry::create(&mut Node::new("Scene")).unwrap()
}

fn sorted_targets(registry: &FeatureRegistry) -> Vec<TargetProperty> {
    let mut targets = registry.tween_machine().targets().to_vec();
    targets.sort();
    targets
}

#[test]
fn test_create_binds_navigation_only() {
    let registry = registry();
    let targets = sorted_targets(&registry);

    let expected: Vec<TargetProperty> = [
        OrbitNavigation::ENABLED,
        OrbitNavigation::AUTO_ZOOM,
        OrbitNavigation::LIGHTS_FOLLOW_CAMERA,
        OrbitNavigation::AUTO_ROTATION,
        OrbitNavigation::ORBIT,
        OrbitNavigation::OFFSET,
        OrbitNavigation::MIN_ORBIT,
        OrbitNavigation::MAX_ORBIT,
        OrbitNavigation::MIN_OFFSET,
        OrbitNavigation::MAX_OFFSET,
    ]
    .into_iter()
    .map(|path| TargetProperty::new(FeatureName::Navigation, path))
    .collect::<std::collections::BTreeSet<_>>()
    .into_iter()
    .collect();
    assert_eq!(targets, expected);
}

#[test]
fn test_update_tour_features_idempotent() {
    let mut registry = registry();
    let selection: TourFeatureSelection = [
        (FeatureName::Grid, true),
        (FeatureName::Viewer, true),
        (FeatureName::Navigation, false),
    ]
    .into_iter()
    .collect();

    registry.update_tour_features(&selection);
    let once = sorted_targets(&registry);
    registry.update_tour_features(&selection);
    assert_eq!(sorted_targets(&registry), once);

    assert!(once.iter().all(|t| matches!(t.feature, FeatureName::Grid | FeatureName::Viewer)));
    assert!(once.contains(&TargetProperty::new(FeatureName::Viewer, "Shader")));
    assert!(once.contains(&TargetProperty::new(FeatureName::Grid, Grid::COLOR)));
}

#[test]
fn test_empty_selection_clears_targets() {
    let mut registry = registry();
    registry.update_tour_features(&TourFeatureSelection::new());
    assert!(registry.tween_machine().targets().is_empty());
}

#[test]
fn test_default_registry_leaves_document_untouched() {
    let registry = registry();
    let mut document = fixtures::empty_document(2);
    let before = document.clone();

    registry
        .to_document(&mut document, 1, &mut PathMap::new())
        .unwrap();
    assert_eq!(document, before);
    assert!(document.setups.is_none());
    assert!(document.scenes[1].setup.is_none());
}

#[test]
fn test_roundtrip_restores_values() {
    let mut source = registry();
    let features = &mut source.features;
    features
        .grid
        .ins_mut()
        .set(Grid::VISIBLE, PropertyValue::Boolean(true))
        .unwrap();
    features
        .slicer
        .ins_mut()
        .set(Slicer::AXIS, PropertyValue::Option(2))
        .unwrap();
    features
        .slicer
        .ins_mut()
        .set(Slicer::POSITION, PropertyValue::Number(0.25))
        .unwrap();
    features.tours.add_tour(fixtures::tour("Intro", &["a", "b"]));

    let mut document = fixtures::empty_document(1);
    source
        .to_document(&mut document, 0, &mut PathMap::new())
        .unwrap();
    assert_eq!(document.scenes[0].setup, Some(0));
    let setup = document.scene_setup(0).unwrap();
    assert!(setup.grid.is_some());
    assert!(setup.slicer.is_some());
    assert!(setup.floor.is_none());

    let json = document.to_json_pretty().unwrap();
    let document = Document::from_json(&json).unwrap();

    let mut target = registry();
    target
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap();
    assert!(target.features.grid.ins().boolean(Grid::VISIBLE));
    assert_eq!(target.features.slicer.axis(), SliceAxis::Z);
    assert_eq!(target.features.slicer.position(), 0.25);
    assert_eq!(target.features.tours.tours().len(), 1);
    assert!(target.features.floor.ins().is_default());
}

#[test]
fn test_export_appends_after_existing_setups() {
    let mut registry = registry();
    registry
        .features
        .grid
        .ins_mut()
        .set(Grid::LINES, PropertyValue::Number(12.0))
        .unwrap();

    let mut document = fixtures::document_with_setup(3, 0, fixtures::grid_setup(true, 5.0));
    registry
        .to_document(&mut document, 2, &mut PathMap::new())
        .unwrap();
    assert_eq!(document.setups.as_ref().map(Vec::len), Some(2));
    assert_eq!(document.scenes[2].setup, Some(1));
    assert_eq!(document.scenes[0].setup, Some(0));
}

#[test]
fn test_missing_reference_mutates_nothing() {
    let mut registry = registry();
    let mut path_map = PathMap::new();
    let document = fixtures::empty_document(1);

    let err = registry
        .from_document(&document, 0, &mut path_map)
        .unwrap_err();
    assert_eq!(err, SetupError::MissingReference { scene_index: 0 });
    assert!(path_map.is_empty());
    for name in FeatureName::ALL {
        assert!(registry.feature(name).ins().is_default(), "{name} changed");
    }
}

#[test]
fn test_dangling_reference_is_missing() {
    let mut registry = registry();
    let mut document = fixtures::document_with_setup(1, 0, fixtures::grid_setup(true, 5.0));
    document.scenes[0].setup = Some(7);

    let err = registry
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap_err();
    assert_eq!(err, SetupError::MissingReference { scene_index: 0 });
    assert!(!registry.features.grid.ins().boolean(Grid::VISIBLE));
}

#[test]
fn test_paths_registered_without_data() {
    let mut registry = registry();
    let document = fixtures::document_with_setup(3, 2, fixtures::grid_setup(false, 10.0));
    let mut path_map = PathMap::new();
    registry.from_document(&document, 2, &mut path_map).unwrap();

    assert!(path_map.contains_path("scenes/2/setup/grid"));
    assert!(path_map.contains_path("scenes/2/setup/tape"));
    assert_eq!(path_map.len(), FeatureName::ALL.len());

    let grid = path_map.component("scenes/2/setup/grid").unwrap();
    assert_eq!(grid.node, registry.node_id());
    assert_eq!(grid.feature, FeatureName::Grid);
}

#[test]
fn test_feature_errors_propagate() {
    let mut registry = registry();
    let setup = shared::Setup {
        slicer: Some(fixtures::slicer_data(true, SliceAxis::Y, 4.0)),
        ..Default::default()
    };
    let document = fixtures::document_with_setup(1, 0, setup);

    let err = registry
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SetupError::Property(PropertyError::OutOfRange { ref path, .. }) if path == "Position"
    ));
}

#[test]
fn test_snapshots_survive_document() {
    let mut source = registry();
    source.update_tour_features(&TourFeatureSelection::enabled([
        FeatureName::Grid,
        FeatureName::Navigation,
    ]));
    source
        .features
        .grid
        .ins_mut()
        .set(Grid::VISIBLE, PropertyValue::Boolean(true))
        .unwrap();
    source.capture_snapshot("grid-on").unwrap();
    source.features.tours.add_tour(fixtures::tour("Tour", &["grid-on"]));

    let mut document = fixtures::empty_document(1);
    source
        .to_document(&mut document, 0, &mut PathMap::new())
        .unwrap();
    let snapshots = document.scene_setup(0).unwrap().snapshots.as_ref().unwrap();
    assert!(snapshots
        .targets
        .contains(&"scenes/0/setup/grid/Visible".to_string()));
    assert_eq!(snapshots.features, vec!["navigation", "grid"]);

    let mut target = registry();
    target
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap();
    assert_eq!(sorted_targets(&target), sorted_targets(&source));

    target
        .features
        .grid
        .ins_mut()
        .set(Grid::VISIBLE, PropertyValue::Boolean(false))
        .unwrap();
    target.features.tours.start(Some(0)).unwrap();
    assert!(target.apply_tour_step().unwrap());
    assert!(target.features.grid.ins().boolean(Grid::VISIBLE));
}

#[test]
fn test_unresolved_snapshot_target() {
    let mut source = registry();
    source.capture_snapshot("s").unwrap();
    let mut document = fixtures::empty_document(1);
    source
        .to_document(&mut document, 0, &mut PathMap::new())
        .unwrap();

    let setups = document.setups.as_mut().unwrap();
    let snapshots = setups[0].snapshots.as_mut().unwrap();
    snapshots.targets[0] = "scenes/0/setup/navigation/Type".to_string();

    let err = registry()
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap_err();
    assert_eq!(
        err,
        SetupError::UnresolvedTarget("scenes/0/setup/navigation/Type".to_string())
    );
}

#[test]
fn test_tour_without_steps_applies_nothing() {
    let mut registry = registry();
    assert!(!registry.apply_tour_step().unwrap());
    assert_eq!(registry.feature(FeatureName::Tours).type_name(), "Tours");
    assert_eq!(registry.features.tours.ins().number(Tours::TOUR_INDEX), -1.0);
}

#[test]
fn test_duplicate_component_propagates() {
    let mut node = Node::new("Scene");
    node.attach("Grid").unwrap();

    let err = FeatureRegistry::create(&mut node).unwrap_err();
    assert_eq!(
        err,
        SetupError::Node(NodeError::DuplicateComponent {
            node: "Scene".to_string(),
            type_name: "Grid",
        })
    );
}

#[test]
fn test_invalid_snapshot_value_rejected_on_import() {
    let mut source = registry();
    source.capture_snapshot("s").unwrap();
    let mut document = fixtures::empty_document(1);
    source
        .to_document(&mut document, 0, &mut PathMap::new())
        .unwrap();

    let setups = document.setups.as_mut().unwrap();
    let snapshots = setups[0].snapshots.as_mut().unwrap();
    let index = |path: &str| {
        snapshots
            .targets
            .iter()
            .position(|t| t == &format!("scenes/0/setup/navigation/{path}"))
            .unwrap()
    };
    let enabled = index(OrbitNavigation::ENABLED);
    let auto_rotation = index(OrbitNavigation::AUTO_ROTATION);
    snapshots.states[0].values[enabled] = serde_json::Value::Bool(false);
    snapshots.states[0].values[auto_rotation] = serde_json::json!("not a bool");

    let mut target = registry();
    let before = sorted_targets(&target);
    let err = target
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SetupError::Property(PropertyError::InvalidJson { ref path, .. })
            if path == OrbitNavigation::AUTO_ROTATION
    ));
    assert_eq!(sorted_targets(&target), before);
    assert!(target.tween_machine().states().is_empty());
    assert!(target.apply_snapshot("s").is_err());
    assert!(target.features.navigation.ins().boolean(OrbitNavigation::ENABLED));
}

#[test]
fn test_tour_selection_survives_document() {
    let mut source = registry();
    source.update_tour_features(&TourFeatureSelection::enabled([
        FeatureName::Slicer,
        FeatureName::Viewer,
    ]));
    source.capture_snapshot("s").unwrap();
    let mut document = fixtures::empty_document(1);
    source
        .to_document(&mut document, 0, &mut PathMap::new())
        .unwrap();

    let mut target = registry();
    target
        .from_document(&document, 0, &mut PathMap::new())
        .unwrap();
    assert_eq!(
        target.tour_features().enabled_names(),
        vec![FeatureName::Viewer, FeatureName::Slicer]
    );
}

#[test]
fn test_camera_orbit_is_animated() {
    let mut registry = registry();
    registry
        .features
        .navigation
        .ins_mut()
        .set(OrbitNavigation::ORBIT, PropertyValue::Vector3([0.0, 45.0, 0.0]))
        .unwrap();
    registry.capture_snapshot("side").unwrap();

    registry
        .features
        .navigation
        .ins_mut()
        .set(OrbitNavigation::ORBIT, PropertyValue::Vector3([0.0; 3]))
        .unwrap();
    registry.apply_snapshot("side").unwrap();
    assert_eq!(
        registry.features.navigation.ins().vector3(OrbitNavigation::ORBIT),
        [0.0, 45.0, 0.0]
    );
}
