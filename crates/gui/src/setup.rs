//! Scene setup: the fixed feature table attached to a scene-root node.
//!
//! [`FeatureRegistry`] owns one instance per [`FeatureName`] plus a
//! [`Snapshots`] component. It maps feature state to and from the document's
//! setup records and decides which properties the tour system may animate.

use std::collections::BTreeMap;

use shared::{Document, Setup};
use tracing::debug;

use crate::error::SetupError;
use crate::features::{
    Background, Feature, FeatureData, FeatureName, Floor, Grid, Interface, OrbitNavigation,
    Reader, Slicer, Snapshots, Tape, TargetProperty, Tours, TweenMachine, TweenState, Viewer,
};
use crate::node::{Node, NodeId};
use crate::path_map::{ComponentRef, PathMap};
use crate::property::{Property, PropertyError};

/// Requested tour membership per feature; absent names are excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourFeatureSelection(BTreeMap<FeatureName, bool>);

impl TourFeatureSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with only the given features enabled
    pub fn enabled<I: IntoIterator<Item = FeatureName>>(names: I) -> Self {
        names.into_iter().map(|name| (name, true)).collect()
    }

    pub fn set(&mut self, name: FeatureName, enabled: bool) {
        self.0.insert(name, enabled);
    }

    pub fn get(&self, name: FeatureName) -> bool {
        self.0.get(&name).copied().unwrap_or(false)
    }

    /// Enabled names in table order
    pub fn enabled_names(&self) -> Vec<FeatureName> {
        FeatureName::ALL
            .into_iter()
            .filter(|name| self.get(*name))
            .collect()
    }
}

impl FromIterator<(FeatureName, bool)> for TourFeatureSelection {
    fn from_iter<I: IntoIterator<Item = (FeatureName, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Non-static properties of one feature, as offered to tour authoring
#[derive(Debug, Clone, PartialEq)]
pub struct TourFeatureInfo {
    pub name: FeatureName,
    pub display_name: &'static str,
    pub properties: Vec<&'static str>,
}

/// One owned instance per fixed-table name
#[derive(Debug, Clone, Default)]
pub struct FeatureSlots {
    pub interface: Interface,
    pub reader: Reader,
    pub viewer: Viewer,
    pub navigation: OrbitNavigation,
    pub background: Background,
    pub floor: Floor,
    pub grid: Grid,
    pub tape: Tape,
    pub slicer: Slicer,
    pub tours: Tours,
}

impl FeatureSlots {
    pub fn get(&self, name: FeatureName) -> &dyn Feature {
        match name {
            FeatureName::Interface => &self.interface,
            FeatureName::Reader => &self.reader,
            FeatureName::Viewer => &self.viewer,
            FeatureName::Navigation => &self.navigation,
            FeatureName::Background => &self.background,
            FeatureName::Floor => &self.floor,
            FeatureName::Grid => &self.grid,
            FeatureName::Tape => &self.tape,
            FeatureName::Slicer => &self.slicer,
            FeatureName::Tours => &self.tours,
        }
    }

    pub fn get_mut(&mut self, name: FeatureName) -> &mut dyn Feature {
        match name {
            FeatureName::Interface => &mut self.interface,
            FeatureName::Reader => &mut self.reader,
            FeatureName::Viewer => &mut self.viewer,
            FeatureName::Navigation => &mut self.navigation,
            FeatureName::Background => &mut self.background,
            FeatureName::Floor => &mut self.floor,
            FeatureName::Grid => &mut self.grid,
            FeatureName::Tape => &mut self.tape,
            FeatureName::Slicer => &mut self.slicer,
            FeatureName::Tours => &mut self.tours,
        }
    }

    /// Live animatable property, if the feature has one at `path`
    fn tween_target(&self, name: FeatureName, path: &str) -> Option<&Property> {
        self.get(name)
            .ins()
            .get(path)
            .filter(|property| property.is_tween_target())
    }

    fn read(&mut self, name: FeatureName, setup: &Setup) -> Result<(), PropertyError> {
        match name {
            FeatureName::Interface => read_data(&mut self.interface, setup.interface.as_ref()),
            FeatureName::Reader => read_data(&mut self.reader, setup.reader.as_ref()),
            FeatureName::Viewer => read_data(&mut self.viewer, setup.viewer.as_ref()),
            FeatureName::Navigation => read_data(&mut self.navigation, setup.navigation.as_ref()),
            FeatureName::Background => read_data(&mut self.background, setup.background.as_ref()),
            FeatureName::Floor => read_data(&mut self.floor, setup.floor.as_ref()),
            FeatureName::Grid => read_data(&mut self.grid, setup.grid.as_ref()),
            FeatureName::Tape => read_data(&mut self.tape, setup.tape.as_ref()),
            FeatureName::Slicer => read_data(&mut self.slicer, setup.slicer.as_ref()),
            FeatureName::Tours => read_data(&mut self.tours, setup.tours.as_ref()),
        }
    }

    fn write(&self, name: FeatureName, setup: &mut Setup) {
        match name {
            FeatureName::Interface => setup.interface = self.interface.to_data(),
            FeatureName::Reader => setup.reader = self.reader.to_data(),
            FeatureName::Viewer => setup.viewer = self.viewer.to_data(),
            FeatureName::Navigation => setup.navigation = self.navigation.to_data(),
            FeatureName::Background => setup.background = self.background.to_data(),
            FeatureName::Floor => setup.floor = self.floor.to_data(),
            FeatureName::Grid => setup.grid = self.grid.to_data(),
            FeatureName::Tape => setup.tape = self.tape.to_data(),
            FeatureName::Slicer => setup.slicer = self.slicer.to_data(),
            FeatureName::Tours => setup.tours = self.tours.to_data(),
        }
    }
}

fn read_data<F: FeatureData>(feature: &mut F, data: Option<&F::Data>) -> Result<(), PropertyError> {
    match data {
        Some(data) => feature.from_data(data),
        None => Ok(()),
    }
}

/// Feature components of one scene-root node
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    node: NodeId,
    pub features: FeatureSlots,
    snapshots: Snapshots,
}

impl FeatureRegistry {
    /// Attach every table feature and the snapshots component to `node`, then
    /// bind the navigation properties as tour targets.
    pub fn create(node: &mut Node) -> Result<Self, SetupError> {
        let features = FeatureSlots::default();
        for name in FeatureName::ALL {
            node.attach(features.get(name).type_name())?;
        }
        let snapshots = Snapshots::new(node.id());
        node.attach(snapshots.type_name())?;

        let mut registry = Self {
            node: node.id(),
            features,
            snapshots,
        };
        registry.update_tour_features(&TourFeatureSelection::enabled([FeatureName::Navigation]));
        debug!(node = %node.name, targets = registry.tween_machine().targets().len(), "setup created");
        Ok(registry)
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn feature(&self, name: FeatureName) -> &dyn Feature {
        self.features.get(name)
    }

    pub fn feature_mut(&mut self, name: FeatureName) -> &mut dyn Feature {
        self.features.get_mut(name)
    }

    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }

    pub fn tween_machine(&self) -> &TweenMachine {
        self.snapshots.machine()
    }

    /// Make tour-target membership of every animatable property match `selection`
    pub fn update_tour_features(&mut self, selection: &TourFeatureSelection) {
        let requests: Vec<(TargetProperty, bool)> = FeatureName::ALL
            .into_iter()
            .flat_map(|name| {
                let requested = selection.get(name);
                self.features
                    .get(name)
                    .ins()
                    .tween_targets()
                    .map(move |property| (TargetProperty::new(name, property.path()), requested))
                    .collect::<Vec<_>>()
            })
            .collect();

        self.snapshots.set_features(selection.enabled_names());
        let machine = self.snapshots.machine_mut();
        for (target, requested) in requests {
            let present = machine.has_target_property(&target);
            if requested && !present {
                machine.add_target_property(target);
            } else if !requested && present {
                machine.remove_target_property(&target);
            }
        }
    }

    /// Current tour-feature selection, as last set or imported
    pub fn tour_features(&self) -> TourFeatureSelection {
        let features = self.snapshots.features();
        FeatureName::ALL
            .into_iter()
            .map(|name| (name, features.contains(&name)))
            .collect()
    }

    /// Non-static property paths of every feature
    pub fn available_tour_features(&self) -> Vec<TourFeatureInfo> {
        FeatureName::ALL
            .into_iter()
            .map(|name| {
                let feature = self.features.get(name);
                TourFeatureInfo {
                    name,
                    display_name: feature.display_name(),
                    properties: feature
                        .ins()
                        .iter()
                        .filter(|p| !p.schema().is_static)
                        .map(Property::path)
                        .collect(),
                }
            })
            .collect()
    }

    pub fn log_available_tour_features(&self) {
        for info in self.available_tour_features() {
            debug!(
                feature = %info.name,
                display = info.display_name,
                properties = ?info.properties,
                "available tour feature"
            );
        }
    }

    /// Import the setup record of `document.scenes[scene_index]`.
    ///
    /// Every table path is registered in `path_map` whether or not the record
    /// has data for it. Snapshots are read last since their targets refer to
    /// those paths.
    pub fn from_document(
        &mut self,
        document: &Document,
        scene_index: usize,
        path_map: &mut PathMap,
    ) -> Result<(), SetupError> {
        let scene = document
            .scenes
            .get(scene_index)
            .ok_or(SetupError::SceneNotFound {
                scene_index,
                count: document.scenes.len(),
            })?;
        let setup = scene
            .setup
            .and_then(|index| document.setups.as_ref()?.get(index))
            .ok_or(SetupError::MissingReference { scene_index })?;

        for name in FeatureName::ALL {
            path_map.insert(PathMap::component_path(scene_index, name), self.component_ref(name));
            self.features.read(name, setup)?;
        }

        if let Some(data) = &setup.snapshots {
            let features = &self.features;
            self.snapshots
                .from_data(data, path_map, |name, path| features.tween_target(name, path))?;
        }

        debug!(scene_index, paths = path_map.len(), "setup imported");
        Ok(())
    }

    /// Export into a new setup record for `document.scenes[scene_index]`.
    ///
    /// The document is left untouched when no feature has anything to write.
    pub fn to_document(
        &self,
        document: &mut Document,
        scene_index: usize,
        path_map: &mut PathMap,
    ) -> Result<(), SetupError> {
        if scene_index >= document.scenes.len() {
            return Err(SetupError::SceneNotFound {
                scene_index,
                count: document.scenes.len(),
            });
        }

        let mut setup = Setup::default();
        for name in FeatureName::ALL {
            path_map.insert(PathMap::component_path(scene_index, name), self.component_ref(name));
            self.features.write(name, &mut setup);
        }
        setup.snapshots = self.snapshots.to_data(path_map)?;

        if setup.is_empty() {
            debug!(scene_index, "setup has no data, skipped");
            return Ok(());
        }

        let setups = document.setups.get_or_insert_with(Vec::new);
        setups.push(setup);
        let index = setups.len() - 1;
        document.scenes[scene_index].setup = Some(index);
        debug!(scene_index, setup = index, "setup exported");
        Ok(())
    }

    /// Record the current value of every tour target under `id`. An existing
    /// state keeps its curve and timing.
    pub fn capture_snapshot(&mut self, id: &str) -> Result<(), SetupError> {
        let mut state = self
            .tween_machine()
            .state(id)
            .cloned()
            .unwrap_or_else(|| TweenState::new(id));
        state.values.clear();

        for target in self.snapshots.machine().targets() {
            let property = self
                .features
                .get(target.feature)
                .ins()
                .get(target.path)
                .ok_or_else(|| SetupError::UnresolvedTarget(target.to_string()))?;
            state.values.insert(*target, property.value().to_json());
        }

        self.snapshots.machine_mut().set_state(state);
        Ok(())
    }

    /// Write a recorded state back into the features, instantly. Every value
    /// is checked before any is written.
    pub fn apply_snapshot(&mut self, id: &str) -> Result<(), SetupError> {
        let machine = self.snapshots.machine();
        let state = machine
            .state(id)
            .ok_or_else(|| SetupError::UnknownSnapshot(id.to_string()))?;

        let mut updates = Vec::with_capacity(state.values.len());
        for target in machine.targets() {
            let Some(value) = state.values.get(target) else {
                continue;
            };
            let mut property = self
                .features
                .get(target.feature)
                .ins()
                .property(target.path)?
                .clone();
            property.set_json(value)?;
            updates.push((*target, property.value().clone()));
        }

        for (target, value) in updates {
            self.features
                .get_mut(target.feature)
                .ins_mut()
                .set(target.path, value)?;
        }
        Ok(())
    }

    /// Apply the snapshot of the active tour step. Returns false when no tour
    /// step is active.
    pub fn apply_tour_step(&mut self) -> Result<bool, SetupError> {
        let Some(step_id) = self.features.tours.current_step().map(|step| step.id.clone()) else {
            return Ok(false);
        };
        self.apply_snapshot(&step_id)?;
        Ok(true)
    }

    fn component_ref(&self, feature: FeatureName) -> ComponentRef {
        ComponentRef {
            node: self.node,
            feature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyValue;

    fn registry() -> FeatureRegistry {
        FeatureRegistry::create(&mut Node::new("Scene")).unwrap()
    }

    #[test]
    fn test_create_attaches_all_components() {
        let mut node = Node::new("Scene");
        FeatureRegistry::create(&mut node).unwrap();
        assert_eq!(node.components().len(), FeatureName::ALL.len() + 1);
        assert!(node.has_component("OrbitNavigation"));
        assert!(node.has_component("Snapshots"));
    }

    #[test]
    fn test_selection_absent_is_false() {
        let selection: TourFeatureSelection = [(FeatureName::Grid, true)].into_iter().collect();
        assert!(selection.get(FeatureName::Grid));
        assert!(!selection.get(FeatureName::Floor));
        assert_eq!(selection.enabled_names(), vec![FeatureName::Grid]);
    }

    #[test]
    fn test_tour_features_follow_selection() {
        let mut registry = registry();
        assert_eq!(
            registry.tour_features().enabled_names(),
            vec![FeatureName::Navigation]
        );

        registry.update_tour_features(&TourFeatureSelection::enabled([
            FeatureName::Grid,
            FeatureName::Slicer,
        ]));
        assert_eq!(
            registry.tour_features().enabled_names(),
            vec![FeatureName::Grid, FeatureName::Slicer]
        );
        assert!(registry
            .tween_machine()
            .targets()
            .iter()
            .all(|t| t.feature != FeatureName::Navigation));
    }

    #[test]
    fn test_available_features_skip_static() {
        let registry = registry();
        let reader = registry
            .available_tour_features()
            .into_iter()
            .find(|info| info.name == FeatureName::Reader)
            .unwrap();
        assert_eq!(reader.properties, vec!["Enabled", "Position"]);
        registry.log_available_tour_features();
    }

    #[test]
    fn test_capture_and_apply_snapshot() {
        let mut registry = registry();
        registry.capture_snapshot("start").unwrap();

        registry
            .feature_mut(FeatureName::Navigation)
            .ins_mut()
            .set(OrbitNavigation::AUTO_ZOOM, PropertyValue::Boolean(false))
            .unwrap();
        registry.apply_snapshot("start").unwrap();
        assert!(registry.features.navigation.ins().boolean(OrbitNavigation::AUTO_ZOOM));

        assert_eq!(
            registry.apply_snapshot("missing"),
            Err(SetupError::UnknownSnapshot("missing".to_string()))
        );
    }

    #[test]
    fn test_invalid_snapshot_value_writes_nothing() {
        let mut registry = registry();
        registry.capture_snapshot("s").unwrap();

        let target = |path| TargetProperty::new(FeatureName::Navigation, path);
        let mut state = registry.tween_machine().state("s").unwrap().clone();
        state.values.insert(target(OrbitNavigation::ENABLED), false.into());
        state
            .values
            .insert(target(OrbitNavigation::AUTO_ROTATION), "not a bool".into());
        registry.snapshots.machine_mut().set_state(state);

        let err = registry.apply_snapshot("s").unwrap_err();
        assert!(matches!(
            err,
            SetupError::Property(PropertyError::InvalidJson { ref path, .. }) if path == "AutoRotation"
        ));
        assert!(registry.features.navigation.ins().boolean(OrbitNavigation::ENABLED));
    }

    #[test]
    fn test_orbit_is_default_target() {
        let registry = registry();
        let targets = registry.tween_machine().targets();
        let target = |path| TargetProperty::new(FeatureName::Navigation, path);
        assert!(targets.contains(&target(OrbitNavigation::ORBIT)));
        assert!(targets.contains(&target(OrbitNavigation::OFFSET)));
        assert!(!targets.contains(&target(OrbitNavigation::TYPE)));
        assert!(!targets.contains(&target(OrbitNavigation::ZOOM_EXTENTS)));
    }

    #[test]
    fn test_to_document_unknown_scene() {
        let registry = registry();
        let mut document = Document::with_scenes(1);
        let err = registry
            .to_document(&mut document, 3, &mut PathMap::new())
            .unwrap_err();
        assert_eq!(err, SetupError::SceneNotFound { scene_index: 3, count: 1 });
    }
}
