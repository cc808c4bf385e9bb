//! Headless test harness for programmatic setup manipulation.
//!
//! Owns a scene-root node with its feature registry and wraps document
//! import/export so tests can drive them without the UI.

use shared::Document;

use crate::error::SetupError;
use crate::features::FeatureName;
use crate::node::Node;
use crate::path_map::PathMap;
use crate::property::{PropertyError, PropertyValue};
use crate::setup::{FeatureRegistry, TourFeatureSelection};

/// Headless test harness — a node and its setup
#[derive(Debug)]
pub struct TestHarness {
    pub node: Node,
    pub setup: FeatureRegistry,
}

impl TestHarness {
    /// Create a harness with a freshly created setup.
    pub fn new() -> Result<Self, SetupError> {
        let mut node = Node::new("Scene");
        let setup = FeatureRegistry::create(&mut node)?;
        Ok(Self { node, setup })
    }

    // ── Properties ───────────────────────────────────────────

    /// Set a property of a feature
    pub fn set(
        &mut self,
        feature: FeatureName,
        path: &str,
        value: PropertyValue,
    ) -> Result<bool, PropertyError> {
        self.setup.feature_mut(feature).ins_mut().set(path, value)
    }

    /// Current value of a feature property
    pub fn get(&self, feature: FeatureName, path: &str) -> Option<PropertyValue> {
        self.setup
            .feature(feature)
            .ins()
            .get(path)
            .map(|p| p.value().clone())
    }

    /// Features with at least one non-default property
    pub fn changed_features(&self) -> Vec<FeatureName> {
        FeatureName::ALL
            .into_iter()
            .filter(|name| !self.setup.feature(*name).ins().is_default())
            .collect()
    }

    // ── Tours ────────────────────────────────────────────────

    /// Enable exactly the given features for tours
    pub fn select_tour_features(&mut self, names: &[FeatureName]) {
        self.setup
            .update_tour_features(&TourFeatureSelection::enabled(names.iter().copied()));
    }

    /// Tour targets as `feature/path` strings, sorted
    pub fn target_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .setup
            .tween_machine()
            .targets()
            .iter()
            .map(ToString::to_string)
            .collect();
        names.sort();
        names
    }

    // ── Documents ────────────────────────────────────────────

    /// Export into `document` and return the path map the export built
    pub fn export_into(
        &self,
        document: &mut Document,
        scene_index: usize,
    ) -> Result<PathMap, SetupError> {
        let mut path_map = PathMap::new();
        self.setup.to_document(document, scene_index, &mut path_map)?;
        Ok(path_map)
    }

    /// Export into a new document with `scene_count` scenes
    pub fn export(&self, scene_count: usize, scene_index: usize) -> Result<Document, SetupError> {
        let mut document = Document::with_scenes(scene_count);
        self.export_into(&mut document, scene_index)?;
        Ok(document)
    }

    /// Import `document` into this harness
    pub fn import(
        &mut self,
        document: &Document,
        scene_index: usize,
    ) -> Result<PathMap, SetupError> {
        let mut path_map = PathMap::new();
        self.setup
            .from_document(document, scene_index, &mut path_map)?;
        Ok(path_map)
    }

    /// Round trip through JSON into a fresh harness
    pub fn reload(&self, scene_index: usize) -> Result<Self, SetupError> {
        let document = self.export(scene_index + 1, scene_index)?;
        let json = document.to_json_pretty().unwrap_or_default();
        let document = Document::from_json(&json).unwrap_or(document);

        let mut fresh = Self::new()?;
        fresh.import(&document, scene_index)?;
        Ok(fresh)
    }
}
