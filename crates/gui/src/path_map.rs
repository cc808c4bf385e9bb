//! Transient bimap between document paths and setup components

use std::collections::HashMap;

use crate::features::FeatureName;
use crate::node::NodeId;

/// A feature component on a specific node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub node: NodeId,
    pub feature: FeatureName,
}

/// Built fresh for one import or export call and passed by `&mut`
#[derive(Debug, Default)]
pub struct PathMap {
    by_path: HashMap<String, ComponentRef>,
    by_component: HashMap<ComponentRef, String>,
}

impl PathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// `scenes/{scene_index}/setup/{feature}`
    pub fn component_path(scene_index: usize, feature: FeatureName) -> String {
        format!("scenes/{scene_index}/setup/{feature}")
    }

    /// Record both directions, replacing stale entries on either side
    pub fn insert(&mut self, path: String, component: ComponentRef) {
        if let Some(old_component) = self.by_path.remove(&path) {
            self.by_component.remove(&old_component);
        }
        if let Some(old_path) = self.by_component.remove(&component) {
            self.by_path.remove(&old_path);
        }
        self.by_path.insert(path.clone(), component);
        self.by_component.insert(component, path);
    }

    pub fn component(&self, path: &str) -> Option<ComponentRef> {
        self.by_path.get(path).copied()
    }

    pub fn path(&self, component: &ComponentRef) -> Option<&str> {
        self.by_component.get(component).map(String::as_str)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Registered paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.by_path.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_directions() {
        let node = NodeId::new();
        let grid = ComponentRef {
            node,
            feature: FeatureName::Grid,
        };
        let mut map = PathMap::new();
        map.insert(PathMap::component_path(2, FeatureName::Grid), grid);

        assert_eq!(map.component("scenes/2/setup/grid"), Some(grid));
        assert_eq!(map.path(&grid), Some("scenes/2/setup/grid"));
        assert!(map.component("scenes/0/setup/grid").is_none());
    }

    #[test]
    fn test_reinsert_replaces_stale_path() {
        let grid = ComponentRef {
            node: NodeId::new(),
            feature: FeatureName::Grid,
        };
        let mut map = PathMap::new();
        map.insert(PathMap::component_path(0, FeatureName::Grid), grid);
        map.insert(PathMap::component_path(1, FeatureName::Grid), grid);

        assert_eq!(map.len(), 1);
        assert!(!map.contains_path("scenes/0/setup/grid"));
        assert_eq!(map.paths(), vec!["scenes/1/setup/grid"]);
    }
}
