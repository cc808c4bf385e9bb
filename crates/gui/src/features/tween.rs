//! Tour animation targets and the states recorded over them

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use shared::EasingCurve;

use super::FeatureName;

/// A property of a fixed-table feature bound for tour animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetProperty {
    pub feature: FeatureName,
    pub path: &'static str,
}

impl TargetProperty {
    pub fn new(feature: FeatureName, path: &'static str) -> Self {
        Self { feature, path }
    }
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.feature, self.path)
    }
}

/// Values of the targets at one tour step
#[derive(Debug, Clone, PartialEq)]
pub struct TweenState {
    pub id: String,
    pub curve: EasingCurve,
    pub duration: f64,
    pub threshold: f64,
    pub values: HashMap<TargetProperty, Value>,
}

impl TweenState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            curve: EasingCurve::default(),
            duration: 1.0,
            threshold: 0.5,
            values: HashMap::new(),
        }
    }
}

/// Target set plus recorded states. Playback is not modelled; states are
/// applied instantly by the registry.
#[derive(Debug, Clone, Default)]
pub struct TweenMachine {
    targets: Vec<TargetProperty>,
    states: Vec<TweenState>,
}

impl TweenMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in insertion order
    pub fn targets(&self) -> &[TargetProperty] {
        &self.targets
    }

    pub fn has_target_property(&self, target: &TargetProperty) -> bool {
        self.targets.contains(target)
    }

    pub fn add_target_property(&mut self, target: TargetProperty) {
        if !self.has_target_property(&target) {
            self.targets.push(target);
        }
    }

    /// Remove a target and drop its recorded values
    pub fn remove_target_property(&mut self, target: &TargetProperty) {
        self.targets.retain(|t| t != target);
        for state in &mut self.states {
            state.values.remove(target);
        }
    }

    pub fn states(&self) -> &[TweenState] {
        &self.states
    }

    pub fn state(&self, id: &str) -> Option<&TweenState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Insert a state, replacing one with the same id
    pub fn set_state(&mut self, state: TweenState) {
        match self.states.iter_mut().find(|s| s.id == state.id) {
            Some(existing) => *existing = state,
            None => self.states.push(state),
        }
    }

    pub fn remove_state(&mut self, id: &str) -> Option<TweenState> {
        let index = self.states.iter().position(|s| s.id == id)?;
        Some(self.states.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTO_ZOOM: TargetProperty = TargetProperty {
        feature: FeatureName::Navigation,
        path: "AutoZoom",
    };

    #[test]
    fn test_add_is_idempotent() {
        let mut machine = TweenMachine::new();
        machine.add_target_property(AUTO_ZOOM);
        machine.add_target_property(AUTO_ZOOM);
        assert_eq!(machine.targets(), &[AUTO_ZOOM]);
    }

    #[test]
    fn test_remove_drops_state_values() {
        let mut machine = TweenMachine::new();
        machine.add_target_property(AUTO_ZOOM);
        let mut state = TweenState::new("s1");
        state.values.insert(AUTO_ZOOM, Value::Bool(false));
        machine.set_state(state);

        machine.remove_target_property(&AUTO_ZOOM);
        assert!(!machine.has_target_property(&AUTO_ZOOM));
        assert!(machine.state("s1").unwrap().values.is_empty());
    }

    #[test]
    fn test_set_state_replaces_by_id() {
        let mut machine = TweenMachine::new();
        machine.set_state(TweenState::new("a"));
        let mut replacement = TweenState::new("a");
        replacement.duration = 3.0;
        machine.set_state(replacement);
        assert_eq!(machine.states().len(), 1);
        assert_eq!(machine.state("a").unwrap().duration, 3.0);
        assert!(machine.remove_state("a").is_some());
        assert!(machine.is_empty());
    }

    #[test]
    fn test_target_display() {
        assert_eq!(AUTO_ZOOM.to_string(), "navigation/AutoZoom");
    }
}
