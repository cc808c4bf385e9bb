//! Snapshots: tour targets and recorded states, persisted by document path

use serde_json::Value;
use shared::{SnapshotState, SnapshotsData};

use super::tween::{TargetProperty, TweenMachine, TweenState};
use super::{Feature, FeatureName};
use crate::error::SetupError;
use crate::node::NodeId;
use crate::path_map::{ComponentRef, PathMap};
use crate::property::{Property, PropertySet};

#[derive(Debug, Clone)]
pub struct Snapshots {
    node: NodeId,
    ins: PropertySet,
    /// Tour-feature selection, in table order
    features: Vec<FeatureName>,
    machine: TweenMachine,
}

impl Snapshots {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            ins: PropertySet::default(),
            features: Vec::new(),
            machine: TweenMachine::new(),
        }
    }

    pub fn machine(&self) -> &TweenMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut TweenMachine {
        &mut self.machine
    }

    pub fn features(&self) -> &[FeatureName] {
        &self.features
    }

    pub fn set_features(&mut self, features: Vec<FeatureName>) {
        self.features = features;
    }

    /// Features with at least one target, in table order
    pub fn target_features(&self) -> Vec<FeatureName> {
        FeatureName::ALL
            .into_iter()
            .filter(|name| self.machine.targets().iter().any(|t| t.feature == *name))
            .collect()
    }

    /// Serialize targets as `{componentPath}/{propertyPath}`. Nothing is
    /// written until a state has been recorded.
    pub fn to_data(&self, path_map: &PathMap) -> Result<Option<SnapshotsData>, SetupError> {
        if self.machine.states().is_empty() {
            return Ok(None);
        }

        let targets = self.machine.targets();
        let target_paths = targets
            .iter()
            .map(|target| {
                let component = ComponentRef {
                    node: self.node,
                    feature: target.feature,
                };
                path_map
                    .path(&component)
                    .map(|path| format!("{path}/{}", target.path))
                    .ok_or_else(|| SetupError::UnresolvedTarget(target.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let states = self
            .machine
            .states()
            .iter()
            .map(|state| SnapshotState {
                id: state.id.clone(),
                curve: state.curve,
                duration: state.duration,
                threshold: state.threshold,
                values: targets
                    .iter()
                    .map(|t| state.values.get(t).cloned().unwrap_or(Value::Null))
                    .collect(),
            })
            .collect();

        Ok(Some(SnapshotsData {
            features: self
                .features
                .iter()
                .map(|name| name.as_str().to_string())
                .collect(),
            targets: target_paths,
            states,
        }))
    }

    /// Replace the selection, targets and states from a sub-document.
    ///
    /// `resolve` maps a feature and property path to the live animatable
    /// property, or `None` if the feature has no such property. Every state
    /// value is checked against its property. Fails without mutating on any
    /// unknown feature, unresolved target or invalid state.
    pub fn from_data<'a, F>(
        &mut self,
        data: &SnapshotsData,
        path_map: &PathMap,
        resolve: F,
    ) -> Result<(), SetupError>
    where
        F: Fn(FeatureName, &str) -> Option<&'a Property>,
    {
        let features = data
            .features
            .iter()
            .map(|key| {
                key.parse::<FeatureName>()
                    .map_err(|_| SetupError::UnknownFeature(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let resolved = data
            .targets
            .iter()
            .map(|target_path| self.resolve_target(target_path, path_map, &resolve))
            .collect::<Result<Vec<_>, _>>()?;

        let mut states = Vec::with_capacity(data.states.len());
        for state in &data.states {
            if state.values.len() != resolved.len() {
                return Err(SetupError::SnapshotMismatch {
                    id: state.id.clone(),
                    expected: resolved.len(),
                    found: state.values.len(),
                });
            }
            let mut tween_state = TweenState::new(state.id.clone());
            tween_state.curve = state.curve;
            tween_state.duration = state.duration;
            tween_state.threshold = state.threshold;
            for ((target, property), value) in resolved.iter().zip(&state.values) {
                if value.is_null() {
                    continue;
                }
                Property::clone(property).set_json(value)?;
                tween_state.values.insert(*target, value.clone());
            }
            states.push(tween_state);
        }

        self.machine.clear();
        for (target, _) in &resolved {
            self.machine.add_target_property(*target);
        }
        for state in states {
            self.machine.set_state(state);
        }
        self.features = if data.features.is_empty() {
            self.target_features()
        } else {
            features
        };
        Ok(())
    }

    fn resolve_target<'a, F>(
        &self,
        target_path: &str,
        path_map: &PathMap,
        resolve: &F,
    ) -> Result<(TargetProperty, &'a Property), SetupError>
    where
        F: Fn(FeatureName, &str) -> Option<&'a Property>,
    {
        let unresolved = || SetupError::UnresolvedTarget(target_path.to_string());

        // Property paths may contain dots but never '/'
        let (component_path, property_path) = target_path.rsplit_once('/').ok_or_else(unresolved)?;
        let component = path_map.component(component_path).ok_or_else(unresolved)?;
        if component.node != self.node {
            return Err(unresolved());
        }
        let property = resolve(component.feature, property_path).ok_or_else(unresolved)?;
        Ok((TargetProperty::new(component.feature, property.path()), property))
    }
}

impl Feature for Snapshots {
    fn type_name(&self) -> &'static str {
        "Snapshots"
    }

    fn display_name(&self) -> &'static str {
        "Snapshots"
    }

    fn ins(&self) -> &PropertySet {
        &self.ins
    }

    fn ins_mut(&mut self) -> &mut PropertySet {
        &mut self.ins
    }
}
