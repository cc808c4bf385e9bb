//! Scene-root node that owns the setup components

use thiserror::Error;
use uuid::Uuid;

/// Stable identity of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("node '{node}' already has a component of type {type_name}")]
    DuplicateComponent {
        node: String,
        type_name: &'static str,
    },
}

/// A node in the document scene; components are tracked by type name
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    pub name: String,
    components: Vec<&'static str>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Component type names in attachment order
    pub fn components(&self) -> &[&'static str] {
        &self.components
    }

    pub fn has_component(&self, type_name: &str) -> bool {
        self.components.iter().any(|c| *c == type_name)
    }

    /// Attach a component type. A node holds at most one component per type.
    pub fn attach(&mut self, type_name: &'static str) -> Result<(), NodeError> {
        if self.has_component(type_name) {
            return Err(NodeError::DuplicateComponent {
                node: self.name.clone(),
                type_name,
            });
        }
        self.components.push(type_name);
        Ok(())
    }

    /// Detach all components (node disposal)
    pub fn clear(&mut self) {
        self.components.clear();
    }
}
