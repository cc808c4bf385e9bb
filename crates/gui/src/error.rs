use thiserror::Error;

use crate::node::NodeError;
use crate::property::PropertyError;

/// Failures of setup creation, document import/export and snapshots
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("scene {scene_index} has no valid setup reference")]
    MissingReference { scene_index: usize },

    #[error("scene {scene_index} not found (document has {count} scenes)")]
    SceneNotFound { scene_index: usize, count: usize },

    #[error("cannot resolve tour target '{0}'")]
    UnresolvedTarget(String),

    #[error("snapshot '{0}' not found")]
    UnknownSnapshot(String),

    #[error("unknown tour feature '{0}'")]
    UnknownFeature(String),

    #[error("snapshot '{id}' has {found} values for {expected} targets")]
    SnapshotMismatch {
        id: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Node(#[from] NodeError),
}
