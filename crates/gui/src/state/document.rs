//! Open document, its active scene and the scene's feature registry

use std::path::{Path, PathBuf};

use shared::Document;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::SetupError;
use crate::node::Node;
use crate::path_map::PathMap;
use crate::setup::{FeatureRegistry, TourFeatureSelection};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot access document file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Document state
pub struct DocumentState {
    pub document: Document,
    pub path: Option<PathBuf>,
    pub scene_index: usize,
    pub node: Node,
    pub setup: FeatureRegistry,
    /// Bumped on every edit; drives autosave
    version: u64,
}

impl DocumentState {
    /// Empty document with one scene and a default setup
    pub fn new() -> Result<Self, SetupError> {
        let mut node = Node::new("Scene");
        let setup = FeatureRegistry::create(&mut node)?;
        Ok(Self {
            document: Document::with_scenes(1),
            path: None,
            scene_index: 0,
            node,
            setup,
            version: 0,
        })
    }

    /// Import scene `scene_index` of `document` into a fresh registry.
    ///
    /// A scene without a setup record keeps the default setup.
    pub fn open(
        document: Document,
        scene_index: usize,
        tour_features: &TourFeatureSelection,
    ) -> Result<Self, SetupError> {
        let mut state = Self::new()?;
        state.setup.update_tour_features(tour_features);

        match state
            .setup
            .from_document(&document, scene_index, &mut PathMap::new())
        {
            Ok(()) => {}
            Err(SetupError::MissingReference { .. }) => {
                info!(scene_index, "scene has no setup, using defaults");
            }
            Err(e) => return Err(e),
        }

        state.document = document;
        state.scene_index = scene_index;
        Ok(state)
    }

    /// Read and import a document file
    pub fn open_file(
        path: &Path,
        tour_features: &TourFeatureSelection,
    ) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path)?;
        let document = Document::from_json(&json)?;
        let mut state = Self::open(document, 0, tour_features)?;
        state.path = Some(path.to_path_buf());
        info!(path = %path.display(), scenes = state.document.scenes.len(), "document opened");
        Ok(state)
    }

    /// Document with the active scene's setup freshly exported.
    ///
    /// The previous record of the active scene is dropped and the remaining
    /// records are renumbered.
    pub fn export(&self) -> Result<Document, SetupError> {
        let mut document = self.document.clone();
        let old_setups = document.setups.take().unwrap_or_default();

        let mut setups = Vec::new();
        for (index, scene) in document.scenes.iter_mut().enumerate() {
            let record = scene.setup.take().filter(|_| index != self.scene_index);
            if let Some(record) = record.and_then(|i| old_setups.get(i)) {
                setups.push(record.clone());
                scene.setup = Some(setups.len() - 1);
            }
        }
        document.setups = (!setups.is_empty()).then_some(setups);

        self.setup
            .to_document(&mut document, self.scene_index, &mut PathMap::new())?;
        Ok(document)
    }

    /// Export and write to `path`
    pub fn save_file(&mut self, path: &Path) -> Result<(), DocumentError> {
        let document = self.export()?;
        std::fs::write(path, document.to_json_pretty()?)?;
        self.document = document;
        self.path = Some(path.to_path_buf());
        info!(path = %path.display(), "document saved");
        Ok(())
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mark_changed(&mut self) {
        self.version += 1;
    }

    fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "voyager", "voyager")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save the exported document to the autosave file
    pub fn autosave(&self) {
        let Some(path) = Self::autosave_path() else {
            return;
        };
        if let Err(e) = self.autosave_to(&path) {
            warn!(path = %path.display(), "autosave failed: {e}");
        }
    }

    /// Write the exported document to `path`, creating missing directories
    fn autosave_to(&self, path: &Path) -> Result<(), DocumentError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.export()?.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Document from the autosave file, if any
    pub fn load_autosave() -> Option<Document> {
        let path = Self::autosave_path()?;
        let json = std::fs::read_to_string(path).ok()?;
        Document::from_json(&json).ok()
    }
}
