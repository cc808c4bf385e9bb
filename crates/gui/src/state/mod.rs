pub mod document;
pub mod models;
pub mod settings;

pub use document::{DocumentError, DocumentState};
pub use models::{LoadedModel, ModelsState};
pub use settings::{AppSettings, Language, LoaderSettings, TourSettings, UiSettings};

use crate::error::SetupError;
use crate::loader::ModelLoader;

/// Panel visibility flags
pub struct PanelVisibility {
    pub tour_features: bool,
    pub slice_tool: bool,
    pub model_tree: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            tour_features: true,
            slice_tool: true,
            model_tree: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub document: DocumentState,
    pub models: ModelsState,
    pub loader: ModelLoader,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Last error shown in the status bar
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Result<Self, SetupError> {
        let mut document = DocumentState::new()?;
        document
            .setup
            .update_tour_features(&settings.tours.selection());

        Ok(Self {
            document,
            models: ModelsState::default(),
            loader: ModelLoader::new((&settings.loader).into()),
            panels: PanelVisibility::default(),
            settings,
            show_settings_window: false,
            last_error: None,
        })
    }

    /// Replace the loader after its settings changed
    pub fn apply_loader_settings(&mut self) {
        self.loader = ModelLoader::new((&self.settings.loader).into());
    }
}
