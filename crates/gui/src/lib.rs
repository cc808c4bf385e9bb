// Library crate: scene setup, document I/O and model loading, testable headless.
// GUI-specific modules (app, ui) remain in the binary crate.

pub mod error;
pub mod features;
pub mod fixtures;
pub mod harness;
pub mod i18n;
pub mod loader;
pub mod node;
pub mod path_map;
pub mod property;
pub mod setup;
pub mod state;
pub mod tools;

pub use error::SetupError;
pub use setup::{FeatureRegistry, TourFeatureSelection};
