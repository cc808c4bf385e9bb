mod app;
mod ui;

// Re-export library modules so that `crate::state`, `crate::features`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use voyager_gui_lib::features;
pub use voyager_gui_lib::i18n;
pub use voyager_gui_lib::loader;
pub use voyager_gui_lib::property;
pub use voyager_gui_lib::setup;
pub use voyager_gui_lib::state;
pub use voyager_gui_lib::tools;

use std::path::PathBuf;

use app::VoyagerApp;

/// Command line: `voyager [--document <path>] [--model <path>]...`
#[derive(Default)]
pub struct LaunchArgs {
    pub document: Option<PathBuf>,
    pub models: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voyager=info,voyager_gui_lib=info".into()),
        )
        .init();

    let args = parse_args(std::env::args().skip(1));

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return;
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Voyager Explorer")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "voyager",
        native_options,
        Box::new(move |cc| Ok(Box::new(VoyagerApp::new(cc, runtime, args)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> LaunchArgs {
    let mut launch = LaunchArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--document" => match args.next() {
                Some(path) => launch.document = Some(PathBuf::from(path)),
                None => tracing::warn!("--document requires a path"),
            },
            "--model" => match args.next() {
                Some(path) => launch.models.push(path),
                None => tracing::warn!("--model requires a path"),
            },
            other => tracing::warn!("Ignoring unknown argument {other}"),
        }
    }
    launch
}
