//! Main application module

mod menus;
mod styles;

use eframe::egui;
use tokio::runtime::Runtime;

use crate::i18n::set_lang;
use crate::state::{AppSettings, AppState, DocumentState};
use crate::ui::{model_tree, slice_tool, status_bar, tour_features};
use crate::LaunchArgs;

/// Main application
pub struct VoyagerApp {
    state: AppState,
    runtime: Runtime,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved document version (for autosave)
    last_saved_version: u64,
}

impl VoyagerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, runtime: Runtime, args: LaunchArgs) -> Self {
        let settings = AppSettings::load();
        set_lang(settings.ui.language.into());

        let mut state = match AppState::new(settings) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Failed to create scene setup: {e}");
                std::process::exit(1);
            }
        };

        // Initial document: CLI argument takes priority, then autosave
        let tour_features = state.settings.tours.selection();
        if let Some(path) = &args.document {
            match DocumentState::open_file(path, &tour_features) {
                Ok(document) => state.document = document,
                Err(e) => {
                    tracing::error!("Failed to open document {}: {e}", path.display());
                    state.last_error = Some(e.to_string());
                }
            }
        } else if let Some(autosave) = DocumentState::load_autosave() {
            match DocumentState::open(autosave, 0, &tour_features) {
                Ok(document) => {
                    state.document = document;
                    tracing::info!("Loaded autosave document");
                }
                Err(e) => tracing::warn!("Ignoring autosave: {e}"),
            }
        }

        for url in &args.models {
            state.models.request(runtime.handle(), &state.loader, url);
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.document.version();

        Self {
            state,
            runtime,
            last_font_size,
            last_saved_version,
        }
    }
}

impl eframe::App for VoyagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Autosave document if changed
        let current_version = self.state.document.version();
        if current_version != self.last_saved_version {
            self.state.document.autosave();
            self.last_saved_version = current_version;
        }

        if self.state.models.poll() > 0 {
            ctx.request_repaint();
        }
        if self.state.models.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state, self.runtime.handle());
                menus::view_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: Model tree ───────────────────────────
        if self.state.panels.model_tree {
            egui::SidePanel::left("model_tree")
                .default_width(220.0)
                .width_range(140.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    model_tree::show(ui, &self.state);
                });
        }

        // ── Right panel: Tour features + Slice tool ──────────
        self.show_right_panel(ctx);

        // ── Central panel: scene placeholder ─────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            let document = &self.state.document;
            let title = document
                .document
                .scenes
                .get(document.scene_index)
                .and_then(|scene| scene.name.as_deref())
                .unwrap_or("Voyager");
            ui.centered_and_justified(|ui| {
                ui.weak(title);
            });
        });
    }
}

impl VoyagerApp {
    fn show_right_panel(&mut self, ctx: &egui::Context) {
        let panels = &self.state.panels;
        if !panels.tour_features && !panels.slice_tool {
            return;
        }

        egui::SidePanel::right("right_panel")
            .default_width(260.0)
            .width_range(200.0..=450.0)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
            )
            .show(ctx, |ui| {
                if self.state.panels.slice_tool {
                    slice_tool::show(ui, &mut self.state);
                    ui.separator();
                }
                if self.state.panels.tour_features {
                    egui::ScrollArea::vertical()
                        .id_salt("tour_features_scroll")
                        .show(ui, |ui| {
                            tour_features::show(ui, &mut self.state);
                        });
                }
            });
    }
}
