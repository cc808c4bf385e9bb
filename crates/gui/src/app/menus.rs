//! Application menu bar and settings window

use eframe::egui;
use tokio::runtime::Handle;

use crate::features::FeatureName;
use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppSettings, AppState, DocumentState, Language};

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState, runtime: &Handle) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            ui.close_menu();
            match DocumentState::new() {
                Ok(mut document) => {
                    document
                        .setup
                        .update_tour_features(&state.settings.tours.selection());
                    state.document = document;
                    state.document.mark_changed();
                }
                Err(e) => tracing::error!("Failed to create document: {e}"),
            }
        }
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json", "svx.json"])
                .pick_file()
            {
                match DocumentState::open_file(&path, &state.settings.tours.selection()) {
                    Ok(document) => {
                        state.document = document;
                        state.last_error = None;
                    }
                    Err(e) => {
                        tracing::error!("Failed to open {}: {e}", path.display());
                        state.last_error = Some(e.to_string());
                    }
                }
            }
        }
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            match state.document.path.clone() {
                Some(path) => save_document(state, &path),
                None => save_document_as(state),
            }
        }
        if ui.button(t("menu.save_as")).clicked() {
            ui.close_menu();
            save_document_as(state);
        }
        ui.separator();
        if ui.button(t("menu.load_model")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.load_model_title"))
                .add_filter("glTF", &["gltf", "glb"])
                .pick_file()
            {
                let url = path.to_string_lossy().into_owned();
                state.models.request(runtime, &state.loader, &url);
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            std::process::exit(0);
        }
    });
}

fn save_document_as(state: &mut AppState) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title(t("menu.save_title"))
        .add_filter("JSON", &["json"])
        .set_file_name("scene.svx.json")
        .save_file()
    {
        save_document(state, &path);
    }
}

fn save_document(state: &mut AppState, path: &std::path::Path) {
    if let Err(e) = state.document.save_file(path) {
        tracing::error!("Failed to save {}: {e}", path.display());
        state.last_error = Some(e.to_string());
    }
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.model_tree, t("menu.model_tree"));
        ui.checkbox(&mut state.panels.tour_features, t("menu.tour_features"));
        ui.checkbox(&mut state.panels.slice_tool, t("menu.slice_tool"));
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            let current = lang();
            if ui.radio(current == Lang::Ru, "Русский").clicked() {
                set_language(state, Language::Ru);
                ui.close_menu();
            }
            if ui.radio(current == Lang::En, "English").clicked() {
                set_language(state, Language::En);
                ui.close_menu();
            }
        });
        ui.separator();
        if ui.button(t("menu.settings")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

fn set_language(state: &mut AppState, language: Language) {
    set_lang(language.into());
    state.settings.ui.language = language;
    state.settings.save();
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_ui_settings(ui, state);
                show_loader_settings(ui, state);
                show_tour_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_loader_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.loader"));
    if ui
        .checkbox(
            &mut state.settings.loader.center_geometry,
            t("settings.center_geometry"),
        )
        .changed()
    {
        state.apply_loader_settings();
    }
    ui.add_space(10.0);
}

fn show_tour_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.tours"));
    for name in FeatureName::ALL {
        let key = name.as_str();
        let defaults = &mut state.settings.tours.default_features;
        let mut enabled = defaults.iter().any(|k| k == key);
        if ui.checkbox(&mut enabled, key).changed() {
            if enabled {
                defaults.push(key.to_string());
            } else {
                defaults.retain(|k| k != key);
            }
        }
    }
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.reset")).clicked() {
            state.settings = AppSettings::default();
            state.apply_loader_settings();
        }
        if ui.button(t("settings.close")).clicked() {
            state.settings.save();
            state.show_settings_window = false;
        }
    });
}
