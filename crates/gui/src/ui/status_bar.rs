use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let document = &state.document;
        let file = document
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map_or_else(|| t("status.untitled").to_string(), |n| n.to_string_lossy().into_owned());
        ui.weak(file);

        ui.separator();
        ui.weak(format!(
            "{}: {}/{}",
            t("status.scene"),
            document.scene_index + 1,
            document.document.scenes.len()
        ));

        ui.separator();
        ui.weak(format!("{}: {}", t("status.models"), state.models.models.len()));

        ui.separator();
        let error = state
            .last_error
            .as_ref()
            .or_else(|| state.models.errors.last());
        match error {
            Some(message) => {
                ui.colored_label(egui::Color32::from_rgb(255, 120, 100), message);
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Voyager v", env!("CARGO_PKG_VERSION")));
        });
    });
}
