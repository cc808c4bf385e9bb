use egui::Ui;

use crate::i18n::t;
use crate::loader::SceneObject;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading(t("models.heading"));
    ui.separator();

    if state.models.models.is_empty() && !state.models.is_loading() {
        ui.weak(t("models.empty"));
    }

    for (i, model) in state.models.models.iter().enumerate() {
        let file_name = std::path::Path::new(&model.url)
            .file_name()
            .map_or_else(|| model.url.clone(), |n| n.to_string_lossy().into_owned());
        egui::CollapsingHeader::new(file_name)
            .id_salt(("model", i))
            .default_open(true)
            .show(ui, |ui| {
                let id = egui::Id::new(("model", i));
                for (j, object) in model.group.children.iter().enumerate() {
                    show_object(ui, object, id.with(j));
                }
            });
    }

    if state.models.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.weak(t("models.loading"));
        });
    }
}

fn show_object(ui: &mut Ui, object: &SceneObject, id: egui::Id) {
    let name = object.name.as_deref().unwrap_or(t("models.unnamed"));
    let label = if object.is_mesh() {
        format!("{name} ({} {})", object.primitives.len(), t("models.primitives"))
    } else {
        name.to_string()
    };

    if object.children.is_empty() {
        ui.label(label);
    } else {
        egui::CollapsingHeader::new(label)
            .id_salt(id)
            .show(ui, |ui| {
                for (i, child) in object.children.iter().enumerate() {
                    show_object(ui, child, id.with(i));
                }
            });
    }
}
