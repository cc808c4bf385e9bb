//! Tour feature selection panel

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("tours.heading"));
    ui.weak(t("tours.hint"));
    ui.separator();

    let setup = &mut state.document.setup;
    let mut selection = setup.tour_features();
    let mut changed = false;

    for info in setup.available_tour_features() {
        let mut enabled = selection.get(info.name);
        let response = ui
            .checkbox(&mut enabled, info.display_name)
            .on_hover_text(info.properties.join(", "));
        if response.changed() {
            selection.set(info.name, enabled);
            changed = true;
        }
    }

    if changed {
        setup.update_tour_features(&selection);
        setup.log_available_tour_features();
        state.document.mark_changed();
    }

    ui.add_space(4.0);
    ui.weak(format!(
        "{}: {}",
        t("tours.targets"),
        state.document.setup.tween_machine().targets().len()
    ));
}
