//! Slice tool view: controls bound to the active document's slicer

use egui::Ui;

use crate::features::Feature;
use crate::property::PropertyValue;
use crate::state::AppState;
use crate::tools::{SliceTool, ToolControl};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.strong(format!("[{}]", SliceTool::INFO.icon));
        ui.strong(SliceTool::INFO.text);
    });

    let controls = SliceTool::controls(Some(&state.document.setup.features.slicer));
    let mut changed = false;

    for control in controls {
        let path = control.path();
        let result = {
            let ins = state.document.setup.features.slicer.ins_mut();
            match control {
                ToolControl::Checkbox { path, label } => {
                    let mut value = ins.boolean(path);
                    if ui.checkbox(&mut value, label).changed() {
                        Some(ins.set(path, PropertyValue::Boolean(value)))
                    } else {
                        None
                    }
                }
                ToolControl::Options { path, options } => {
                    let mut index = ins.option(path);
                    let before = index;
                    egui::ComboBox::from_id_salt(path)
                        .selected_text(options.get(index).copied().unwrap_or_default())
                        .show_ui(ui, |ui| {
                            for (i, label) in options.iter().enumerate() {
                                ui.selectable_value(&mut index, i, *label);
                            }
                        });
                    (index != before).then(|| ins.set(path, PropertyValue::Option(index)))
                }
                ToolControl::Slider { path, min, max } => {
                    let mut value = ins.number(path);
                    if ui.add(egui::Slider::new(&mut value, min..=max)).changed() {
                        Some(ins.set(path, PropertyValue::Number(value)))
                    } else {
                        None
                    }
                }
            }
        };

        match result {
            Some(Ok(true)) => changed = true,
            Some(Err(e)) => tracing::warn!(path, "slice tool: {e}"),
            _ => {}
        }
    }

    if changed {
        state.document.mark_changed();
    }
}
