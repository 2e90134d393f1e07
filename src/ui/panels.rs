use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::catalog::{ConstantProperty, TdepProperty};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – file menu and status line
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Clear").clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.compounds.is_empty() {
            ui.label(format!("{} compounds loaded", state.compounds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Open compound files")
        .add_filter("Compound files", &["cmp", "txt"])
        .add_filter("All files", &["*"])
        .pick_files();

    if let Some(paths) = files {
        for path in paths {
            state.load_path(&path);
        }
    }
}

// ---------------------------------------------------------------------------
// Left side panel – loaded compounds and property picker
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Property");
    let current = state.selected_property.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("property_picker")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            ui.label(RichText::new("Constant").strong());
            for p in ConstantProperty::ALL {
                if ui.selectable_label(current == p.key(), p.key()).clicked() {
                    state.select_property(p.key().to_string());
                }
            }
            ui.separator();
            ui.label(RichText::new("Temperature-dependent").strong());
            for p in TdepProperty::ALL {
                if ui.selectable_label(current == p.key(), p.key()).clicked() {
                    state.select_property(p.key().to_string());
                }
            }
        });

    ui.separator();
    ui.heading("Compounds");

    if state.compounds.is_empty() {
        ui.label("No compounds loaded.  (File → Open…)");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for c in &state.compounds {
                let name = if c.name.is_empty() { "<unnamed>" } else { c.name.as_str() };
                let mut text = name.to_string();
                if let Some(id) = c.chem_id {
                    text.push_str(&format!("  ·  ChemID {id}"));
                }
                if let Some(mw) = c.molecular_weight() {
                    text.push_str(&format!("  ·  MW {mw}"));
                }
                ui.label(text);
            }
        });
}
