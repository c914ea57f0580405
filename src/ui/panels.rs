use eframe::egui::{self, Key, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button(exit_label()).clicked() {
                log::debug!("Exit requested from menu");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui: &mut Ui| {
            if ui.button("About").clicked() {
                state.open_about();
                ui.close_menu();
            }
        });
    });
}

fn exit_label() -> &'static str {
    if cfg!(target_os = "macos") {
        "Close"
    } else {
        "Exit"
    }
}

// ---------------------------------------------------------------------------
// Calculator form (central panel)
// ---------------------------------------------------------------------------

/// Render the time/pace form and the result line.
pub fn calculator_form(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Running Calculator");
    ui.add_space(8.0);

    let mut submitted = false;

    egui::Grid::new("calculator_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Time (minutes)");
            let time = ui.add(
                egui::TextEdit::singleline(&mut state.time_input).hint_text("30"),
            );
            submitted |= enter_pressed(ui, &time);
            ui.end_row();

            ui.label("Pace (min:sec per km)");
            let pace = ui.add(
                egui::TextEdit::singleline(&mut state.pace_input).hint_text("5:30"),
            );
            submitted |= enter_pressed(ui, &pace);
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui.button("Calculate").clicked() {
        submitted = true;
    }

    if submitted {
        state.calculate();
    }

    ui.add_space(12.0);
    if let Some(text) = &state.result_text {
        ui.label(RichText::new(text).size(18.0).strong());
    }
}

/// A single-line edit loses focus when Enter is pressed in it.
fn enter_pressed(ui: &Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
