use eframe::egui;

use crate::state::AppState;
use crate::ui::{about, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RunningCalculatorApp {
    pub state: AppState,
}

impl eframe::App for RunningCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: calculator form ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::calculator_form(ui, &mut self.state);
        });

        // ---- Floating About window ----
        about::about_window(ctx, &mut self.state);
    }
}
