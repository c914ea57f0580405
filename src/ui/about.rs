use eframe::egui::{self, RichText, Ui, ViewportBuilder, ViewportClass, ViewportId};

use crate::state::AppState;

pub const APP_NAME: &str = "Running Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DESCRIPTION: &str = "A tiny desktop app that estimates how far to run \
from time and pace. Enter the time in minutes and the pace as minutes:seconds \
per kilometre, then press Calculate.";

// ---------------------------------------------------------------------------
// About window
// ---------------------------------------------------------------------------

/// Show the About window while `state.show_about` is set.
///
/// Opens as a separate native viewport; backends without multi-viewport
/// support get a floating window inside the main one instead.
pub fn about_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let title = format!("About {APP_NAME}");
    let mut open = true;

    ctx.show_viewport_immediate(
        ViewportId::from_hash_of("about_viewport"),
        ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([440.0, 420.0])
            .with_resizable(true),
        |ctx, class| {
            if matches!(class, ViewportClass::Embedded) {
                egui::Window::new(title.as_str())
                    .open(&mut open)
                    .collapsible(false)
                    .show(ctx, about_contents);
            } else {
                egui::CentralPanel::default().show(ctx, about_contents);
                if ctx.input(|i| i.viewport().close_requested()) {
                    open = false;
                }
            }
        },
    );

    if !open {
        log::debug!("About window closed");
        state.show_about = false;
    }
}

fn about_contents(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(APP_NAME);
        ui.label(RichText::new(format!("v{APP_VERSION}")).weak());
    });
    ui.separator();
    ui.label(DESCRIPTION);
}
