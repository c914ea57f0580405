mod app;
mod state;
mod ui;

use app::RunningCalculatorApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::about::APP_NAME)
            .with_inner_size([400.0, 500.0])
            .with_min_inner_size([320.0, 280.0]),
        ..Default::default()
    };

    log::info!("Starting {} v{}", ui::about::APP_NAME, ui::about::APP_VERSION);

    eframe::run_native(
        ui::about::APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::<RunningCalculatorApp>::default())),
    )
}
