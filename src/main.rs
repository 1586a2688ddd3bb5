mod app;
mod color;
mod data;
mod state;
mod ui;

use app::TitanicDashboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Titanic Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(TitanicDashboardApp::new()))),
    )
}
