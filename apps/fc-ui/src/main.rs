#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod chart;

use app::FoamcheckApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Foamcheck"),
        ..Default::default()
    };

    eframe::run_native(
        "Foamcheck",
        options,
        Box::new(|cc| Ok(Box::new(FoamcheckApp::new(cc)))),
    )
}
