mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PropCompApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Compound files named on the command line are loaded before the window
    // opens; a file that cannot be read is fatal at this boundary.
    let mut state = AppState::default();
    for arg in std::env::args().skip(1) {
        let path = PathBuf::from(arg);
        match data::loader::load_file(&path) {
            Ok(compound) => state.compounds.push(compound),
            Err(e) => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PropComp – Compound Property Comparison",
        options,
        Box::new(|_cc| Ok(Box::new(PropCompApp::new(state)))),
    )
}
