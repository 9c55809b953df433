//! Hexapawn GUI
//!
//! A graphical interface for playing 5x5 Hexapawn against the AI.

use hexapawn::ui::HexapawnApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 660.0])
            .with_min_inner_size([700.0, 560.0])
            .with_title("5x5 Hexapawn"),
        ..Default::default()
    };

    eframe::run_native(
        "Hexapawn",
        options,
        Box::new(|cc| Ok(Box::new(HexapawnApp::new(cc)))),
    )
}
