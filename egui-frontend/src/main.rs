use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::BoutiqueApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Boutique Rewards egui application");

    // Phone-ish portrait window to match the storefront layout
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 820.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Boutique Rewards")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Boutique Rewards",
        options,
        Box::new(|cc| match BoutiqueApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Boutique Rewards app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
