mod app;
mod config;
mod data;
mod export;
mod models;
mod ui;

use app::GigViewApp;
use eframe::egui;
use std::io;
use tracing::info;

fn main() -> Result<(), eframe::Error> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    info!("gigview v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Gig Listings"),
        ..Default::default()
    };

    eframe::run_native(
        "GigView",
        options,
        Box::new(|cc| Box::new(GigViewApp::new(cc))),
    )
}
