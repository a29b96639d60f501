// src/main.rs
use eframe::egui;
use anyhow::Result;

mod api;
mod app;
mod report;
mod session;
mod state;
mod ui;

use api::ApiClient;
use app::FinAutoApp;
use session::FileSessionStore;
use state::AppState;

fn main() -> Result<()> {
    let session = FileSessionStore::new()?;
    let state = AppState::new(ApiClient::from_env(), Box::new(session));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("FinAutoBot"),
        ..Default::default()
    };

    eframe::run_native(
        "FinAutoBot",
        options,
        Box::new(move |_cc| Box::new(FinAutoApp::new(state))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
