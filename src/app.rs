// src/app.rs
use eframe::egui;

use crate::state::{AppState, Screen};

pub struct FinAutoApp {
    state: AppState,
}

impl FinAutoApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Checks the single in-flight submission, if any. Success means one
    /// store write and one navigation to the dashboard; failure drops the
    /// form into its inline-error state with the selection kept.
    fn poll_submission(&mut self, ctx: &egui::Context) {
        if let Some(outcome) = self.state.upload.poll() {
            match outcome {
                Ok(result) => {
                    self.state.upload.finish();
                    if let Err(e) = self.state.apply_submission(result) {
                        // The slot could not be written; the user may retry
                        self.state.upload.fail(e.to_string());
                    }
                }
                Err(e) => self.state.upload.fail(e.to_string()),
            }
            ctx.request_repaint();
        } else if self.state.upload.is_submitting() {
            // Keep frames coming while the worker is out
            ctx.request_repaint();
        }

        self.state.chat.poll();
        if self.state.chat.is_busy() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for FinAutoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_submission(ctx);

        // A rendering view with no record is unrecoverable without a fresh
        // submission; re-run the navigation so it bounces back to Upload
        if self.state.current_screen.requires_session() && self.state.report.is_none() {
            self.state.navigate(self.state.current_screen);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Upload => crate::ui::upload::show_upload_view(ui, &mut self.state),
                Screen::Dashboard => crate::ui::dashboard::show_dashboard_view(ui, &mut self.state),
                Screen::Results => crate::ui::results::show_results_view(ui, &mut self.state),
                Screen::Tax => crate::ui::tax::show_tax_view(ui, &mut self.state),
            }
        });
    }
}
