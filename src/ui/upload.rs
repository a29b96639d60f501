// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;

use crate::state::AppState;

pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("FinAutoBot");
        ui.label("AI-powered financial intelligence from your real bank data");
    });

    ui.add_space(16.0);

    ui.group(|ui| {
        ui.heading("Upload Bank Statement");
        ui.add_space(8.0);

        let submitting = state.upload.is_submitting();

        // Statement selection
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!submitting, egui::Button::new("⬆ Select CSV…"))
                .clicked()
            {
                let file_dialog = FileDialog::new()
                    .add_filter("CSV files", &["csv"])
                    .set_title("Select Bank Statement");

                if let Some(path) = file_dialog.pick_file() {
                    state.upload.select_file(path);
                }
            }

            match &state.upload.selected_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.colored_label(egui::Color32::GREEN, format!("Selected: {}", name));
                }
                None => {
                    ui.label("No statement selected");
                }
            }
        });

        ui.add_space(12.0);

        // Risk slider
        ui.horizontal(|ui| {
            ui.label("Conservative");
            let mut risk = state.upload.risk;
            let response = ui.add_enabled(
                !submitting,
                egui::Slider::new(&mut risk, 0..=100).suffix("%"),
            );
            if response.changed() {
                state.upload.set_risk(risk);
            }
            ui.label("Aggressive");
        });
        ui.label(format!("Risk Preference: {}%", state.upload.risk));

        ui.add_space(12.0);

        // Submit
        let submit_label = if submitting {
            "Analyzing…"
        } else {
            "Generate Insights"
        };
        if ui
            .add_enabled(state.upload.can_submit(), egui::Button::new(submit_label))
            .clicked()
        {
            begin_submission(state);
        }

        if submitting {
            ui.add_space(4.0);
            ui.spinner();
        }

        if let Some(error) = state.upload.error_message.clone() {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(8.0);
        if ui
            .add_enabled(!submitting, egui::Button::new("Reset"))
            .clicked()
        {
            state.upload.reset();
        }
    });
}

/// Reads the selected statement and hands it to the submission worker. A
/// read failure is shown like any other submission failure; nothing was
/// sent, so the user can simply re-pick and retry.
fn begin_submission(state: &mut AppState) {
    let path = match state.upload.selected_file.clone() {
        Some(path) => path,
        None => return,
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            state
                .upload
                .fail(format!("Could not read {}: {}", path.display(), e));
            return;
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement.csv".to_string());

    let rx = crate::api::spawn_submit(state.api.clone(), bytes, file_name, state.upload.risk);
    state.upload.begin_submission(rx);
}
