// src/ui/results.rs
use eframe::egui;

use crate::report::break_numbered_markers;
use crate::state::{AppState, Screen};
use crate::ui::PLACEHOLDER;

pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Clone the record up front so navigation below can borrow state mutably
    let report = match &state.report {
        Some(report) => report.clone(),
        None => return,
    };

    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .show(ui, |ui| {
            ui.heading("Your Financial Insights");
            ui.label("Insights generated using transaction behavior and AI pattern analysis");
            ui.add_space(12.0);

            // AI report
            ui.group(|ui| {
                ui.heading("AI Insight");
                ui.add_space(4.0);

                let sections = report
                    .ai_report
                    .as_ref()
                    .and_then(|r| r.sections.as_deref())
                    .unwrap_or(&[]);
                // An absent or empty section list renders a header with no
                // entries, never an error
                for section in sections {
                    if let Some(title) = &section.title {
                        ui.strong(title);
                    }
                    if let Some(content) = &section.content {
                        ui.label(break_numbered_markers(content));
                    }
                    ui.add_space(8.0);
                }
            });

            ui.add_space(12.0);

            // Life event, only when the service detected one
            if let Some(event) = &report.life_event {
                if let Some(name) = &event.event {
                    ui.group(|ui| {
                        ui.heading("Detected Life Event");
                        ui.strong(name);
                        if let Some(reason) = &event.reason {
                            ui.label(reason);
                        }
                        if let Some(confidence) = &event.confidence {
                            ui.weak(format!("Confidence: {}", confidence));
                        }
                    });
                    ui.add_space(12.0);
                }
            }

            // SIP recommendation
            ui.group(|ui| {
                ui.heading("SIP Recommendation");
                ui.add_space(4.0);

                let sip = report.sip_recommendation.clone().unwrap_or_default();

                let amount = sip
                    .sip_amount
                    .map(|a| format!("₹ {}", a))
                    .unwrap_or_else(|| PLACEHOLDER.to_string());
                ui.strong(format!("{} / month", amount));
                // Fixed label; the service always plans monthly
                ui.weak("Frequency: Monthly");

                ui.add_space(4.0);
                ui.label("Asset Allocation:");
                let allocation = sip.allocation.clone().unwrap_or_default();
                ui.label(format!(
                    "• Equity: {}",
                    allocation.equity.as_deref().unwrap_or(PLACEHOLDER)
                ));
                ui.label(format!(
                    "• Debt: {}",
                    allocation.debt.as_deref().unwrap_or(PLACEHOLDER)
                ));

                if let Some(risk_profile) = &sip.risk_profile {
                    ui.add_space(4.0);
                    ui.label(format!("Risk Profile: {}", risk_profile));
                }

                if let Some(safety_note) = &sip.safety_note {
                    ui.add_space(4.0);
                    ui.group(|ui| {
                        ui.strong("Why this amount?");
                        ui.label(safety_note);
                    });
                }

                if let Some(explanation) = &sip.explanation {
                    ui.add_space(4.0);
                    ui.label(explanation);
                }

                if sip.is_minimum_recommendation() {
                    ui.add_space(4.0);
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        "This is the minimum SIP amount recommended due to limited \
                         disposable income or unstable cash flow. Increasing the SIP \
                         right now may cause financial stress.",
                    );
                }

                ui.add_space(4.0);
                ui.weak(
                    "SIPs are market-linked investments. This recommendation is based \
                     on your transaction data and current cash flow patterns, not \
                     guaranteed returns.",
                );
            });

            ui.add_space(12.0);

            // Report chat: answers come only from the stored report
            ui.group(|ui| {
                ui.heading("Ask About This Report");
                ui.add_space(4.0);

                for exchange in &state.chat.history {
                    ui.strong(format!("You: {}", exchange.question));
                    ui.label(&exchange.answer);
                    ui.add_space(6.0);
                }

                let busy = state.chat.is_busy();
                ui.horizontal(|ui| {
                    ui.add_enabled(
                        !busy,
                        egui::TextEdit::singleline(&mut state.chat.input)
                            .hint_text("e.g. Why is my SIP capped?"),
                    );
                    let ask_label = if busy { "Asking…" } else { "Ask" };
                    if ui
                        .add_enabled(state.chat.can_ask(), egui::Button::new(ask_label))
                        .clicked()
                    {
                        begin_question(state, &report);
                    }
                });

                if busy {
                    ui.spinner();
                }
                if let Some(error) = state.chat.error_message.clone() {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });

            ui.add_space(12.0);
            if ui.small_button("⬅ Back to Dashboard").clicked() {
                state.navigate(Screen::Dashboard);
            }
        });
}

/// Packages the stored report with the typed question and hands the pair to
/// the chat worker. The panel stays disabled until the answer (or failure)
/// comes back.
fn begin_question(state: &mut AppState, report: &crate::report::AnalysisResult) {
    let question = state.chat.input.trim().to_string();
    if question.is_empty() {
        return;
    }

    let report_json = match serde_json::to_string(report) {
        Ok(json) => json,
        Err(e) => {
            state.chat.error_message = Some(format!("Could not package the report: {}", e));
            return;
        }
    };

    let rx = crate::api::spawn_ask(state.api.clone(), report_json, question.clone());
    state.chat.begin(question, rx);
}
