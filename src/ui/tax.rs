// src/ui/tax.rs
use eframe::egui;

use crate::report::tax::RegimeEstimate;
use crate::state::{AppState, Screen};
use crate::ui::{format_amount, format_flag, PLACEHOLDER};

pub fn show_tax_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Clone the sub-document up front so navigation below can borrow state
    // mutably
    let snapshot = state
        .report
        .as_ref()
        .and_then(|r| r.tax_snapshot.clone())
        .unwrap_or_default();

    egui::ScrollArea::vertical()
        .id_source("tax_scroll")
        .show(ui, |ui| {
            ui.heading("🧾 Tax Snapshot");
            ui.label("Derived deterministically from your bank statement");
            ui.add_space(12.0);

            // Income base
            ui.group(|ui| {
                ui.heading("Income");
                let base = snapshot.tax_base.clone().unwrap_or_default();
                ui.label(format!("Salary income: {}", format_amount(base.salary_income)));
                ui.label(format!("Other income: {}", format_amount(base.other_income)));
                ui.strong(format!("Gross income: {}", format_amount(base.gross_income)));

                ui.add_space(4.0);
                ui.label("Deductions claimed:");
                let deductions = base.deductions_claimed.unwrap_or_default();
                ui.label(format!("• 80C: {}", format_amount(deductions.section_80c)));
                ui.label(format!("• 80D: {}", format_amount(deductions.section_80d)));
                ui.label(format!(
                    "• Home loan interest: {}",
                    format_amount(deductions.home_loan_interest)
                ));

                if let Some(confidence) = &base.confidence {
                    ui.weak(format!("Confidence: {}", confidence));
                }
            });

            ui.add_space(12.0);

            // Keyword-derived signals
            ui.group(|ui| {
                ui.heading("Signals");
                let signals = snapshot.tax_signals.clone().unwrap_or_default();
                ui.label(format!(
                    "Salary detected: {}",
                    format_flag(signals.salary_detected)
                ));
                ui.label(format!(
                    "TDS detected: {}",
                    format_flag(signals.tds_detected)
                ));
                ui.label(format!(
                    "Investment activity: {}",
                    format_flag(signals.investment_activity_detected)
                ));
                ui.label(format!(
                    "Medical spend without insurance: {}",
                    format_flag(signals.medical_spend_without_insurance)
                ));
                if let Some(confidence) = &signals.signal_confidence {
                    ui.weak(format!("Confidence: {}", confidence));
                }
            });

            ui.add_space(12.0);

            // Remaining headroom
            ui.group(|ui| {
                ui.heading("Deduction Gaps");
                let gaps = snapshot.tax_gaps.clone().unwrap_or_default();
                ui.label(format!(
                    "80C headroom remaining: {}",
                    format_amount(gaps.potential_80c_remaining)
                ));
                ui.label(format!(
                    "80D headroom remaining: {}",
                    format_amount(gaps.potential_80d_remaining)
                ));

                if let Some(unused) = &gaps.sections_not_utilized {
                    if !unused.is_empty() {
                        ui.label(format!("Sections not utilized: {}", unused.join(", ")));
                    }
                }
                if let Some(partial) = &gaps.sections_partially_utilized {
                    if !partial.is_empty() {
                        ui.label(format!("Sections partially utilized: {}", partial.join(", ")));
                    }
                }
                ui.label(format!(
                    "Gap severity: {}",
                    gaps.gap_severity.as_deref().unwrap_or(PLACEHOLDER)
                ));
            });

            ui.add_space(12.0);

            // Regime estimates
            ui.group(|ui| {
                ui.heading("Estimated Tax");
                let estimate = snapshot.tax_estimate.clone().unwrap_or_default();
                let recommended = estimate.recommended_regime.clone();

                regime_row(ui, "Old regime", estimate.old_regime.as_ref(),
                    recommended.as_deref() == Some("old"));
                regime_row(ui, "New regime (FY 2025-26)", estimate.new_regime.as_ref(),
                    recommended.as_deref() == Some("new"));

                let deduction_applied = estimate
                    .new_regime
                    .as_ref()
                    .and_then(|r| r.standard_deduction_applied);
                if deduction_applied == Some(true) {
                    ui.weak("Standard deduction already applied in the new-regime figure");
                }
                if let Some(confidence) = &estimate.confidence {
                    ui.weak(format!("Confidence: {}", confidence));
                }
            });

            if let Some(disclaimer) = &snapshot.disclaimer {
                ui.add_space(8.0);
                ui.weak(disclaimer);
            }

            ui.add_space(12.0);
            if ui.small_button("⬅ Back to Dashboard").clicked() {
                state.navigate(Screen::Dashboard);
            }
        });
}

fn regime_row(ui: &mut egui::Ui, label: &str, estimate: Option<&RegimeEstimate>, recommended: bool) {
    let (taxable, tax) = match estimate {
        Some(e) => (format_amount(e.taxable_income), format_amount(e.estimated_tax)),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };

    let line = format!("{}: taxable {}, estimated tax {}", label, taxable, tax);
    if recommended {
        ui.colored_label(egui::Color32::GREEN, format!("{} (recommended)", line));
    } else {
        ui.label(line);
    }
}
