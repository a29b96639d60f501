// src/ui/dashboard.rs
use eframe::egui;

use crate::state::{AppState, Screen};
use crate::ui::PLACEHOLDER;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Clone the rendered subset up front so navigation below can borrow
    // state mutably
    let metrics = state
        .report
        .as_ref()
        .and_then(|r| r.dashboard_metrics.clone())
        .unwrap_or_default();

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading("Your Financial Control Center");
        ui.label("AI-powered insights extracted from your real bank transactions");
    });

    ui.add_space(16.0);

    // Metric cards
    let available_width = ui.available_width();
    ui.horizontal(|ui| {
        metric_card(
            ui,
            available_width / 3.0,
            "Cash Flow Health",
            metrics.cash_flow_health.as_deref(),
        );
        metric_card(
            ui,
            available_width / 3.0,
            "Risk Exposure",
            metrics.risk_exposure.as_deref(),
        );
        metric_card(
            ui,
            available_width / 3.0,
            "Investment Readiness",
            metrics.investment_readiness.as_deref(),
        );
    });

    ui.add_space(16.0);

    // Action cards
    ui.horizontal(|ui| {
        ui.group(|ui| {
            ui.set_min_width(available_width / 2.2);
            ui.vertical(|ui| {
                ui.heading("📊 Financial Insights & SIP");
                ui.label(
                    "Month-by-month analysis of income, expenses and risk behavior, \
                     translated into a safe, explainable SIP recommendation.",
                );
                ui.add_space(8.0);
                if ui.button("View Financial Insights ➡").clicked() {
                    state.navigate(Screen::Results);
                }
            });
        });

        ui.group(|ui| {
            ui.set_min_width(available_width / 2.2);
            ui.vertical(|ui| {
                ui.heading("🧾 Tax Snapshot");
                ui.label(
                    "A structured breakdown of taxable income, section-wise deductions \
                     and regime estimates, generated from your bank data.",
                );
                ui.add_space(8.0);
                if ui.button("View Tax Snapshot ➡").clicked() {
                    state.navigate(Screen::Tax);
                }
            });
        });
    });

    ui.add_space(12.0);
    // Returning to the upload form does not clear the stored record
    if ui.small_button("⬅ Upload another statement").clicked() {
        state.navigate(Screen::Upload);
    }
}

fn metric_card(ui: &mut egui::Ui, width: f32, label: &str, value: Option<&str>) {
    ui.group(|ui| {
        ui.set_min_width(width * 0.9);
        ui.vertical(|ui| {
            ui.label(label);
            ui.strong(value.unwrap_or(PLACEHOLDER));
        });
    });
}
