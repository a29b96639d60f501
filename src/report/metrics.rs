// src/report/metrics.rs
use serde::{Serialize, Deserialize};

/// Summary subset rendered by the dashboard. Each metric is a free-form
/// label from the service ("Healthy", "Moderate", ...); a missing metric
/// renders a placeholder glyph, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub cash_flow_health: Option<String>,
    pub risk_exposure: Option<String>,
    pub investment_readiness: Option<String>,
}
