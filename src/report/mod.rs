// src/report/mod.rs
use serde::{Serialize, Deserialize};

pub mod metrics;
pub mod insight;
pub mod sip;
pub mod tax;

// Re-export commonly used types
pub use metrics::DashboardMetrics;
pub use insight::{AiReport, ReportSection, break_numbered_markers};
pub use sip::{Allocation, SipRecommendation, MINIMUM_SIP_AMOUNT};
pub use tax::TaxSnapshot;

/// The insight document returned by the analysis service for one submitted
/// statement. Semi-structured: every nested field is independently optional,
/// and rendering degrades to placeholders instead of failing. Nothing here
/// is computed client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dashboard_metrics: Option<DashboardMetrics>,
    pub ai_report: Option<AiReport>,
    pub sip_recommendation: Option<SipRecommendation>,
    pub life_event: Option<LifeEvent>,
    pub tax_snapshot: Option<TaxSnapshot>,
}

/// Life-event detection attached by the service when its pattern analysis
/// finds one (job change, home purchase, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeEvent {
    pub event: Option<String>,
    pub confidence: Option<String>,
    pub reason: Option<String>,
}
