// src/session/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::report::AnalysisResult;

/// Single-slot persistence for the most recent analysis. One live record,
/// last write wins, shared by every rendering view. Views only read; the
/// slot is written once per successful submission and never deleted here.
pub trait SessionStore {
    /// Overwrites the slot. A failure is fatal to the caller, not swallowed.
    fn save(&self, result: &AnalysisResult) -> Result<()>;

    /// Reads the slot. A missing, unreadable, or unparsable slot is `None`;
    /// callers must treat every `None` identically.
    fn load(&self) -> Option<AnalysisResult>;
}

/// Store backed by one RON file under the platform data directory.
#[derive(Debug)]
pub struct FileSessionStore {
    slot_path: PathBuf,
}

impl FileSessionStore {
    const SLOT_FILE: &'static str = "session.ron";

    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow!("No data directory available on this platform"))?;
        Ok(Self::at(data_dir.join("finautobot")))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            slot_path: dir.into().join(Self::SLOT_FILE),
        }
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, result: &AnalysisResult) -> Result<()> {
        if let Some(parent) = self.slot_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {}", parent.display())
            })?;
        }

        let content = ron::ser::to_string_pretty(
            result,
            ron::ser::PrettyConfig::new().new_line("\n".to_string()),
        )
        .context("Failed to serialize analysis result")?;

        fs::write(&self.slot_path, content).with_context(|| {
            format!("Failed to write session slot {}", self.slot_path.display())
        })?;
        Ok(())
    }

    fn load(&self) -> Option<AnalysisResult> {
        let content = fs::read_to_string(&self.slot_path).ok()?;
        ron::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DashboardMetrics, SipRecommendation};

    fn result_with_health(health: &str) -> AnalysisResult {
        AnalysisResult {
            dashboard_metrics: Some(DashboardMetrics {
                cash_flow_health: Some(health.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn save_then_load_round_trips_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path());

        let result = AnalysisResult {
            sip_recommendation: Some(SipRecommendation {
                sip_amount: Some(500),
                ..Default::default()
            }),
            ..result_with_health("Healthy")
        };
        store.save(&result).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded
                .dashboard_metrics
                .unwrap()
                .cash_flow_health
                .as_deref(),
            Some("Healthy")
        );
        assert_eq!(loaded.sip_recommendation.unwrap().sip_amount, Some(500));
    }

    #[test]
    fn tax_snapshot_survives_the_slot_format() {
        use crate::report::tax::{DeductionsClaimed, TaxBase, TaxSnapshot};

        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path());

        let result = AnalysisResult {
            tax_snapshot: Some(TaxSnapshot {
                tax_base: Some(TaxBase {
                    gross_income: Some(1200000.0),
                    deductions_claimed: Some(DeductionsClaimed {
                        section_80c: Some(50000.0),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        store.save(&result).unwrap();

        let loaded = store.load().unwrap();
        let base = loaded.tax_snapshot.unwrap().tax_base.unwrap();
        assert_eq!(base.gross_income, Some(1200000.0));
        assert_eq!(base.deductions_claimed.unwrap().section_80c, Some(50000.0));
    }

    #[test]
    fn empty_slot_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn malformed_slot_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path());
        fs::write(store.slot_path(), "not a record {{{{").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_overwrites_the_single_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at(dir.path());

        store.save(&result_with_health("Weak")).unwrap();
        store.save(&result_with_health("Healthy")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded
                .dashboard_metrics
                .unwrap()
                .cash_flow_health
                .as_deref(),
            Some("Healthy")
        );
    }
}
