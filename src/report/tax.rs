// src/report/tax.rs
use serde::{Serialize, Deserialize};

/// Deterministic tax breakdown derived server-side from the statement.
/// Amounts are rupees; section names follow the Indian income-tax sections
/// the service classifies against (80C investments, 80D insurance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxSnapshot {
    pub tax_base: Option<TaxBase>,
    pub tax_signals: Option<TaxSignals>,
    pub tax_gaps: Option<TaxGaps>,
    pub tax_estimate: Option<TaxEstimate>,
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxBase {
    pub salary_income: Option<f64>,
    pub other_income: Option<f64>,
    pub gross_income: Option<f64>,
    pub deductions_claimed: Option<DeductionsClaimed>,
    pub confidence: Option<String>,
}

/// Boolean flags the service derives from transaction keywords; rendered as
/// yes/no badges, absent flags degrade to the placeholder glyph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxSignals {
    pub salary_detected: Option<bool>,
    pub tds_detected: Option<bool>,
    pub investment_activity_detected: Option<bool>,
    pub medical_spend_without_insurance: Option<bool>,
    pub signal_confidence: Option<String>,
}

// The wire uses bare section numbers ("80C") which are not valid RON
// identifiers; aliases accept them while the session slot round-trips under
// the field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeductionsClaimed {
    #[serde(alias = "80C")]
    pub section_80c: Option<f64>,
    #[serde(alias = "80D")]
    pub section_80d: Option<f64>,
    pub home_loan_interest: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxGaps {
    #[serde(alias = "potential_80C_remaining")]
    pub potential_80c_remaining: Option<f64>,
    #[serde(alias = "potential_80D_remaining")]
    pub potential_80d_remaining: Option<f64>,
    pub sections_not_utilized: Option<Vec<String>>,
    pub sections_partially_utilized: Option<Vec<String>>,
    pub gap_severity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub old_regime: Option<RegimeEstimate>,
    #[serde(alias = "new_regime_2025_26")]
    pub new_regime: Option<RegimeEstimate>,
    pub recommended_regime: Option<String>,
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegimeEstimate {
    pub taxable_income: Option<f64>,
    pub estimated_tax: Option<f64>,
    /// New-regime only; the service notes whether the salary standard
    /// deduction was already taken off.
    pub standard_deduction_applied: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_renamed_section_fields() {
        let json = r#"{
            "tax_base": {
                "gross_income": 1200000.0,
                "deductions_claimed": {"80C": 50000.0, "80D": 0.0},
                "confidence": "high"
            },
            "tax_gaps": {
                "potential_80C_remaining": 100000.0,
                "sections_not_utilized": ["80D"],
                "gap_severity": "medium"
            },
            "tax_estimate": {
                "new_regime_2025_26": {
                    "taxable_income": 1150000.0,
                    "estimated_tax": 78000.0,
                    "standard_deduction_applied": true
                },
                "recommended_regime": "new",
                "confidence": "medium"
            }
        }"#;
        let snapshot: TaxSnapshot = serde_json::from_str(json).unwrap();

        let base = snapshot.tax_base.unwrap();
        assert_eq!(base.deductions_claimed.unwrap().section_80c, Some(50000.0));
        assert!(base.salary_income.is_none());
        assert_eq!(base.confidence.as_deref(), Some("high"));

        let gaps = snapshot.tax_gaps.unwrap();
        assert_eq!(gaps.potential_80c_remaining, Some(100000.0));
        assert_eq!(gaps.sections_not_utilized.unwrap(), vec!["80D"]);
        assert!(gaps.potential_80d_remaining.is_none());

        let estimate = snapshot.tax_estimate.unwrap();
        assert!(estimate.old_regime.is_none());
        assert_eq!(estimate.confidence.as_deref(), Some("medium"));
        let new_regime = estimate.new_regime.unwrap();
        assert_eq!(new_regime.estimated_tax, Some(78000.0));
        assert_eq!(new_regime.standard_deduction_applied, Some(true));
    }

    #[test]
    fn parses_signal_flags_and_degrades_missing_ones() {
        let json = r#"{
            "tax_signals": {
                "salary_detected": true,
                "tds_detected": false,
                "signal_confidence": "high"
            }
        }"#;
        let snapshot: TaxSnapshot = serde_json::from_str(json).unwrap();

        let signals = snapshot.tax_signals.unwrap();
        assert_eq!(signals.salary_detected, Some(true));
        assert_eq!(signals.tds_detected, Some(false));
        assert!(signals.investment_activity_detected.is_none());
        assert!(signals.medical_spend_without_insurance.is_none());
        assert_eq!(signals.signal_confidence.as_deref(), Some("high"));
    }
}
