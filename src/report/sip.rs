// src/report/sip.rs
use serde::{Serialize, Deserialize};

/// The smallest monthly SIP the service will ever recommend. It doubles as a
/// sentinel: a recommendation of exactly this amount means the plan was
/// floored for constrained disposable income, and the UI shows a dedicated
/// disclaimer for it.
pub const MINIMUM_SIP_AMOUNT: u32 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub equity: Option<String>,
    pub debt: Option<String>,
}

/// Rule-bounded investment plan from the service. The frequency is always
/// monthly and is not carried on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SipRecommendation {
    pub sip_amount: Option<u32>,
    pub allocation: Option<Allocation>,
    pub risk_profile: Option<String>,
    pub safety_note: Option<String>,
    pub explanation: Option<String>,
}

impl SipRecommendation {
    /// True only for the exact sentinel amount; any other value, or an
    /// absent amount, never triggers the constrained-income disclaimer.
    pub fn is_minimum_recommendation(&self) -> bool {
        self.sip_amount == Some(MINIMUM_SIP_AMOUNT)
    }
}
