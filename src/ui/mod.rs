// src/ui/mod.rs
pub mod upload;
pub mod dashboard;
pub mod results;
pub mod tax;

/// Neutral glyph shown wherever an optional payload field is absent.
pub const PLACEHOLDER: &str = "—";

/// Rupee amount or the placeholder glyph.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹ {:.2}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Yes/No flag or the placeholder glyph.
pub fn format_flag(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => PLACEHOLDER,
    }
}
