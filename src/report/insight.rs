// src/report/insight.rs
use serde::{Serialize, Deserialize};

/// Narrative report generated by the service's advisory stage. The section
/// list is ordered; absent or empty renders a header with no entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiReport {
    pub sections: Option<Vec<ReportSection>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Recovers list structure from prose: the service often returns numbered
/// lists ("1. ... 2. ...") flattened into a single paragraph. Any run of
/// digits followed by a period is forced onto its own line, unless it is
/// already at the start of one, and the result is trimmed.
///
/// Idempotent: applying it twice yields the same string as applying it once.
/// Known limitation: a decimal such as "2.5" also triggers a break; whether
/// the service ever emits one inline is an open question upstream.
pub fn break_numbered_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;

    while let Some(pos) = rest.find(|c: char| c.is_ascii_digit()) {
        out.push_str(&rest[..pos]);
        let run_end = rest[pos..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|offset| pos + offset)
            .unwrap_or(rest.len());

        if rest[run_end..].starts_with('.') {
            // Numbered-list marker; break it onto its own line
            if !(out.is_empty() || out.ends_with('\n')) {
                out.push('\n');
            }
            out.push_str(&rest[pos..run_end]);
            out.push('.');
            rest = &rest[run_end + 1..];
        } else {
            out.push_str(&rest[pos..run_end]);
            rest = &rest[run_end..];
        }
    }

    out.push_str(rest);
    out.trim().to_string()
}
