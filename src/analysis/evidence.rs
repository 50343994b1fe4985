use crate::models::{ExpansionSignals, ScanResults};

/// Render scan results into a short evidence string, fragment by fragment.
///
/// The signals argument is not consulted by any current fragment rule; it is
/// accepted so future signal sources can contribute evidence without a
/// contract change.
pub fn summarize(scan: &ScanResults, _signals: &ExpansionSignals) -> String {
    let mut evidence: Vec<String> = Vec::new();

    if scan.locale_count > 0 {
        evidence.push(format!("{} locale(s) detected", scan.locale_count));
    }

    if !scan.hreflang_tags.is_empty() {
        evidence.push(format!("{} hreflang tags", scan.hreflang_tags.len()));
    }

    if evidence.is_empty() {
        "No signals detected".to_string()
    } else {
        evidence.join(" | ")
    }
}
