use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Normalized markup facts for a single fetched page.
///
/// Produced by [`crate::facts::extract`]; every analysis pass operates on this
/// value alone and never re-reads the network or the raw document.
#[derive(Debug, Clone, Default)]
pub struct DocumentFacts {
    /// Value of the root `<html lang=…>` attribute, when present and non-empty.
    pub html_lang: Option<String>,
    /// Alternate-language `<link hreflang=…>` tags, in document order.
    pub hreflang_links: Vec<HreflangLink>,
    /// Anchors with an href, capped at [`crate::facts::MAX_ANCHORS`] entries.
    pub anchors: Vec<Anchor>,
    /// Full page markup lower-cased, for substring library detection.
    pub raw_html_lower: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HreflangLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizationScore {
    pub score: u32,
    pub max_score: u32,
    pub grade: Grade,
    pub details: ScoreDetails,
    pub ready_for_localization: bool,
}

/// Evidence recorded per scoring rule. A field is `Some` only when its rule
/// fired; `None` means "signal not detected" and is omitted from JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_switcher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n_libraries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::APlus => write!(f, "A+"),
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Market-expansion posture derived from locale signals.
///
/// `expansion_signals` carries free-form signal descriptions; no current
/// detection rule populates it, but it stays part of the output contract for
/// future signal sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpansionSignals {
    pub is_first_time_global: bool,
    pub is_actively_expanding: bool,
    pub expansion_signals: Vec<String>,
    pub expansion_score: u32,
}

/// Locale signals reconciled for tier classification. Fields default when the
/// input carries only a partial shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResults {
    #[serde(default)]
    pub locale_count: usize,
    #[serde(default)]
    pub hreflang_tags: Vec<HreflangLink>,
}

impl ScanResults {
    /// Build scan results from extracted facts. `locale_count` counts distinct
    /// hreflang values (case-insensitive); `hreflang_tags` keeps every tag.
    pub fn from_facts(facts: &DocumentFacts) -> Self {
        let mut seen = HashSet::new();
        let locale_count = facts
            .hreflang_links
            .iter()
            .filter(|link| seen.insert(link.hreflang.to_lowercase()))
            .count();

        ScanResults {
            locale_count,
            hreflang_tags: facts.hreflang_links.clone(),
        }
    }
}

/// Tier projection surfaced alongside the raw locale count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSummary {
    pub tier: u8,
    pub tier_label: String,
    pub locale_count: usize,
}

/// Full analysis result for one page, as serialized by `--report json`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub url: String,
    pub title: String,
    pub response_time_ms: u64,
    pub localization_score: LocalizationScore,
    pub hreflang_tags: Vec<HreflangLink>,
    pub expansion_signals: ExpansionSignals,
    pub tier: TierSummary,
    pub evidence: String,
}
