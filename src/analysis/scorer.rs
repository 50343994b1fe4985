use crate::models::{DocumentFacts, Grade, LocalizationScore, ScoreDetails};

pub const MAX_SCORE: u32 = 100;

/// Anchor substrings that suggest a language switcher. "lang" subsumes
/// "language"; both are listed to keep the indicator set explicit.
const SWITCHER_INDICATORS: [&str; 4] = ["language", "lang", "locale", "translate"];

/// i18n library fingerprints, scanned in this order so the found-list is
/// reproducible. "i18next" is a substring of "react-i18next", so pages using
/// the React binding report both.
const I18N_LIBRARIES: [&str; 3] = ["i18next", "react-i18next", "vue-i18n"];

/// Score a page's localization readiness.
///
/// Four independent additive rules: +10 for a root language attribute, +20
/// for more than one hreflang alternate, +25 for a language-switcher anchor,
/// +15 for any known i18n library in the markup. The reported score is
/// clamped at [`MAX_SCORE`]; the grade ladder is applied to the raw total
/// before clamping. A score below 30 flags the site as still having its
/// localization work ahead (`ready_for_localization`).
pub fn score(facts: &DocumentFacts) -> LocalizationScore {
    let mut total: u32 = 0;
    let mut details = ScoreDetails::default();

    if let Some(lang) = facts.html_lang.as_deref().filter(|l| !l.is_empty()) {
        total += 10;
        details.html_lang = Some(lang.to_string());
    }

    // Exactly one alternate does not qualify; the threshold is strictly > 1.
    if facts.hreflang_links.len() > 1 {
        total += 20;
        details.hreflang_count = Some(facts.hreflang_links.len());
    }

    let has_switcher = facts.anchors.iter().any(|anchor| {
        let haystack = format!("{}{}", anchor.href, anchor.text).to_lowercase();
        SWITCHER_INDICATORS
            .iter()
            .any(|indicator| haystack.contains(indicator))
    });
    if has_switcher {
        total += 25;
        details.language_switcher = Some(true);
    }

    let found_libs: Vec<String> = I18N_LIBRARIES
        .iter()
        .filter(|lib| facts.raw_html_lower.contains(*lib))
        .map(|lib| lib.to_string())
        .collect();
    if !found_libs.is_empty() {
        total += 15;
        details.i18n_libraries = Some(found_libs);
    }

    let score = total.min(MAX_SCORE);

    LocalizationScore {
        score,
        max_score: MAX_SCORE,
        grade: grade_for(total),
        details,
        ready_for_localization: score < 30,
    }
}

/// Letter grade for a raw (pre-clamp) point total.
fn grade_for(total: u32) -> Grade {
    if total >= 90 {
        Grade::APlus
    } else if total >= 80 {
        Grade::A
    } else if total >= 70 {
        Grade::B
    } else if total >= 60 {
        Grade::C
    } else if total >= 50 {
        Grade::D
    } else {
        Grade::F
    }
}
