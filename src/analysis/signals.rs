use crate::models::{DocumentFacts, ExpansionSignals};

/// Detect the site's market-expansion posture from its hreflang alternates.
///
/// The two flags are mutually exclusive: three or more locales reads as a
/// site already expanding, one or two as a first foray into global markets.
/// No alternates at all yields the zero-value signals struct.
pub fn detect(facts: &DocumentFacts) -> ExpansionSignals {
    let mut signals = ExpansionSignals::default();
    let locale_count = facts.hreflang_links.len();

    if locale_count >= 3 {
        signals.is_actively_expanding = true;
        signals.expansion_score += 20;
    } else if locale_count >= 1 {
        signals.is_first_time_global = true;
        signals.expansion_score += 15;
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HreflangLink;

    fn facts_with_locales(count: usize) -> DocumentFacts {
        DocumentFacts {
            hreflang_links: (0..count)
                .map(|i| HreflangLink {
                    hreflang: format!("l{}", i),
                    href: format!("https://example.com/l{}/", i),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_locales_yields_zero_signals() {
        let signals = detect(&facts_with_locales(0));
        assert_eq!(signals, ExpansionSignals::default());
        assert_eq!(signals.expansion_score, 0);
    }

    #[test]
    fn test_one_locale_is_first_time_global() {
        let signals = detect(&facts_with_locales(1));
        assert!(signals.is_first_time_global);
        assert!(!signals.is_actively_expanding);
        assert_eq!(signals.expansion_score, 15);
    }

    #[test]
    fn test_two_locales_still_first_time_global() {
        let signals = detect(&facts_with_locales(2));
        assert!(signals.is_first_time_global);
        assert!(!signals.is_actively_expanding);
        assert_eq!(signals.expansion_score, 15);
    }

    #[test]
    fn test_three_locales_is_actively_expanding() {
        let signals = detect(&facts_with_locales(3));
        assert!(signals.is_actively_expanding);
        assert!(!signals.is_first_time_global);
        assert_eq!(signals.expansion_score, 20);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        for count in 0..20 {
            let signals = detect(&facts_with_locales(count));
            assert!(
                !(signals.is_first_time_global && signals.is_actively_expanding),
                "both flags fired for {} locales",
                count
            );
        }
    }
}
