use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ScanResults, TierSummary};

/// Market-expansion maturity band, ordered 1 (most mature) to 4 (least).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    GlobalLeader,
    ActiveExpansion,
    GoingGlobal,
    NotYetGlobal,
}

/// Fixed presentation metadata per tier. Static configuration; nothing
/// mutates it at runtime.
#[derive(Debug, Serialize)]
pub struct TierInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

static TIER_CONFIG: [TierInfo; 4] = [
    TierInfo {
        name: "Global Leader",
        description: "Mature global presence (10+ locales)",
        color: "#10b981",
    },
    TierInfo {
        name: "Active Expansion",
        description: "Already global, actively expanding",
        color: "#3b82f6",
    },
    TierInfo {
        name: "Going Global",
        description: "First-time global expansion",
        color: "#f59e0b",
    },
    TierInfo {
        name: "Not Yet Global",
        description: "No localization signals detected",
        color: "#6b7280",
    },
];

impl Tier {
    pub fn number(self) -> u8 {
        match self {
            Tier::GlobalLeader => 1,
            Tier::ActiveExpansion => 2,
            Tier::GoingGlobal => 3,
            Tier::NotYetGlobal => 4,
        }
    }

    pub fn label(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> &'static TierInfo {
        &TIER_CONFIG[self.number() as usize - 1]
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify reconciled scan results into a tier.
///
/// The detected count is the maximum of the explicit locale tally and the
/// observed hreflang tag count; the first matching band from the top wins.
/// Absent scan results short-circuit to [`Tier::NotYetGlobal`].
pub fn classify(scan: Option<&ScanResults>) -> Tier {
    let Some(scan) = scan else {
        return Tier::NotYetGlobal;
    };

    let detected_count = scan.locale_count.max(scan.hreflang_tags.len());

    if detected_count >= 10 {
        Tier::GlobalLeader
    } else if detected_count >= 3 {
        Tier::ActiveExpansion
    } else if detected_count >= 1 {
        Tier::GoingGlobal
    } else {
        Tier::NotYetGlobal
    }
}

/// Tier projection that also surfaces the raw locale count (0 when absent).
pub fn extract_tier(scan: Option<&ScanResults>) -> TierSummary {
    let tier = classify(scan);
    TierSummary {
        tier: tier.number(),
        tier_label: tier.label().to_string(),
        locale_count: scan.map_or(0, |s| s.locale_count),
    }
}

/// The full tier metadata map, keyed by tier number, for `--tier-config`.
pub fn tier_config() -> BTreeMap<u8, &'static TierInfo> {
    [
        Tier::GlobalLeader,
        Tier::ActiveExpansion,
        Tier::GoingGlobal,
        Tier::NotYetGlobal,
    ]
    .into_iter()
    .map(|tier| (tier.number(), tier.info()))
    .collect()
}
