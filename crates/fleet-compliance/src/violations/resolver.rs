//! Violation code resolution.
//!
//! Resolution walks four tiers in a fixed order and the first hit wins:
//! exact key, base code with the sub-code suffix stripped, BASIC inferred
//! from the CFR part, and a vehicle-maintenance fallback. Every input
//! produces a [`Resolution`]; only the first two tiers are authoritative.

use super::domain::{Basic, Confidence, ResolutionTier, ViolationCodeEntry};
use super::normalizer::normalize_code;
use super::reference::ReferenceTable;

pub const DEFAULT_SEVERITY: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'t> {
    ExactMatch {
        entry: &'t ViolationCodeEntry,
    },
    PrefixMatch {
        entry: &'t ViolationCodeEntry,
        sub_code: String,
    },
    CfrInference {
        cfr_part: String,
        basic: Basic,
    },
    TotalFallback,
}

impl<'t> Resolution<'t> {
    pub fn tier(&self) -> ResolutionTier {
        match self {
            Resolution::ExactMatch { .. } => ResolutionTier::ExactMatch,
            Resolution::PrefixMatch { .. } => ResolutionTier::PrefixMatch,
            Resolution::CfrInference { .. } => ResolutionTier::CfrInference,
            Resolution::TotalFallback => ResolutionTier::TotalFallback,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            Resolution::ExactMatch { .. } | Resolution::PrefixMatch { .. } => Confidence::Resolved,
            Resolution::CfrInference { .. } | Resolution::TotalFallback => Confidence::BestGuess,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.confidence() == Confidence::BestGuess
    }

    /// Reference entry backing an authoritative resolution.
    pub fn entry(&self) -> Option<&'t ViolationCodeEntry> {
        match self {
            Resolution::ExactMatch { entry } | Resolution::PrefixMatch { entry, .. } => {
                Some(*entry)
            }
            Resolution::CfrInference { .. } | Resolution::TotalFallback => None,
        }
    }

    pub fn basic(&self) -> Basic {
        match self {
            Resolution::ExactMatch { entry } | Resolution::PrefixMatch { entry, .. } => entry.basic,
            Resolution::CfrInference { basic, .. } => *basic,
            Resolution::TotalFallback => Basic::VehicleMaintenance,
        }
    }

    pub fn severity(&self) -> u8 {
        self.entry()
            .map(|entry| entry.severity)
            .unwrap_or(DEFAULT_SEVERITY)
    }

    pub fn is_moving(&self) -> bool {
        self.entry().is_some_and(|entry| entry.is_moving)
    }

    pub fn oos_eligible(&self) -> bool {
        self.entry().is_some_and(|entry| entry.oos_eligible)
    }

    pub fn cfr_part(&self) -> Option<&str> {
        match self {
            Resolution::ExactMatch { entry } | Resolution::PrefixMatch { entry, .. } => {
                Some(entry.cfr_part.as_str())
            }
            Resolution::CfrInference { cfr_part, .. } => Some(cfr_part.as_str()),
            Resolution::TotalFallback => None,
        }
    }

    pub fn sub_code(&self) -> Option<&str> {
        match self {
            Resolution::PrefixMatch { sub_code, .. } => Some(sub_code.as_str()),
            _ => None,
        }
    }

    /// Citation shown next to the violation in reports.
    pub fn cfr_reference(&self) -> Option<String> {
        match self {
            Resolution::ExactMatch { entry } | Resolution::PrefixMatch { entry, .. } => {
                Some(format!("49 CFR {}", entry.code))
            }
            Resolution::CfrInference { cfr_part, .. } => Some(format!("49 CFR Part {cfr_part}")),
            Resolution::TotalFallback => None,
        }
    }
}

/// A raw code together with its canonical key and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCode<'t> {
    pub normalized: String,
    pub resolution: Resolution<'t>,
}

pub fn resolve<'t>(table: &'t ReferenceTable, raw_code: &str) -> ResolvedCode<'t> {
    let normalized = normalize_code(raw_code);
    let resolution = resolve_normalized(table, &normalized);
    ResolvedCode {
        normalized,
        resolution,
    }
}

pub fn resolve_normalized<'t>(table: &'t ReferenceTable, normalized: &str) -> Resolution<'t> {
    exact_match(table, normalized)
        .or_else(|| prefix_match(table, normalized))
        .or_else(|| cfr_inference(normalized))
        .unwrap_or(Resolution::TotalFallback)
}

pub fn exact_match<'t>(table: &'t ReferenceTable, normalized: &str) -> Option<Resolution<'t>> {
    if normalized.is_empty() {
        return None;
    }
    table
        .get(normalized)
        .map(|entry| Resolution::ExactMatch { entry })
}

/// Strips everything from the first uppercase ASCII letter onward and looks
/// the remaining base code up, so `392.2Q` falls back to `392.2`.
pub fn prefix_match<'t>(table: &'t ReferenceTable, normalized: &str) -> Option<Resolution<'t>> {
    let split_at = normalized.find(|c: char| c.is_ascii_uppercase())?;
    if split_at == 0 {
        return None;
    }

    let (base, sub_code) = normalized.split_at(split_at);
    table.get(base).map(|entry| Resolution::PrefixMatch {
        entry,
        sub_code: sub_code.to_string(),
    })
}

pub fn cfr_inference<'t>(normalized: &str) -> Option<Resolution<'t>> {
    let part = normalized.get(..3)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(Resolution::CfrInference {
        cfr_part: part.to_string(),
        basic: Basic::for_cfr_part(part),
    })
}
