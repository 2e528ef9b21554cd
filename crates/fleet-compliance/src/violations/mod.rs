//! Violation classification pipeline: normalize a raw code, resolve it against
//! the reference table, age it against the retention window, and aggregate the
//! batch into a compliance summary with risk and DataQ views.

pub mod decay;
pub mod domain;
mod engine;
mod moving;
mod normalizer;
pub mod reference;
pub mod report;
pub mod resolver;

pub use decay::{evaluate_decay, DecayEvaluation};
pub use domain::{
    Basic, ClassifiedViolation, Confidence, DecayTier, RawViolationRecord, ResolutionTier,
    ViolationCodeEntry,
};
pub use engine::ComplianceEngine;
pub use moving::is_moving;
pub use normalizer::normalize_code;
pub use reference::{ReferenceTable, ReferenceTableError};
pub use report::{ComplianceSummary, DataQReport, RiskAssessment};
pub use resolver::{resolve, Resolution, ResolvedCode};
