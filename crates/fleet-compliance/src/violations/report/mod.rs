mod dataq;
mod risk;
mod summary;

pub use dataq::{
    ChallengeCategory, ChallengeType, DataQOpportunity, DataQReport, EvidenceItem,
    DEFAULT_MIN_CHALLENGE_SCORE,
};
pub use risk::{BasicScore, BasicStatus, RiskAssessment, RiskLevel};
pub use summary::ComplianceSummary;
