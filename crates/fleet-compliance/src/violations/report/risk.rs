use super::super::domain::{Basic, ClassifiedViolation, DecayTier};
use super::summary::ComplianceSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicStatus {
    Ok,
    Alert,
    Critical,
}

impl BasicStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Alert => "Alert",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicScore {
    pub basic: Basic,
    pub basic_label: &'static str,
    pub raw_points: u32,
    pub estimated_percentile: u8,
    pub threshold: u8,
    pub critical_threshold: u8,
    pub status: BasicStatus,
    pub status_label: &'static str,
    pub violation_count: usize,
    pub oos_count: usize,
}

/// Carrier-level estimate. Real SMS percentiles need national peer-group data,
/// so these figures are indicative only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub level_label: &'static str,
    pub alert_count: usize,
    pub critical_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_basic: Option<Basic>,
    pub basics: Vec<BasicScore>,
}

const fn thresholds(basic: Basic) -> (u8, u8) {
    match basic {
        Basic::UnsafeDriving | Basic::HoursOfService => (65, 80),
        Basic::DriverFitness | Basic::ControlledSubstances | Basic::VehicleMaintenance => (80, 90),
    }
}

const fn percentile_multiplier(basic: Basic) -> f64 {
    match basic {
        Basic::UnsafeDriving => 2.5,
        Basic::HoursOfService => 2.0,
        Basic::DriverFitness => 2.0,
        Basic::ControlledSubstances => 3.0,
        Basic::VehicleMaintenance => 1.5,
    }
}

/// Undated violations cannot be aged, so they count at full weight.
fn time_weight(violation: &ClassifiedViolation) -> u32 {
    violation
        .decay_tier
        .unwrap_or(DecayTier::Full)
        .time_weight()
}

pub(crate) fn estimate_percentile(raw_points: u32, basic: Basic) -> u8 {
    let scaled = (raw_points as f64 * percentile_multiplier(basic)).round();
    scaled.min(100.0) as u8
}

pub(crate) fn score_basic(basic: Basic, violations: &[ClassifiedViolation]) -> BasicScore {
    let raw_points = violations
        .iter()
        .map(|violation| violation.severity_weight as u32 * time_weight(violation))
        .sum();
    let estimated_percentile = estimate_percentile(raw_points, basic);
    let (threshold, critical_threshold) = thresholds(basic);

    let status = if estimated_percentile >= critical_threshold {
        BasicStatus::Critical
    } else if estimated_percentile >= threshold {
        BasicStatus::Alert
    } else {
        BasicStatus::Ok
    };

    BasicScore {
        basic,
        basic_label: basic.label(),
        raw_points,
        estimated_percentile,
        threshold,
        critical_threshold,
        status,
        status_label: status.label(),
        violation_count: violations.len(),
        oos_count: violations.iter().filter(|v| v.record.oos).count(),
    }
}

pub(crate) fn assess(summary: &ComplianceSummary) -> RiskAssessment {
    let basics: Vec<BasicScore> = Basic::ordered()
        .into_iter()
        .map(|basic| {
            let violations = summary
                .by_basic
                .get(&basic)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            score_basic(basic, violations)
        })
        .collect();

    let alert_count = basics
        .iter()
        .filter(|score| score.status == BasicStatus::Alert)
        .count();
    let critical_count = basics
        .iter()
        .filter(|score| score.status == BasicStatus::Critical)
        .count();

    let level = if critical_count > 0 {
        RiskLevel::High
    } else if alert_count > 0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    };

    // First BASIC wins ties so the result does not depend on iteration quirks.
    let worst_basic = basics
        .iter()
        .filter(|score| score.raw_points > 0)
        .fold(None::<&BasicScore>, |worst, score| match worst {
            Some(current) if current.estimated_percentile >= score.estimated_percentile => {
                Some(current)
            }
            _ => Some(score),
        })
        .map(|score| score.basic);

    RiskAssessment {
        level,
        level_label: level.label(),
        alert_count,
        critical_count,
        worst_basic,
        basics,
    }
}
