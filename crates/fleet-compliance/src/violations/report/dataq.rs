//! DataQ challenge opportunity estimation.
//!
//! Scores each retained violation 0-100 for how likely a DataQ request is to
//! succeed and how much it would move the carrier's BASIC if it did.

use super::super::domain::{Basic, ClassifiedViolation};
use super::summary::ComplianceSummary;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_MIN_CHALLENGE_SCORE: u8 = 40;
const BASE_SCORE: i32 = 50;

static ERROR_PRONE_CODES: OnceLock<HashMap<&'static str, (i32, &'static str)>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeCategory {
    High,
    Medium,
    Low,
}

impl ChallengeCategory {
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            Self::High
        } else if score >= 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Potential",
            Self::Medium => "Medium Potential",
            Self::Low => "Low Potential",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    DataError,
    PolicyViolation,
    ProceduralError,
    NotResponsible,
}

impl ChallengeType {
    pub const fn description(self) -> &'static str {
        match self {
            Self::DataError => "Factual information in the inspection report is incorrect",
            Self::PolicyViolation => "Inspector did not follow proper FMCSA procedures",
            Self::ProceduralError => "The inspection was not conducted according to guidelines",
            Self::NotResponsible => {
                "Carrier/driver should not be held responsible for this violation"
            }
        }
    }

    pub fn evidence_checklist(self) -> Vec<EvidenceItem> {
        let items: &[(&'static str, bool)] = match self {
            Self::DataError => &[
                ("Corrected vehicle registration", true),
                ("Driver employment records", true),
                ("ELD/GPS data showing correct information", false),
                ("Photos with timestamps", false),
            ],
            Self::PolicyViolation => &[
                ("FMCSA policy documentation", true),
                ("Written statement from qualified expert", false),
                ("Previous inspection reports showing compliance", false),
            ],
            Self::ProceduralError => &[
                ("Timeline documentation", true),
                ("Witness statements", false),
                ("Communication records with inspector", false),
                ("Photos from inspection", false),
            ],
            Self::NotResponsible => &[
                ("Lease agreement", true),
                ("Bill of lading", true),
                ("Maintenance responsibility agreement", false),
                ("Contractor agreement", false),
            ],
        };

        items
            .iter()
            .map(|&(item, required)| EvidenceItem { item, required })
            .collect()
    }

    fn recommended_for(violation: &ClassifiedViolation) -> Self {
        if violation.resolved_basic == Basic::VehicleMaintenance && !violation.record.oos {
            Self::ProceduralError
        } else {
            Self::DataError
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceItem {
    pub item: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQOpportunity {
    pub code: String,
    pub normalized_code: String,
    pub description: String,
    pub basic: Basic,
    pub inspection_date: Option<NaiveDate>,
    pub unknown: bool,
    pub score: u8,
    pub category: ChallengeCategory,
    pub category_label: &'static str,
    pub factors: Vec<String>,
    pub deductions: Vec<String>,
    pub challenge_type: ChallengeType,
    pub challenge_description: &'static str,
    pub evidence_checklist: Vec<EvidenceItem>,
    pub estimated_point_reduction: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQReport {
    pub min_score: u8,
    pub evaluated: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub total_estimated_point_reduction: u32,
    pub opportunities: Vec<DataQOpportunity>,
}

fn error_prone_codes() -> &'static HashMap<&'static str, (i32, &'static str)> {
    ERROR_PRONE_CODES.get_or_init(|| {
        HashMap::from([
            ("391.41", (15, "Medical certificate issues often involve clerical errors")),
            ("391.45", (12, "Medical examiner certification status can be verified")),
            ("395.8", (18, "ELD data can provide contradicting evidence")),
            ("395.3", (15, "Hours violations often involve complex calculations")),
            ("393.9", (10, "Inoperative equipment may have been fixed on scene")),
            ("393.45", (12, "Brake adjustment can be verified with documentation")),
            ("393.47", (10, "Brake tubing issues may be misidentified")),
            ("392.2", (8, "State/local law violations may not apply to CMV")),
            ("392.16", (10, "Seat belt violations may have extenuating circumstances")),
        ])
    })
}

/// Numeric section of a normalized code: `395.8E` -> `395.8`.
fn section_key(normalized: &str) -> &str {
    let end = normalized
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(normalized.len());
    normalized[..end].trim_end_matches('.')
}

pub(crate) fn score_violation(violation: &ClassifiedViolation) -> DataQOpportunity {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();
    let mut deductions = Vec::new();

    if let Some(age) = violation.age_months {
        if age < 6 {
            score += 15;
            factors.push(
                "Recent violation (<6 months) - more likely to have accurate records".to_string(),
            );
        } else if age > 18 {
            score -= 20;
            deductions.push(
                "Violation over 18 months old - approaching time-weight reduction anyway"
                    .to_string(),
            );
        } else if age > 12 {
            score -= 10;
            deductions
                .push("Violation over 12 months old - records may be harder to obtain".to_string());
        }
    }

    if violation.record.oos {
        score += 10;
        factors.push("Out-of-service violation - high CSA impact, worth challenging".to_string());
    }

    let severity = violation.severity_weight;
    if severity >= 7 {
        score += 15;
        factors.push(format!(
            "High severity weight ({severity}) - significant CSA impact"
        ));
    } else if severity >= 5 {
        score += 5;
        factors.push(format!("Moderate severity weight ({severity})"));
    }

    let key = violation
        .matched_code
        .as_deref()
        .map(section_key)
        .unwrap_or_else(|| section_key(&violation.normalized_code));
    if let Some((boost, reason)) = error_prone_codes().get(key) {
        score += boost;
        factors.push((*reason).to_string());
    }

    match violation.resolved_basic {
        Basic::DriverFitness => {
            score += 8;
            factors.push(
                "Driver fitness violations often involve documentation that can be verified"
                    .to_string(),
            );
        }
        Basic::VehicleMaintenance => {
            score += 5;
            factors.push("Vehicle maintenance issues may have been corrected on-scene".to_string());
        }
        Basic::HoursOfService => {
            score += 10;
            factors.push("HOS violations can often be disputed with ELD data".to_string());
        }
        Basic::UnsafeDriving | Basic::ControlledSubstances => {}
    }

    let score = score.clamp(0, 100) as u8;
    let category = ChallengeCategory::from_score(score);
    let challenge_type = ChallengeType::recommended_for(violation);
    let oos_multiplier = if violation.record.oos { 2.0 } else { 1.0 };
    let estimated_point_reduction = (severity as f64 * oos_multiplier * 1.5).round() as u32;

    DataQOpportunity {
        code: violation.record.code.clone(),
        normalized_code: violation.normalized_code.clone(),
        description: violation
            .reference_description
            .clone()
            .unwrap_or_else(|| violation.record.description.clone()),
        basic: violation.resolved_basic,
        inspection_date: violation.record.inspection_date,
        unknown: violation.unknown,
        score,
        category,
        category_label: category.label(),
        factors,
        deductions,
        challenge_type,
        challenge_description: challenge_type.description(),
        evidence_checklist: challenge_type.evidence_checklist(),
        estimated_point_reduction,
    }
}

pub(crate) fn estimate(summary: &ComplianceSummary, min_score: u8) -> DataQReport {
    let mut opportunities: Vec<DataQOpportunity> = summary
        .violations()
        .iter()
        .map(score_violation)
        .filter(|opportunity| opportunity.score >= min_score)
        .collect();
    // Stable sort keeps input order among equal scores.
    opportunities.sort_by(|a, b| b.score.cmp(&a.score));

    let count = |category: ChallengeCategory| {
        opportunities
            .iter()
            .filter(|opportunity| opportunity.category == category)
            .count()
    };

    DataQReport {
        min_score,
        evaluated: summary.violations().len(),
        high_count: count(ChallengeCategory::High),
        medium_count: count(ChallengeCategory::Medium),
        low_count: count(ChallengeCategory::Low),
        total_estimated_point_reduction: opportunities
            .iter()
            .map(|opportunity| opportunity.estimated_point_reduction)
            .sum(),
        opportunities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violations::{ComplianceEngine, RawViolationRecord};
    use chrono::Months;

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
    }

    fn months_ago(months: u32) -> NaiveDate {
        now().checked_sub_months(Months::new(months)).expect("valid date")
    }

    fn classify_one(record: RawViolationRecord) -> ClassifiedViolation {
        ComplianceEngine::builtin().classify_record(&record, now())
    }

    #[test]
    fn section_key_strips_suffixes() {
        assert_eq!(section_key("395.8E"), "395.8");
        assert_eq!(section_key("393.47"), "393.47");
        assert_eq!(section_key("392.2-SLLS"), "392.2");
        assert_eq!(section_key("XYZ"), "");
    }

    #[test]
    fn recent_oos_hos_violation_scores_high() {
        // False log: severity 7, OOS eligible, keyed to 395.8.
        let violation = classify_one(
            RawViolationRecord::new("395.8(e)", "False log")
                .inspected_on(months_ago(2))
                .out_of_service(true),
        );

        let opportunity = score_violation(&violation);

        // 50 + 15 recent + 10 oos + 15 severity + 18 error-prone + 10 HOS, clamped.
        assert_eq!(opportunity.score, 100);
        assert_eq!(opportunity.category, ChallengeCategory::High);
        assert_eq!(opportunity.challenge_type, ChallengeType::DataError);
        assert_eq!(opportunity.estimated_point_reduction, 21);
        assert!(opportunity.deductions.is_empty());
        assert!(opportunity
            .factors
            .iter()
            .any(|factor| factor.contains("ELD data")));
    }

    #[test]
    fn aging_unsafe_driving_violation_scores_low() {
        // Unauthorized passenger: severity 4, no boosts.
        let violation =
            classify_one(RawViolationRecord::new("392.60", "").inspected_on(months_ago(20)));

        let opportunity = score_violation(&violation);

        assert_eq!(opportunity.score, 30);
        assert_eq!(opportunity.category, ChallengeCategory::Low);
        assert_eq!(opportunity.deductions.len(), 1);
        assert_eq!(opportunity.estimated_point_reduction, 6);
    }

    #[test]
    fn non_oos_maintenance_recommends_procedural_challenge() {
        let violation =
            classify_one(RawViolationRecord::new("393.9", "Lamp out").inspected_on(months_ago(8)));

        let opportunity = score_violation(&violation);

        // 50 + 10 error-prone + 5 maintenance.
        assert_eq!(opportunity.score, 65);
        assert_eq!(opportunity.category, ChallengeCategory::Medium);
        assert_eq!(opportunity.challenge_type, ChallengeType::ProceduralError);
        assert_eq!(
            opportunity.evidence_checklist[0],
            EvidenceItem {
                item: "Timeline documentation",
                required: true
            }
        );
    }

    #[test]
    fn report_filters_and_sorts_by_score() {
        let records = vec![
            RawViolationRecord::new("392.60", "").inspected_on(months_ago(20)),
            RawViolationRecord::new("393.9", "").inspected_on(months_ago(8)),
            RawViolationRecord::new("395.8E", "")
                .inspected_on(months_ago(2))
                .out_of_service(true),
            RawViolationRecord::new("393.9", "").inspected_on(months_ago(30)),
        ];
        let summary = ComplianceEngine::builtin()
            .classify(Some(&records), now())
            .expect("summary");

        let report = summary.dataq_opportunities(DEFAULT_MIN_CHALLENGE_SCORE);

        assert_eq!(report.evaluated, 3);
        assert_eq!(report.opportunities.len(), 2);
        assert_eq!(report.opportunities[0].normalized_code, "395.8E");
        assert_eq!(report.opportunities[1].normalized_code, "393.9");
        assert_eq!(report.high_count, 1);
        assert_eq!(report.medium_count, 1);
        assert_eq!(report.low_count, 0);
        assert_eq!(report.total_estimated_point_reduction, 21 + 5);

        let everything = summary.dataq_opportunities(0);
        assert_eq!(everything.opportunities.len(), 3);
        assert_eq!(everything.low_count, 1);
    }
}
