use super::super::domain::{Basic, ClassifiedViolation};
use super::dataq::{self, DataQReport};
use super::risk::{self, RiskAssessment};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view of one classified batch, restricted to violations still on
/// the public record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceSummary {
    pub as_of: NaiveDate,
    pub total: usize,
    pub moving_count: usize,
    pub non_moving_count: usize,
    pub oos_count: usize,
    pub unknown_count: usize,
    pub expired_count: usize,
    pub by_basic: BTreeMap<Basic, Vec<ClassifiedViolation>>,
    pub moving_violations: Vec<ClassifiedViolation>,
    #[serde(skip)]
    violations: Vec<ClassifiedViolation>,
}

impl ComplianceSummary {
    pub(crate) fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            total: 0,
            moving_count: 0,
            non_moving_count: 0,
            oos_count: 0,
            unknown_count: 0,
            expired_count: 0,
            by_basic: BTreeMap::new(),
            moving_violations: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Adds one classified violation, dropping it when it has aged off.
    pub(crate) fn push(&mut self, violation: ClassifiedViolation) {
        if violation.is_expired() {
            self.expired_count += 1;
            return;
        }

        self.total += 1;
        if violation.is_moving {
            self.moving_count += 1;
            self.moving_violations.push(violation.clone());
        } else {
            self.non_moving_count += 1;
        }
        if violation.record.oos {
            self.oos_count += 1;
        }
        if violation.unknown {
            self.unknown_count += 1;
        }

        self.by_basic
            .entry(violation.resolved_basic)
            .or_default()
            .push(violation.clone());
        self.violations.push(violation);
    }

    /// Retained violations in input order.
    pub fn violations(&self) -> &[ClassifiedViolation] {
        &self.violations
    }

    pub fn count_for(&self, basic: Basic) -> usize {
        self.by_basic.get(&basic).map_or(0, Vec::len)
    }

    pub fn risk_assessment(&self) -> RiskAssessment {
        risk::assess(self)
    }

    pub fn dataq_opportunities(&self, min_score: u8) -> DataQReport {
        dataq::estimate(self, min_score)
    }
}
