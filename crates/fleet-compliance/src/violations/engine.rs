use super::decay::evaluate_decay;
use super::domain::{ClassifiedViolation, RawViolationRecord};
use super::moving::is_moving;
use super::reference::ReferenceTable;
use super::report::ComplianceSummary;
use super::resolver::{resolve, ResolvedCode};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Stateless classification pipeline over a shared reference table.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEngine<'t> {
    table: &'t ReferenceTable,
}

impl ComplianceEngine<'static> {
    pub fn builtin() -> Self {
        Self::new(ReferenceTable::builtin())
    }
}

impl<'t> ComplianceEngine<'t> {
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    pub fn resolve(&self, raw_code: &str) -> ResolvedCode<'t> {
        resolve(self.table, raw_code)
    }

    pub fn classify_record(
        &self,
        record: &RawViolationRecord,
        now: NaiveDate,
    ) -> ClassifiedViolation {
        let ResolvedCode {
            normalized,
            resolution,
        } = self.resolve(&record.code);

        if resolution.is_unknown() {
            debug!(
                code = %normalized,
                tier = resolution.tier().label(),
                "violation code classified as best guess"
            );
        }

        let decay = evaluate_decay(record.inspection_date, now);
        let moving = is_moving(&resolution, record);
        let entry = resolution.entry();

        ClassifiedViolation {
            record: record.clone(),
            normalized_code: normalized,
            matched_code: entry.map(|entry| entry.code.clone()),
            sub_code: resolution.sub_code().map(str::to_string),
            reference_description: entry.map(|entry| entry.description.clone()),
            resolution_tier: resolution.tier(),
            confidence: resolution.confidence(),
            unknown: resolution.is_unknown(),
            resolved_basic: resolution.basic(),
            severity_weight: resolution.severity(),
            cfr_reference: resolution.cfr_reference(),
            oos_eligible: resolution.oos_eligible(),
            is_moving: moving,
            age_months: decay.map(|decay| decay.age_months),
            decay_tier: decay.map(|decay| decay.tier),
            decay_label: decay.map(|decay| decay.tier.label()),
            drop_off_date: decay.map(|decay| decay.drop_off_date),
            drop_off_label: decay.map(|decay| decay.drop_off_label()),
        }
    }

    /// Classifies a batch and aggregates what is still on the public record.
    ///
    /// `None` or an empty batch yields `None` ("no data available"), which is
    /// distinct from a summary with zero retained violations.
    pub fn classify(
        &self,
        records: Option<&[RawViolationRecord]>,
        now: NaiveDate,
    ) -> Option<ComplianceSummary> {
        let records = records.filter(|records| !records.is_empty())?;

        let mut summary = ComplianceSummary::new(now);
        for record in records {
            summary.push(self.classify_record(record, now));
        }

        info!(
            received = records.len(),
            retained = summary.total,
            expired = summary.expired_count,
            unknown = summary.unknown_count,
            moving = summary.moving_count,
            "classified violation batch"
        );

        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violations::domain::{Basic, Confidence, DecayTier, ResolutionTier};
    use chrono::Months;

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
    }

    fn months_ago(months: u32) -> NaiveDate {
        now().checked_sub_months(Months::new(months)).expect("valid date")
    }

    #[test]
    fn classify_record_carries_resolution_and_decay() {
        let engine = ComplianceEngine::builtin();
        let record = RawViolationRecord::new("392.2(s)", "Speeding 12 over")
            .inspected_on(months_ago(15))
            .out_of_service(false);

        let classified = engine.classify_record(&record, now());

        assert_eq!(classified.normalized_code, "392.2S");
        assert_eq!(classified.matched_code.as_deref(), Some("392.2S"));
        assert_eq!(classified.resolution_tier, ResolutionTier::ExactMatch);
        assert_eq!(classified.confidence, Confidence::Resolved);
        assert!(!classified.unknown);
        assert_eq!(classified.resolved_basic, Basic::UnsafeDriving);
        assert!(classified.is_moving);
        assert_eq!(classified.age_months, Some(15));
        assert_eq!(classified.decay_tier, Some(DecayTier::Reduced));
        assert_eq!(
            classified.decay_label,
            Some("reduced weight (past 12mo)")
        );
        assert_eq!(classified.drop_off_label.as_deref(), Some("March 2027"));
    }

    #[test]
    fn classify_record_degrades_for_empty_record() {
        let engine = ComplianceEngine::builtin();
        let classified = engine.classify_record(&RawViolationRecord::default(), now());

        assert!(classified.unknown);
        assert_eq!(classified.resolution_tier, ResolutionTier::TotalFallback);
        assert_eq!(classified.resolved_basic, Basic::VehicleMaintenance);
        assert_eq!(classified.severity_weight, 5);
        assert!(classified.age_months.is_none());
        assert!(classified.decay_tier.is_none());
        assert!(classified.drop_off_date.is_none());
        assert!(classified.cfr_reference.is_none());
    }

    #[test]
    fn best_guess_basic_ignores_feed_hint() {
        let engine = ComplianceEngine::builtin();
        let record = RawViolationRecord::new("XYZ-999", "Failed to stop at red light")
            .with_basic("unsafe_driving");

        let classified = engine.classify_record(&record, now());

        assert!(classified.unknown);
        assert!(classified.is_moving);
        assert_eq!(classified.resolution_tier, ResolutionTier::TotalFallback);
        assert_eq!(classified.resolved_basic, Basic::VehicleMaintenance);

        let record = RawViolationRecord::new("392.999", "").with_basic("vehicle_maintenance");

        let classified = engine.classify_record(&record, now());

        assert_eq!(classified.resolution_tier, ResolutionTier::CfrInference);
        assert_eq!(classified.resolved_basic, Basic::UnsafeDriving);
    }

    #[test]
    fn reference_entry_beats_feed_basic_hint() {
        let engine = ComplianceEngine::builtin();
        let record = RawViolationRecord::new("395.8", "").with_basic("unsafe_driving");

        let classified = engine.classify_record(&record, now());

        assert_eq!(classified.resolved_basic, Basic::HoursOfService);
    }

    #[test]
    fn classify_returns_none_without_data() {
        let engine = ComplianceEngine::builtin();
        assert!(engine.classify(None, now()).is_none());
        assert!(engine.classify(Some(&[]), now()).is_none());
    }

    #[test]
    fn classify_keeps_summary_when_everything_expired() {
        let engine = ComplianceEngine::builtin();
        let records =
            vec![RawViolationRecord::new("393.9", "Lamp out").inspected_on(months_ago(25))];

        let summary = engine.classify(Some(&records), now()).expect("summary present");

        assert_eq!(summary.total, 0);
        assert_eq!(summary.expired_count, 1);
        assert!(summary.by_basic.values().all(Vec::is_empty));
    }
}
