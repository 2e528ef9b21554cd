use chrono::{Months, NaiveDate};
use fleet_compliance::violations::{
    Basic, ComplianceEngine, Confidence, DecayTier, RawViolationRecord, ReferenceTable,
    ResolutionTier,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid evaluation date")
}

fn months_ago(months: u32) -> NaiveDate {
    as_of()
        .checked_sub_months(Months::new(months))
        .expect("valid inspection date")
}

fn mixed_batch() -> Vec<RawViolationRecord> {
    vec![
        RawViolationRecord::new("392.2S", "Speeding 6-10 over").inspected_on(months_ago(10)),
        RawViolationRecord::new("396.3(a)(1)", "Brakes").inspected_on(months_ago(15)),
        RawViolationRecord::new("395.8(e)", "False log")
            .inspected_on(months_ago(20))
            .out_of_service(true),
        RawViolationRecord::new("393.9", "Lamp inoperative").inspected_on(months_ago(25)),
        RawViolationRecord::new("XYZ-999", "Local ordinance"),
        RawViolationRecord::new("CITY-12", "Failed to stop at red light")
            .with_basic("unsafe_driving")
            .inspected_on(months_ago(3)),
        RawViolationRecord::new("382.999", "Testing program").inspected_on(months_ago(1)),
    ]
}

#[test]
fn exact_match_resolves_reference_attributes() {
    let engine = ComplianceEngine::builtin();
    let resolved = engine.resolve("392.2S");

    assert_eq!(resolved.normalized, "392.2S");
    assert_eq!(resolved.resolution.tier(), ResolutionTier::ExactMatch);
    assert_eq!(resolved.resolution.basic(), Basic::UnsafeDriving);
    assert_eq!(resolved.resolution.severity(), 5);
    assert!(resolved.resolution.is_moving());
    assert!(!resolved.resolution.is_unknown());
}

#[test]
fn subsection_notation_normalizes_before_lookup() {
    let engine = ComplianceEngine::builtin();

    let resolved = engine.resolve("396.3(a)(1)");
    assert_eq!(resolved.normalized, "396.3A1");
    assert_eq!(resolved.resolution.tier(), ResolutionTier::ExactMatch);
    assert_eq!(resolved.resolution.severity(), 7);

    let resolved = engine.resolve("396.3(c)");
    assert_eq!(resolved.resolution.tier(), ResolutionTier::PrefixMatch);
    assert_eq!(resolved.resolution.sub_code(), Some("C"));
    assert_eq!(resolved.resolution.basic(), Basic::VehicleMaintenance);

    let resolved = engine.resolve("396.77");
    assert_eq!(resolved.resolution.tier(), ResolutionTier::CfrInference);
    assert_eq!(resolved.resolution.basic(), Basic::VehicleMaintenance);
    assert!(resolved.resolution.is_unknown());
}

#[test]
fn garbage_codes_fall_back_to_vehicle_maintenance() {
    let engine = ComplianceEngine::builtin();
    let resolved = engine.resolve("XYZ-999");

    assert_eq!(resolved.resolution.tier(), ResolutionTier::TotalFallback);
    assert_eq!(resolved.resolution.confidence(), Confidence::BestGuess);
    assert_eq!(resolved.resolution.basic(), Basic::VehicleMaintenance);
    assert_eq!(resolved.resolution.severity(), 5);
}

#[test]
fn decay_tiers_follow_inspection_age() {
    let engine = ComplianceEngine::builtin();
    let tier_for = |months: u32| {
        engine
            .classify_record(
                &RawViolationRecord::new("393.9", "").inspected_on(months_ago(months)),
                as_of(),
            )
            .decay_tier
    };

    assert_eq!(tier_for(10), Some(DecayTier::Full));
    assert_eq!(tier_for(15), Some(DecayTier::Reduced));
    assert_eq!(tier_for(20), Some(DecayTier::Minimal));
    assert_eq!(tier_for(25), Some(DecayTier::Expired));
}

#[test]
fn keyword_fallback_marks_unidentified_moving_violations() {
    let engine = ComplianceEngine::builtin();
    let record = RawViolationRecord::new("CITY-12", "Failed to stop at red light")
        .with_basic("unsafe_driving");

    let classified = engine.classify_record(&record, as_of());

    assert!(classified.unknown);
    assert!(classified.is_moving);

    let untagged = RawViolationRecord::new("CITY-12", "Failed to stop at red light");
    assert!(!engine.classify_record(&untagged, as_of()).is_moving);
}

#[test]
fn summary_counts_are_consistent() {
    let engine = ComplianceEngine::builtin();
    let records = mixed_batch();

    let summary = engine
        .classify(Some(&records), as_of())
        .expect("summary present");

    assert_eq!(summary.expired_count, 1);
    assert_eq!(summary.total, records.len() - 1);
    assert_eq!(summary.total, summary.moving_count + summary.non_moving_count);
    assert_eq!(summary.moving_count, summary.moving_violations.len());
    assert_eq!(summary.moving_count, 2);
    assert_eq!(summary.oos_count, 1);
    assert_eq!(summary.unknown_count, 3);

    let bucketed: usize = summary.by_basic.values().map(Vec::len).sum();
    assert_eq!(bucketed, summary.violations().len());
    assert_eq!(summary.count_for(Basic::ControlledSubstances), 1);
    assert_eq!(summary.count_for(Basic::DriverFitness), 0);

    for violation in summary.violations() {
        assert!(!violation.is_expired());
        let occurrences = summary
            .by_basic
            .values()
            .flatten()
            .filter(|candidate| *candidate == violation)
            .count();
        assert_eq!(occurrences, 1);
    }
}

#[test]
fn absent_input_differs_from_fully_expired_input() {
    let engine = ComplianceEngine::builtin();
    assert!(engine.classify(None, as_of()).is_none());
    assert!(engine.classify(Some(&[]), as_of()).is_none());

    let expired = vec![RawViolationRecord::new("392.2S", "").inspected_on(months_ago(30))];
    let summary = engine
        .classify(Some(&expired), as_of())
        .expect("summary present");
    assert_eq!(summary.total, 0);
    assert_eq!(summary.expired_count, 1);
    assert!(summary.by_basic.is_empty());
}

#[test]
fn classification_is_deterministic() {
    let engine = ComplianceEngine::builtin();
    let records = mixed_batch();

    let first = engine
        .classify(Some(&records), as_of())
        .expect("summary present");
    let second = engine
        .classify(Some(&records), as_of())
        .expect("summary present");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
    assert_eq!(
        serde_json::to_string(&first.risk_assessment()).expect("serializes"),
        serde_json::to_string(&second.risk_assessment()).expect("serializes")
    );
}

#[test]
fn custom_reference_table_drives_resolution() {
    let csv = "code,description,basic,severity,cfr_part,oos_eligible,is_moving\n\
392.2(s),Speeding,unsafe_driving,9,392,Y,Y\n\
395.8,Log violation,Hours of Service,3,395,N,N\n";
    let table = ReferenceTable::from_csv_reader(csv.as_bytes()).expect("table loads");
    let engine = ComplianceEngine::new(&table);

    let classified = engine.classify_record(&RawViolationRecord::new("392.2S", ""), as_of());
    assert_eq!(classified.severity_weight, 9);
    assert!(classified.oos_eligible);

    let classified = engine.classify_record(&RawViolationRecord::new("396.3A1", ""), as_of());
    assert_eq!(classified.resolution_tier, ResolutionTier::CfrInference);
    assert!(classified.unknown);
}
