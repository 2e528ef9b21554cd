use super::domain::{Basic, RawViolationRecord};
use super::resolver::Resolution;

/// Driving-behavior phrases matched against free text when the code itself
/// could not be identified.
const MOVING_KEYWORDS: &[&str] = &[
    "speeding",
    "mph",
    "reckless",
    "careless",
    "lane change",
    "improper lane",
    "failure to yield",
    "failed to yield",
    "yield right of way",
    "following too close",
    "following too closely",
    "tailgat",
    "traffic control",
    "traffic signal",
    "stop sign",
    "red light",
    "improper passing",
    "improper pass",
    "improper turn",
    "texting",
    "cell phone",
    "hand-held",
    "handheld",
    "mobile phone",
    "railroad crossing",
    "rail crossing",
    "seat belt",
    "seatbelt",
];

/// Moving-violation decision for one record.
///
/// The reference entry is authoritative. Keyword matching only applies to
/// unidentified codes the feed itself tagged as unsafe driving.
pub fn is_moving(resolution: &Resolution<'_>, record: &RawViolationRecord) -> bool {
    if resolution.is_moving() {
        return true;
    }

    if !resolution.is_unknown() || record.basic_hint() != Some(Basic::UnsafeDriving) {
        return false;
    }

    matches_moving_keyword(record)
}

fn matches_moving_keyword(record: &RawViolationRecord) -> bool {
    let haystack = [
        Some(record.description.as_str()),
        record.section.as_deref(),
        record.group.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    MOVING_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violations::reference::ReferenceTable;
    use crate::violations::resolver::resolve;

    fn classify(record: &RawViolationRecord) -> bool {
        let resolved = resolve(ReferenceTable::builtin(), &record.code);
        is_moving(&resolved.resolution, record)
    }

    #[test]
    fn reference_entry_is_authoritative() {
        let record = RawViolationRecord::new("392.2S", "");
        assert!(classify(&record));

        let record = RawViolationRecord::new("395.8", "speeding to beat the clock")
            .with_basic("unsafe_driving");
        assert!(!classify(&record));
    }

    #[test]
    fn keyword_fallback_for_unresolved_unsafe_driving() {
        let record = RawViolationRecord::new("STATE-77", "Failed to stop at red light")
            .with_basic("unsafe_driving");
        assert!(classify(&record));

        let record = RawViolationRecord::new("392.999", "").with_basic("Unsafe Driving");
        let record = RawViolationRecord {
            group: Some("Texting while operating".to_string()),
            ..record
        };
        assert!(classify(&record));
    }

    #[test]
    fn keyword_fallback_requires_unsafe_driving_hint() {
        let record = RawViolationRecord::new("STATE-77", "Failed to stop at red light");
        assert!(!classify(&record));

        let record = RawViolationRecord::new("STATE-77", "Failed to stop at red light")
            .with_basic("vehicle_maintenance");
        assert!(!classify(&record));
    }

    #[test]
    fn keyword_fallback_skips_recognized_non_moving_codes() {
        let record = RawViolationRecord::new("392.14(x)", "seat belt unfastened")
            .with_basic("unsafe_driving");
        assert!(!classify(&record));
    }

    #[test]
    fn speed_equipment_text_is_not_moving() {
        let record = RawViolationRecord::new("XYZ-999", "Speedometer inoperative")
            .with_basic("unsafe_driving");
        assert!(!classify(&record));

        let record = RawViolationRecord::new("XYZ-999", "Driving 14 mph over limit")
            .with_basic("unsafe_driving");
        assert!(classify(&record));
    }

    #[test]
    fn unmatched_text_is_not_moving() {
        let record = RawViolationRecord::new("XYZ-999", "Unauthorized passenger on board")
            .with_basic("unsafe_driving");
        assert!(!classify(&record));
    }
}
