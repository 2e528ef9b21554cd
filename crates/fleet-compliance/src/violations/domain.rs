use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// FMCSA Behavior Analysis and Safety Improvement Categories handled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basic {
    UnsafeDriving,
    HoursOfService,
    DriverFitness,
    ControlledSubstances,
    VehicleMaintenance,
}

impl Basic {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::UnsafeDriving,
            Self::HoursOfService,
            Self::DriverFitness,
            Self::ControlledSubstances,
            Self::VehicleMaintenance,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsafeDriving => "unsafe_driving",
            Self::HoursOfService => "hours_of_service",
            Self::DriverFitness => "driver_fitness",
            Self::ControlledSubstances => "controlled_substances",
            Self::VehicleMaintenance => "vehicle_maintenance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnsafeDriving => "Unsafe Driving",
            Self::HoursOfService => "Hours of Service",
            Self::DriverFitness => "Driver Fitness",
            Self::ControlledSubstances => "Controlled Substances/Alcohol",
            Self::VehicleMaintenance => "Vehicle Maintenance",
        }
    }

    pub const fn regulations(self) -> &'static [&'static str] {
        match self {
            Self::UnsafeDriving => &["49 CFR 392"],
            Self::HoursOfService => &["49 CFR 395"],
            Self::DriverFitness => &["49 CFR 391"],
            Self::ControlledSubstances => &["49 CFR 382", "49 CFR 392.4", "49 CFR 392.5"],
            Self::VehicleMaintenance => &["49 CFR 393", "49 CFR 396"],
        }
    }

    /// Maps a three digit CFR part to its BASIC. Parts outside the regulatory
    /// table land in vehicle maintenance, FMCSA's catch-all category.
    pub fn for_cfr_part(part: &str) -> Self {
        match part {
            "392" => Self::UnsafeDriving,
            "395" => Self::HoursOfService,
            "391" => Self::DriverFitness,
            "382" => Self::ControlledSubstances,
            _ => Self::VehicleMaintenance,
        }
    }

    /// Lenient parse of an upstream BASIC hint. Accepts the snake_case key or
    /// the display label in any case, with spaces or hyphens as separators.
    pub fn parse_hint(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "unsafe_driving" => Some(Self::UnsafeDriving),
            "hours_of_service" | "hos" | "hos_compliance" => Some(Self::HoursOfService),
            "driver_fitness" => Some(Self::DriverFitness),
            "controlled_substances" | "controlled_substances/alcohol" | "drugs/alcohol" => {
                Some(Self::ControlledSubstances)
            }
            "vehicle_maintenance" => Some(Self::VehicleMaintenance),
            _ => None,
        }
    }
}

/// Reference attributes for one canonical violation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationCodeEntry {
    pub code: String,
    pub description: String,
    pub basic: Basic,
    pub severity: u8,
    pub cfr_part: String,
    pub oos_eligible: bool,
    pub is_moving: bool,
}

/// One violation as delivered by the upstream inspection feed. Every field may
/// be malformed or missing; the engine degrades instead of rejecting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawViolationRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub basic: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub group: Option<String>,
    #[serde(
        default,
        alias = "inspectionDate",
        alias = "violation_date",
        alias = "violationDate",
        deserialize_with = "lenient_date"
    )]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default, alias = "outOfService", deserialize_with = "lenient_flag")]
    pub oos: bool,
}

impl RawViolationRecord {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_basic(mut self, basic: impl Into<String>) -> Self {
        self.basic = Some(basic.into());
        self
    }

    pub fn inspected_on(mut self, date: NaiveDate) -> Self {
        self.inspection_date = Some(date);
        self
    }

    pub fn out_of_service(mut self, oos: bool) -> Self {
        self.oos = oos;
        self
    }

    pub fn basic_hint(&self) -> Option<Basic> {
        self.basic.as_deref().and_then(Basic::parse_hint)
    }
}

/// Weight bucket of a violation inside the 24-month FMCSA window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayTier {
    Full,
    Reduced,
    Minimal,
    Expired,
}

impl DecayTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full weight",
            Self::Reduced => "reduced weight (past 12mo)",
            Self::Minimal => "minimal weight (drops off at 24mo)",
            Self::Expired => "expired",
        }
    }

    pub const fn from_age_months(age_months: i64) -> Self {
        if age_months < 12 {
            Self::Full
        } else if age_months < 18 {
            Self::Reduced
        } else if age_months < 24 {
            Self::Minimal
        } else {
            Self::Expired
        }
    }

    /// SMS time weight applied when scoring a BASIC.
    pub const fn time_weight(self) -> u32 {
        match self {
            Self::Full => 3,
            Self::Reduced => 2,
            Self::Minimal => 1,
            Self::Expired => 0,
        }
    }
}

/// Whether a classification came from the reference table or was inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Resolved,
    BestGuess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    ExactMatch,
    PrefixMatch,
    CfrInference,
    TotalFallback,
}

impl ResolutionTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExactMatch => "Exact match",
            Self::PrefixMatch => "Prefix match",
            Self::CfrInference => "CFR part inference",
            Self::TotalFallback => "Unrecognized code",
        }
    }
}

/// A raw record after normalization, resolution, decay, and moving checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedViolation {
    #[serde(flatten)]
    pub record: RawViolationRecord,
    pub normalized_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_description: Option<String>,
    pub resolution_tier: ResolutionTier,
    pub confidence: Confidence,
    pub unknown: bool,
    pub resolved_basic: Basic,
    pub severity_weight: u8,
    pub cfr_reference: Option<String>,
    pub oos_eligible: bool,
    pub is_moving: bool,
    pub age_months: Option<i64>,
    pub decay_tier: Option<DecayTier>,
    pub decay_label: Option<&'static str>,
    pub drop_off_date: Option<NaiveDate>,
    pub drop_off_label: Option<String>,
}

impl ClassifiedViolation {
    /// FMCSA removes a violation from the public record at 24 months. Records
    /// without an inspection date cannot expire.
    pub fn is_expired(&self) -> bool {
        self.age_months.is_some_and(|age| age >= 24)
    }
}

/// Parses the date formats seen in inspection exports. Unparseable input is
/// treated as a missing date.
pub fn parse_inspection_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Some(date);
    }

    None
}

/// Interprets the out-of-service markers used by inspection exports.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "oos"
    )
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(parse_inspection_date))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FlagValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(FlagValue::Bool(flag)) => flag,
        Some(FlagValue::Number(number)) => number != 0,
        Some(FlagValue::Text(text)) => parse_flag(&text),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hint_accepts_keys_and_labels() {
        assert_eq!(Basic::parse_hint("unsafe_driving"), Some(Basic::UnsafeDriving));
        assert_eq!(Basic::parse_hint("Unsafe Driving"), Some(Basic::UnsafeDriving));
        assert_eq!(Basic::parse_hint(" hours-of-service "), Some(Basic::HoursOfService));
        assert_eq!(
            Basic::parse_hint("Controlled Substances/Alcohol"),
            Some(Basic::ControlledSubstances)
        );
        assert_eq!(Basic::parse_hint("crash_indicator"), None);
        assert_eq!(Basic::parse_hint(""), None);
    }

    #[test]
    fn cfr_part_mapping_defaults_to_vehicle_maintenance() {
        assert_eq!(Basic::for_cfr_part("395"), Basic::HoursOfService);
        assert_eq!(Basic::for_cfr_part("177"), Basic::VehicleMaintenance);
        assert_eq!(Basic::for_cfr_part("999"), Basic::VehicleMaintenance);
    }

    #[test]
    fn decay_tier_boundaries() {
        assert_eq!(DecayTier::from_age_months(-2), DecayTier::Full);
        assert_eq!(DecayTier::from_age_months(11), DecayTier::Full);
        assert_eq!(DecayTier::from_age_months(12), DecayTier::Reduced);
        assert_eq!(DecayTier::from_age_months(17), DecayTier::Reduced);
        assert_eq!(DecayTier::from_age_months(18), DecayTier::Minimal);
        assert_eq!(DecayTier::from_age_months(23), DecayTier::Minimal);
        assert_eq!(DecayTier::from_age_months(24), DecayTier::Expired);
    }

    #[test]
    fn parse_inspection_date_supports_feed_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
        assert_eq!(parse_inspection_date("2025-03-14"), Some(expected));
        assert_eq!(parse_inspection_date("2025-03-14T08:30:00Z"), Some(expected));
        assert_eq!(parse_inspection_date("03/14/2025"), Some(expected));
        assert_eq!(parse_inspection_date("  "), None);
        assert_eq!(parse_inspection_date("last spring"), None);
    }

    #[test]
    fn raw_record_deserializes_leniently() {
        let record: RawViolationRecord = serde_json::from_str(
            r#"{"code":null,"basic":"  ","inspectionDate":"not a date","oos":"Y"}"#,
        )
        .expect("record parses");

        assert_eq!(record.code, "");
        assert_eq!(record.description, "");
        assert!(record.basic.is_none());
        assert!(record.inspection_date.is_none());
        assert!(record.oos);

        let record: RawViolationRecord =
            serde_json::from_str(r#"{"code":"392.2S","inspection_date":"2025-01-02","oos":0}"#)
                .expect("record parses");
        assert_eq!(
            record.inspection_date,
            NaiveDate::from_ymd_opt(2025, 1, 2)
        );
        assert!(!record.oos);
    }
}
