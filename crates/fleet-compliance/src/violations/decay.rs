use super::domain::DecayTier;
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Average Gregorian month length used by FMCSA's age calculation.
pub const AVERAGE_MONTH_DAYS: f64 = 30.44;
/// Months a violation stays on the public record.
pub const RETENTION_MONTHS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecayEvaluation {
    pub age_months: i64,
    pub tier: DecayTier,
    pub drop_off_date: NaiveDate,
}

impl DecayEvaluation {
    /// Month and year the violation leaves the record, e.g. `March 2027`.
    pub fn drop_off_label(&self) -> String {
        self.drop_off_date.format("%B %Y").to_string()
    }
}

/// Age, tier, and drop-off date of a violation as of `now`. A missing
/// inspection date yields `None` for all three.
pub fn evaluate_decay(
    inspection_date: Option<NaiveDate>,
    now: NaiveDate,
) -> Option<DecayEvaluation> {
    let inspection_date = inspection_date?;
    let age_months = age_in_months(inspection_date, now);

    Some(DecayEvaluation {
        age_months,
        tier: DecayTier::from_age_months(age_months),
        drop_off_date: drop_off_date(inspection_date),
    })
}

/// Whole months between the two dates, rounding halves up.
pub fn age_in_months(inspection_date: NaiveDate, now: NaiveDate) -> i64 {
    let days = (now - inspection_date).num_days() as f64;
    (days / AVERAGE_MONTH_DAYS + 0.5).floor() as i64
}

pub fn drop_off_date(inspection_date: NaiveDate) -> NaiveDate {
    inspection_date
        .checked_add_months(Months::new(RETENTION_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}
