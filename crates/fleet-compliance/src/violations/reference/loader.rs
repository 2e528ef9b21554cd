use super::super::domain::{parse_flag, Basic, ViolationCodeEntry};
use super::ReferenceTable;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Failures raised while loading or validating a reference document.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceTableError {
    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate violation code {0} in reference table")]
    DuplicateCode(String),
    #[error("violation code {code} has unknown BASIC '{value}'")]
    UnknownBasic { code: String, value: String },
    #[error("violation code {code} severity {severity} outside 1..=10")]
    SeverityOutOfRange { code: String, severity: u8 },
    #[error("violation code {code} has invalid CFR part '{cfr_part}'")]
    InvalidCfrPart { code: String, cfr_part: String },
    #[error("reference table contains no entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    code: String,
    #[serde(default)]
    description: String,
    basic: String,
    severity: u8,
    cfr_part: String,
    #[serde(default)]
    oos_eligible: String,
    #[serde(default)]
    is_moving: String,
}

impl ReferenceTable {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceTableError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Loads a reference document with the headers
    /// `code,description,basic,severity,cfr_part,oos_eligible,is_moving`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ReferenceTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<ReferenceRow>() {
            let row = row?;
            let basic =
                Basic::parse_hint(&row.basic).ok_or_else(|| ReferenceTableError::UnknownBasic {
                    code: row.code.clone(),
                    value: row.basic.clone(),
                })?;

            entries.push(ViolationCodeEntry {
                code: row.code,
                description: row.description,
                basic,
                severity: row.severity,
                cfr_part: row.cfr_part,
                oos_eligible: parse_flag(&row.oos_eligible),
                is_moving: parse_flag(&row.is_moving),
            });
        }

        if entries.is_empty() {
            return Err(ReferenceTableError::Empty);
        }

        Self::from_entries(entries)
    }
}

pub(super) fn validate_entry(entry: &ViolationCodeEntry) -> Result<(), ReferenceTableError> {
    if !(1..=10).contains(&entry.severity) {
        return Err(ReferenceTableError::SeverityOutOfRange {
            code: entry.code.clone(),
            severity: entry.severity,
        });
    }

    let part_is_numeric =
        entry.cfr_part.len() == 3 && entry.cfr_part.bytes().all(|b| b.is_ascii_digit());
    if !part_is_numeric {
        return Err(ReferenceTableError::InvalidCfrPart {
            code: entry.code.clone(),
            cfr_part: entry.cfr_part.clone(),
        });
    }

    Ok(())
}
