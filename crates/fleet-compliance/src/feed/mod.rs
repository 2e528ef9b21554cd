//! Import of upstream inspection violation feeds (JSON or CSV exports) into
//! [`RawViolationRecord`]s.

mod parser;

use crate::violations::RawViolationRecord;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum FeedImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat { extension: String },
}

impl std::fmt::Display for FeedImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedImportError::Io(err) => write!(f, "failed to read violation feed: {}", err),
            FeedImportError::Csv(err) => write!(f, "invalid violation CSV data: {}", err),
            FeedImportError::Json(err) => write!(f, "invalid violation JSON data: {}", err),
            FeedImportError::UnsupportedFormat { extension } => write!(
                f,
                "unsupported violation feed format '{}' (expected .json or .csv)",
                extension
            ),
        }
    }
}

impl std::error::Error for FeedImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedImportError::Io(err) => Some(err),
            FeedImportError::Csv(err) => Some(err),
            FeedImportError::Json(err) => Some(err),
            FeedImportError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<std::io::Error> for FeedImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FeedImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for FeedImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Json,
    Csv,
}

impl FeedFormat {
    pub fn from_path(path: &Path) -> Result<Self, FeedImportError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(FeedImportError::UnsupportedFormat { extension }),
        }
    }
}

/// A JSON feed is either a bare array or an object wrapping one; `null`
/// means the upstream had nothing to report.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFeed {
    Records(Option<Vec<RawViolationRecord>>),
    Wrapped {
        #[serde(default)]
        violations: Option<Vec<RawViolationRecord>>,
    },
}

impl JsonFeed {
    fn into_records(self) -> Vec<RawViolationRecord> {
        match self {
            JsonFeed::Records(records) | JsonFeed::Wrapped { violations: records } => {
                records.unwrap_or_default()
            }
        }
    }
}

pub struct ViolationFeedImporter;

impl ViolationFeedImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawViolationRecord>, FeedImportError> {
        let path = path.as_ref();
        let format = FeedFormat::from_path(path)?;
        let file = std::fs::File::open(path)?;
        let records = Self::from_reader(file, format)?;
        debug!(path = %path.display(), records = records.len(), "imported violation feed");
        Ok(records)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: FeedFormat,
    ) -> Result<Vec<RawViolationRecord>, FeedImportError> {
        match format {
            FeedFormat::Json => Self::from_json_reader(reader),
            FeedFormat::Csv => Self::from_csv_reader(reader),
        }
    }

    pub fn from_json_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<RawViolationRecord>, FeedImportError> {
        let feed: JsonFeed = serde_json::from_reader(reader)?;
        Ok(feed.into_records())
    }

    pub fn from_json_str(json: &str) -> Result<Vec<RawViolationRecord>, FeedImportError> {
        let feed: JsonFeed = serde_json::from_str(json)?;
        Ok(feed.into_records())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<RawViolationRecord>, FeedImportError> {
        Ok(parser::parse_csv_records(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn csv_rows_map_to_raw_records() {
        let csv = "Code,Description,BASIC,Section,Group,Inspection Date,OOS\n\
392.2S, Speeding 6-10 over ,Unsafe Driving,,Speeding,03/14/2025,N\n\
396.3(a)(1),Brakes out of adjustment,,,,2025-01-09,Y\n";

        let records =
            ViolationFeedImporter::from_csv_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "392.2S");
        assert_eq!(records[0].description, "Speeding 6-10 over");
        assert_eq!(records[0].basic.as_deref(), Some("Unsafe Driving"));
        assert!(records[0].section.is_none());
        assert_eq!(records[0].group.as_deref(), Some("Speeding"));
        assert_eq!(
            records[0].inspection_date,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert!(!records[0].oos);
        assert!(records[1].oos);
        assert!(records[1].basic.is_none());
    }

    #[test]
    fn csv_degrades_malformed_fields() {
        let csv = "Code,Inspection Date,OOS\n,sometime,maybe\n";

        let records =
            ViolationFeedImporter::from_csv_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "");
        assert!(records[0].inspection_date.is_none());
        assert!(!records[0].oos);
    }

    #[test]
    fn json_accepts_array_wrapper_and_null() {
        let records = ViolationFeedImporter::from_json_str(
            r#"[{"code":"395.8E","inspectionDate":"2025-02-01T10:00:00Z","outOfService":true}]"#,
        )
        .expect("array parses");
        assert_eq!(records.len(), 1);
        assert!(records[0].oos);
        assert_eq!(
            records[0].inspection_date,
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );

        let records =
            ViolationFeedImporter::from_json_str(r#"{"violations":[{"code":"393.9"}]}"#)
                .expect("wrapper parses");
        assert_eq!(records[0].code, "393.9");

        assert!(ViolationFeedImporter::from_json_str("null")
            .expect("null parses")
            .is_empty());
    }

    #[test]
    fn json_rejects_structurally_invalid_documents() {
        let error = ViolationFeedImporter::from_json_str("[{\"code\": ")
            .expect_err("truncated json fails");
        assert!(matches!(error, FeedImportError::Json(_)));
    }

    #[test]
    fn from_path_checks_extension_then_io() {
        match ViolationFeedImporter::from_path("./violations.xlsx") {
            Err(FeedImportError::UnsupportedFormat { extension }) => assert_eq!(extension, "xlsx"),
            other => panic!("expected unsupported format, got {other:?}"),
        }

        match ViolationFeedImporter::from_path("./does-not-exist.csv") {
            Err(FeedImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
