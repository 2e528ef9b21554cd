use chrono::NaiveDate;
use fleet_compliance::error::AppError;
use fleet_compliance::violations::ReferenceTable;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) reference: Arc<ReferenceTable>,
    pub(crate) dataq_min_score: u8,
}

/// Loads the reference document when one is configured, else shares the
/// built-in FMCSA table.
pub(crate) fn load_reference_table(path: Option<&Path>) -> Result<Arc<ReferenceTable>, AppError> {
    let table = match path {
        Some(path) => {
            let table = ReferenceTable::from_csv_path(path)?;
            info!(path = %path.display(), codes = table.len(), "loaded reference table");
            table
        }
        None => ReferenceTable::builtin().clone(),
    };

    Ok(Arc::new(table))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
