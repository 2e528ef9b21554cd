use crate::violations::domain::{parse_flag, parse_inspection_date, RawViolationRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<RawViolationRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<InspectionRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct InspectionRow {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "BASIC", default, deserialize_with = "empty_string_as_none")]
    basic: Option<String>,
    #[serde(rename = "Section", default, deserialize_with = "empty_string_as_none")]
    section: Option<String>,
    #[serde(rename = "Group", default, deserialize_with = "empty_string_as_none")]
    group: Option<String>,
    #[serde(
        rename = "Inspection Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    inspection_date: Option<String>,
    #[serde(rename = "OOS", default, deserialize_with = "empty_string_as_none")]
    oos: Option<String>,
}

impl InspectionRow {
    fn into_record(self) -> RawViolationRecord {
        RawViolationRecord {
            code: self.code,
            description: self.description,
            basic: self.basic,
            section: self.section,
            group: self.group,
            inspection_date: self
                .inspection_date
                .as_deref()
                .and_then(parse_inspection_date),
            oos: self.oos.as_deref().is_some_and(parse_flag),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
