//! Regulatory reference table mapping canonical violation codes to their
//! BASIC, severity, CFR part, and out-of-service / moving flags.
//!
//! The table is built once and shared read-only: the built-in FMCSA set lives
//! behind a `OnceLock`, and tables loaded from a reference document are
//! wrapped in an `Arc` by the service.

mod data;
mod loader;

use super::domain::{Basic, ViolationCodeEntry};
use super::normalizer::normalize_code;
use super::resolver::resolve;
use std::collections::HashMap;
use std::sync::OnceLock;

pub use loader::ReferenceTableError;

static BUILTIN_TABLE: OnceLock<ReferenceTable> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ViolationCodeEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// The FMCSA code set shipped with the engine.
    pub fn builtin() -> &'static ReferenceTable {
        BUILTIN_TABLE.get_or_init(|| {
            let mut table = ReferenceTable {
                entries: Vec::with_capacity(data::BUILTIN_CODES.len()),
                index: HashMap::with_capacity(data::BUILTIN_CODES.len()),
            };
            for (code, description, basic, severity, cfr_part, oos_eligible, is_moving) in
                data::BUILTIN_CODES
            {
                table.push(ViolationCodeEntry {
                    code: (*code).to_string(),
                    description: (*description).to_string(),
                    basic: *basic,
                    severity: *severity,
                    cfr_part: (*cfr_part).to_string(),
                    oos_eligible: *oos_eligible,
                    is_moving: *is_moving,
                });
            }
            table
        })
    }

    /// Builds a table from externally supplied entries, enforcing one entry per
    /// canonical code, severity within 1..=10, and a three digit CFR part.
    pub fn from_entries<I>(entries: I) -> Result<Self, ReferenceTableError>
    where
        I: IntoIterator<Item = ViolationCodeEntry>,
    {
        let mut table = ReferenceTable::default();
        for mut entry in entries {
            entry.code = normalize_code(&entry.code);
            loader::validate_entry(&entry)?;
            if table.index.contains_key(&entry.code) {
                return Err(ReferenceTableError::DuplicateCode(entry.code));
            }
            table.push(entry);
        }
        Ok(table)
    }

    fn push(&mut self, entry: ViolationCodeEntry) {
        self.index.insert(entry.code.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Exact lookup by canonical key.
    pub fn get(&self, code: &str) -> Option<&ViolationCodeEntry> {
        self.index.get(code).map(|position| &self.entries[*position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ViolationCodeEntry] {
        &self.entries
    }

    pub fn entries_for_basic(&self, basic: Basic) -> Vec<&ViolationCodeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.basic == basic)
            .collect()
    }

    pub fn oos_eligible_entries(&self) -> Vec<&ViolationCodeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.oos_eligible)
            .collect()
    }

    pub fn moving_entries(&self) -> Vec<&ViolationCodeEntry> {
        self.entries.iter().filter(|entry| entry.is_moving).collect()
    }

    /// True only when the code resolves to an entry flagged as moving.
    pub fn is_moving_code(&self, raw_code: &str) -> bool {
        resolve(self, raw_code).resolution.is_moving()
    }
}
