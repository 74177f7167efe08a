//! Date-keyed persistence of the daily check-in records.
//!
//! The coordinator only sees the [`RecordStore`] trait. Backends implement
//! the fallible `try_*` pair; the provided `load`/`save` wrappers turn every
//! failure into "no history" or a reported warning so a broken log never
//! aborts a run.

pub mod json;
pub mod memory;
pub mod sqlite;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{Config, StorageKind};
use crate::errors::{AppError, AppResult};
use crate::models::record::DailyRecord;
use crate::ui::messages::warning;
use crate::utils::date::date_key;
use crate::utils::path::expand_tilde;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Every known day, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogStore {
    records: BTreeMap<NaiveDate, DailyRecord>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Create or overwrite the record for `date`.
    pub fn upsert(&mut self, date: NaiveDate, record: DailyRecord) {
        self.records.insert(date, record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records breaking the sign-in/sign-out ordering. They are kept as
    /// history; `plan` treats any day with a sign-out as complete.
    pub fn invalid_records(&self) -> Vec<AppError> {
        self.records
            .iter()
            .filter_map(|(date, record)| record.validate(&date_key(*date)).err())
            .collect()
    }
}

impl FromIterator<(NaiveDate, DailyRecord)> for LogStore {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

pub trait RecordStore {
    /// Read the whole persisted store.
    fn try_load(&self) -> AppResult<LogStore>;

    /// Replace the persisted store with `store`.
    fn try_save(&self, store: &LogStore) -> AppResult<()>;

    /// Human-readable location, used in messages.
    fn describe(&self) -> String;

    /// Never fails: missing, unreadable or corrupt state reads as empty.
    /// Inconsistent records are reported and loaded unchanged.
    fn load(&self) -> LogStore {
        match self.try_load() {
            Ok(store) => {
                for e in store.invalid_records() {
                    warning(format!(
                        "Keeping inconsistent record in {}: {}",
                        self.describe(),
                        e
                    ));
                }
                store
            }
            Err(e) => {
                warning(format!(
                    "Ignoring unreadable check-in log {}: {}",
                    self.describe(),
                    e
                ));
                LogStore::new()
            }
        }
    }

    /// Never fails: returns whether the store was persisted.
    fn save(&self, store: &LogStore) -> bool {
        match self.try_save(store) {
            Ok(()) => true,
            Err(e) => {
                crate::ui::messages::error(format!(
                    "Failed to write check-in log {}: {}",
                    self.describe(),
                    e
                ));
                false
            }
        }
    }
}

/// Build the backend selected in the configuration.
pub fn open_store(cfg: &Config) -> Box<dyn RecordStore> {
    let path = expand_tilde(&cfg.log_file);
    match cfg.storage {
        StorageKind::Json => Box::new(JsonFileStore::new(path)),
        StorageKind::Sqlite => Box::new(SqliteStore::new(path)),
    }
}
