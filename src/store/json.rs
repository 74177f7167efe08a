//! Pretty-printed JSON file backend.
//!
//! ```json
//! {
//!     "2025-09-10": {
//!         "sign_in": "2025-09-10T07:02:11.402315",
//!         "sign_out": null
//!     }
//! }
//! ```

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

use super::{LogStore, RecordStore};
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn try_load(&self) -> AppResult<LogStore> {
        if !self.path.exists() {
            return Ok(LogStore::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(LogStore::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn try_save(&self, store: &LogStore) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        store.serialize(&mut ser)?;
        buf.push(b'\n');

        fs::write(&self.path, buf)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
