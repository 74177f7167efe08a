//! SQLite backend: one row per day in the `check_ins` table.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};
use std::path::PathBuf;

use super::{LogStore, RecordStore};
use crate::errors::{AppError, AppResult};
use crate::models::record::DailyRecord;
use crate::utils::path::ensure_parent_dir;
use crate::utils::time::{TIMESTAMP_FORMAT, parse_timestamp};

pub struct SqliteStore {
    path: PathBuf,
}

/// Create the `check_ins` table if missing.
fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS check_ins (
            date      TEXT PRIMARY KEY,
            sign_in   TEXT,
            sign_out  TEXT
        );
        "#,
    )
}

fn opt_timestamp(raw: Option<String>) -> AppResult<Option<NaiveDateTime>> {
    raw.map(|s| parse_timestamp(&s)).transpose()
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.path)?;
        ensure_schema(&conn)?;
        Ok(conn)
    }
}

impl RecordStore for SqliteStore {
    fn try_load(&self) -> AppResult<LogStore> {
        // Opening would create the file; a missing database is just an empty history.
        if !self.path.exists() {
            return Ok(LogStore::new());
        }

        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT date, sign_in, sign_out FROM check_ins ORDER BY date")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;

        let mut store = LogStore::new();
        for row in rows {
            let (date, sign_in, sign_out) = row?;
            let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date.clone()))?;
            store.upsert(
                day,
                DailyRecord {
                    sign_in_at: opt_timestamp(sign_in)?,
                    sign_out_at: opt_timestamp(sign_out)?,
                },
            );
        }

        Ok(store)
    }

    fn try_save(&self, store: &LogStore) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM check_ins", [])?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO check_ins (date, sign_in, sign_out) VALUES (?1, ?2, ?3)",
            )?;
            for (date, record) in store.iter() {
                stmt.execute(params![
                    date.format("%Y-%m-%d").to_string(),
                    record
                        .sign_in_at
                        .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                    record
                        .sign_out_at
                        .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} (sqlite)", self.path.display())
    }
}
