use chrono::NaiveDate;

use crate::models::record::DailyRecord;
use crate::store::LogStore;
use crate::utils::date::{Period, date_key};
use crate::utils::formatting::pad_right;
use crate::utils::time::{format_clock, format_duration};

/// One printable line of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub sign_in: String,
    pub sign_out: String,
    pub duration: String,
    pub state: String,
}

impl HistoryRow {
    fn from_record(date: NaiveDate, r: &DailyRecord) -> Self {
        let dash = || "-".to_string();
        Self {
            date: date_key(date),
            sign_in: r.sign_in_at.map(format_clock).unwrap_or_else(dash),
            sign_out: r.sign_out_at.map(format_clock).unwrap_or_else(dash),
            duration: match (r.sign_in_at, r.sign_out_at) {
                (Some(i), Some(o)) => format_duration(o - i),
                _ => dash(),
            },
            state: r.state().label().to_string(),
        }
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Rows for every stored day matching `period` (all days when `None`).
    pub fn rows(store: &LogStore, period: Option<Period>) -> Vec<HistoryRow> {
        store
            .iter()
            .filter(|(d, _)| period.is_none_or(|p| p.contains(**d)))
            .map(|(d, r)| HistoryRow::from_record(*d, r))
            .collect()
    }

    pub fn print(rows: &[HistoryRow]) {
        println!(
            "{} {} {} {} {}",
            pad_right("DATE", 10),
            pad_right("SIGN IN", 8),
            pad_right("SIGN OUT", 8),
            pad_right("DURATION", 8),
            "STATE"
        );
        println!("{}", "-".repeat(52));

        for row in rows {
            println!(
                "{} {} {} {} {}",
                pad_right(&row.date, 10),
                pad_right(&row.sign_in, 8),
                pad_right(&row.sign_out, 8),
                pad_right(&row.duration, 8),
                row.state
            );
        }
    }
}
