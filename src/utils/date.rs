use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

pub fn date_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// A history filter: a whole year, a month or a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Year(i32),
    Month(i32, u32),
    Day(NaiveDate),
}

impl Period {
    /// Accepts `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(p: &str) -> AppResult<Self> {
        if let Some(d) = parse_date(p) {
            return Ok(Period::Day(d));
        }

        if let Some(dm) = parse_date(&format!("{}-01", p)) {
            return Ok(Period::Month(dm.year(), dm.month()));
        }

        if p.len() == 4
            && let Ok(year) = p.parse::<i32>()
        {
            return Ok(Period::Year(year));
        }

        Err(AppError::InvalidPeriod(p.to_string()))
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        match *self {
            Period::Year(y) => d.year() == y,
            Period::Month(y, m) => d.year() == y && d.month() == m,
            Period::Day(day) => d == day,
        }
    }
}
