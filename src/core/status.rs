use chrono::{Duration, NaiveDateTime};

use super::plan::{Action, plan};
use crate::store::LogStore;

/// Today's position in the cycle, computed without any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    pub now: NaiveDateTime,
    pub next: Action,
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn today(store: &LogStore, now: NaiveDateTime, min_duration: Duration) -> DayStatus {
        let record = store.get(now.date()).copied().unwrap_or_default();
        DayStatus {
            now,
            next: plan(&record, now, min_duration.max(Duration::zero())),
        }
    }
}
