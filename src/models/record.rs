use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::state::CheckInState;

/// One calendar day of the check-in cycle.
///
/// Field names on disk are `sign_in` / `sign_out`, holding local ISO-8601
/// timestamps (or `null`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "sign_in", default)]
    pub sign_in_at: Option<NaiveDateTime>,
    #[serde(rename = "sign_out", default)]
    pub sign_out_at: Option<NaiveDateTime>,
}

impl DailyRecord {
    /// Record created by a successful sign-in.
    pub fn signed_in(at: NaiveDateTime) -> Self {
        Self {
            sign_in_at: Some(at),
            sign_out_at: None,
        }
    }

    /// Where this record sits in the daily cycle.
    ///
    /// A present `sign_out_at` wins over everything else: once a day is
    /// closed it stays closed.
    pub fn state(&self) -> CheckInState {
        match (self.sign_in_at, self.sign_out_at) {
            (_, Some(out)) => CheckInState::SignedOut { at: out },
            (Some(sign_in), None) => CheckInState::SignedIn { since: sign_in },
            (None, None) => CheckInState::NotSignedIn,
        }
    }

    /// Check `sign_out_at` requires `sign_in_at` and never precedes it.
    pub fn validate(&self, date: &str) -> AppResult<()> {
        match (self.sign_in_at, self.sign_out_at) {
            (None, Some(_)) => Err(AppError::InvalidRecord {
                date: date.to_string(),
                reason: "sign_out present without sign_in".into(),
            }),
            (Some(sign_in), Some(out)) if out < sign_in => Err(AppError::InvalidRecord {
                date: date.to_string(),
                reason: format!("sign_out {} precedes sign_in {}", out, sign_in),
            }),
            _ => Ok(()),
        }
    }
}
