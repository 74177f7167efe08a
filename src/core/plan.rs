use chrono::{Duration, NaiveDateTime};

use crate::models::record::DailyRecord;
use crate::models::state::CheckInState;

/// What today's record calls for at `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SignIn,
    SignOut {
        since: NaiveDateTime,
        elapsed: Duration,
    },
    Wait {
        since: NaiveDateTime,
        elapsed: Duration,
        remaining: Duration,
    },
    Done {
        signed_out_at: NaiveDateTime,
    },
}

/// Decide the next step for one day.
///
/// Each transition requires the absence of the field it would set, so a day
/// can be signed in and signed out at most once. A sign-in timestamp in the
/// future (clock moved back) only ever yields `Wait`.
pub fn plan(record: &DailyRecord, now: NaiveDateTime, min_duration: Duration) -> Action {
    match record.state() {
        CheckInState::SignedOut { at } => Action::Done { signed_out_at: at },
        CheckInState::SignedIn { since } => {
            let elapsed = now - since;
            if elapsed >= min_duration {
                Action::SignOut { since, elapsed }
            } else {
                Action::Wait {
                    since,
                    elapsed,
                    remaining: min_duration
                        .checked_sub(&elapsed)
                        .unwrap_or(Duration::MAX)
                        .max(Duration::zero()),
                }
            }
        }
        CheckInState::NotSignedIn => Action::SignIn,
    }
}
