//! Daily check-in state machine.
//!
//! One invocation loads the log, looks at today's record only, performs at
//! most one remote call and persists the new record when that call succeeds.
//! A failed call leaves the log untouched; the next scheduled run retries.

use chrono::{Duration, NaiveDateTime};

use super::plan::{Action, plan};
use crate::auth::Token;
use crate::models::record::DailyRecord;
use crate::remote::CheckInApi;
use crate::store::RecordStore;
use crate::utils::time::now_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// `persisted` is false when the log could not be written.
    SignedIn { at: NaiveDateTime, persisted: bool },
    SignInFailed,
    SignedOut {
        at: NaiveDateTime,
        elapsed: Duration,
        persisted: bool,
    },
    SignOutFailed { elapsed: Duration },
    TooEarly {
        since: NaiveDateTime,
        elapsed: Duration,
        remaining: Duration,
    },
    AlreadyComplete { signed_out_at: NaiveDateTime },
}

impl RunOutcome {
    pub fn remote_called(&self) -> bool {
        matches!(
            self,
            RunOutcome::SignedIn { .. }
                | RunOutcome::SignInFailed
                | RunOutcome::SignedOut { .. }
                | RunOutcome::SignOutFailed { .. }
        )
    }
}

pub struct Coordinator<'a, S: RecordStore + ?Sized, A: CheckInApi + ?Sized> {
    store: &'a S,
    api: &'a A,
    min_duration: Duration,
}

impl<'a, S: RecordStore + ?Sized, A: CheckInApi + ?Sized> Coordinator<'a, S, A> {
    /// A negative minimum duration is treated as zero.
    pub fn new(store: &'a S, api: &'a A, min_duration: Duration) -> Self {
        Self {
            store,
            api,
            min_duration: min_duration.max(Duration::zero()),
        }
    }

    pub fn run(&self, token: &Token) -> RunOutcome {
        self.run_at(token, now_local())
    }

    /// Same as [`Coordinator::run`] with an explicit local "now".
    pub fn run_at(&self, token: &Token, now: NaiveDateTime) -> RunOutcome {
        let mut log = self.store.load();
        let today = now.date();
        let record = log.get(today).copied().unwrap_or_default();

        match plan(&record, now, self.min_duration) {
            Action::Done { signed_out_at } => RunOutcome::AlreadyComplete { signed_out_at },

            Action::Wait {
                since,
                elapsed,
                remaining,
            } => RunOutcome::TooEarly {
                since,
                elapsed,
                remaining,
            },

            Action::SignOut { elapsed, .. } => {
                if !self.api.sign_out(token) {
                    return RunOutcome::SignOutFailed { elapsed };
                }
                let closed = DailyRecord {
                    sign_out_at: Some(now),
                    ..record
                };
                log.upsert(today, closed);
                RunOutcome::SignedOut {
                    at: now,
                    elapsed,
                    persisted: self.store.save(&log),
                }
            }

            Action::SignIn => {
                if !self.api.sign_in(token) {
                    return RunOutcome::SignInFailed;
                }
                log.upsert(today, DailyRecord::signed_in(now));
                RunOutcome::SignedIn {
                    at: now,
                    persisted: self.store.save(&log),
                }
            }
        }
    }
}
