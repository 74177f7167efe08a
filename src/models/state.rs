use chrono::NaiveDateTime;

/// Position of a single day in the sign-in / sign-out cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInState {
    NotSignedIn,
    SignedIn { since: NaiveDateTime },
    SignedOut { at: NaiveDateTime },
}

impl CheckInState {
    pub fn label(&self) -> &str {
        match self {
            CheckInState::NotSignedIn => "not signed in",
            CheckInState::SignedIn { .. } => "signed in",
            CheckInState::SignedOut { .. } => "signed out",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, CheckInState::SignedOut { .. })
    }
}
