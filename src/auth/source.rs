//! Where the bearer token comes from.
//!
//! Logging in (a headless-browser SSO flow in practice) is not done here:
//! a [`CommandToken`] runs whatever login helper the user configured and
//! reads the token from its stdout.

use std::process::Command;

use super::token::Token;
use crate::errors::AppError;

/// Result of asking a source for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    Available(Token),
    Unavailable(String),
}

impl TokenOutcome {
    pub fn into_result(self) -> Result<Token, AppError> {
        match self {
            TokenOutcome::Available(t) => Ok(t),
            TokenOutcome::Unavailable(cause) => Err(AppError::TokenUnavailable(cause)),
        }
    }
}

pub trait TokenSource {
    fn acquire(&self) -> TokenOutcome;
}

/// A token known up front (`--token`, `RCHECKIN_TOKEN`).
pub struct StaticToken {
    label: String,
    value: Option<String>,
}

impl StaticToken {
    pub fn new(label: &str, value: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn from_env(var: &str) -> Self {
        Self::new(var, std::env::var(var).ok())
    }
}

impl TokenSource for StaticToken {
    fn acquire(&self) -> TokenOutcome {
        match self.value.as_deref().and_then(Token::new) {
            Some(t) => TokenOutcome::Available(t),
            None => TokenOutcome::Unavailable(format!("{} is not set", self.label)),
        }
    }
}

/// Runs a shell command and takes its trimmed stdout as the token.
pub struct CommandToken {
    command: String,
}

impl CommandToken {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn shell(&self) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        }
    }
}

impl TokenSource for CommandToken {
    fn acquire(&self) -> TokenOutcome {
        let output = match self.shell().output() {
            Ok(o) => o,
            Err(e) => {
                return TokenOutcome::Unavailable(format!(
                    "failed to start token command '{}': {}",
                    self.command, e
                ));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return TokenOutcome::Unavailable(format!(
                "token command exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        let stdout = match String::from_utf8(output.stdout) {
            Ok(s) => s,
            Err(_) => {
                return TokenOutcome::Unavailable("token command printed non UTF-8 output".into());
            }
        };

        match Token::new(&stdout) {
            Some(t) => TokenOutcome::Available(t),
            None => TokenOutcome::Unavailable("token command printed nothing".into()),
        }
    }
}

/// First source yielding a token wins; otherwise the last cause is kept.
#[derive(Default)]
pub struct ChainSource {
    sources: Vec<Box<dyn TokenSource>>,
}

impl ChainSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl TokenSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl TokenSource for ChainSource {
    fn acquire(&self) -> TokenOutcome {
        let mut last = TokenOutcome::Unavailable("no token source configured".into());
        for source in &self.sources {
            match source.acquire() {
                TokenOutcome::Available(t) => return TokenOutcome::Available(t),
                unavailable => last = unavailable,
            }
        }
        last
    }
}
