use crate::auth::{ChainSource, CommandToken, StaticToken, TokenSource};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Coordinator, RunOutcome};
use crate::errors::AppResult;
use crate::remote::{HttpCheckInClient, RemoteSettings};
use crate::store::open_store;
use crate::ui::messages::{detail, error, header, info, success, warning};
use crate::utils::time::{format_clock, format_duration, hours_to_duration};

pub const TOKEN_ENV: &str = "RCHECKIN_TOKEN";

/// `--token`, then the environment, then the configured login command.
pub fn token_sources(flag: Option<String>, cfg: &Config) -> ChainSource {
    let mut chain = ChainSource::new()
        .with(StaticToken::new("--token", flag))
        .with(StaticToken::from_env(TOKEN_ENV));
    if let Some(cmd) = &cfg.token_command {
        chain = chain.with(CommandToken::new(cmd.clone()));
    }
    chain
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { token } = cmd {
        cfg.validate()?;

        // No token, no coordinator.
        let token = token_sources(token.clone(), cfg).acquire().into_result()?;
        info(format!("Token acquired: {}", token.masked()));

        let store = open_store(cfg);
        let client = HttpCheckInClient::new(RemoteSettings::from_config(cfg), cfg.jitter())?;
        let min_duration = hours_to_duration(cfg.min_duration_hours);
        let coordinator = Coordinator::new(&*store, &client, min_duration);

        header("Check-in");
        report(&coordinator.run(&token), cfg);
    }

    Ok(())
}

fn report(outcome: &RunOutcome, cfg: &Config) {
    match outcome {
        RunOutcome::SignedIn { at, persisted } => {
            success(format!("Signed in at {}.", format_clock(*at)));
            if !persisted {
                warning("Sign-in not recorded locally; the next run may sign in again.");
            }
        }
        RunOutcome::SignInFailed => {
            error("Sign-in failed. Check the server response above.");
            detail("Nothing recorded; the next run will try again.");
        }
        RunOutcome::SignedOut {
            at,
            elapsed,
            persisted,
        } => {
            success(format!(
                "Signed out at {} after {}.",
                format_clock(*at),
                format_duration(*elapsed)
            ));
            if !persisted {
                warning("Sign-out not recorded locally; the next run may sign out again.");
            }
        }
        RunOutcome::SignOutFailed { elapsed } => {
            error(format!(
                "Sign-out failed after {}. Check the server response above.",
                format_duration(*elapsed)
            ));
        }
        RunOutcome::TooEarly {
            since,
            elapsed,
            remaining,
        } => {
            info(format!(
                "Signed in at {} ({} elapsed).",
                format_clock(*since),
                format_duration(*elapsed)
            ));
            detail(format!(
                "Minimum of {} h not reached yet, {} to go. Not signing out.",
                cfg.min_duration_hours,
                format_duration(*remaining)
            ));
        }
        RunOutcome::AlreadyComplete { signed_out_at } => {
            success(format!(
                "Already signed out today at {}.",
                format_clock(*signed_out_at)
            ));
        }
    }
}
