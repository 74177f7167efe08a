use crate::config::Config;
use crate::core::plan::Action;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{detail, info, success};
use crate::utils::time::{format_clock, format_duration, hours_to_duration, now_local};

pub fn handle(cfg: &Config) -> AppResult<()> {
    cfg.validate()?;
    let store = open_store(cfg);
    let status = StatusLogic::today(
        &store.load(),
        now_local(),
        hours_to_duration(cfg.min_duration_hours),
    );

    match status.next {
        Action::SignIn => {
            info("Not signed in today.");
            detail("Next run will sign in.");
        }
        Action::SignOut { since, elapsed } => {
            info(format!(
                "Signed in at {} ({} elapsed).",
                format_clock(since),
                format_duration(elapsed)
            ));
            detail("Minimum duration reached: next run will sign out.");
        }
        Action::Wait {
            since,
            elapsed,
            remaining,
        } => {
            info(format!(
                "Signed in at {} ({} elapsed).",
                format_clock(since),
                format_duration(elapsed)
            ));
            detail(format!("Sign-out possible in {}.", format_duration(remaining)));
        }
        Action::Done { signed_out_at } => {
            success(format!(
                "Today's cycle is complete: signed out at {}.",
                format_clock(signed_out_at)
            ));
        }
    }

    Ok(())
}
