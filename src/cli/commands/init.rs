use std::path::Path;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file, unless one exists and `--force` is off
///
/// The check-in log itself is created on the first successful check-in.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    info("Initializing rCheckin…");
    let (cfg, written) = Config::init_all(config_path, cli.log.clone(), force)?;

    if written {
        success(format!("Config file : {}", config_path.display()));
    } else {
        info(format!(
            "Config file already present, kept as is: {} (use --force to overwrite)",
            config_path.display()
        ));
    }

    let store = open_store(&cfg);
    info(format!("Check-in log: {}", store.describe()));

    success("rCheckin initialization completed!");
    Ok(())
}
