use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily exercise check-in: sign in, wait the minimum duration, sign out",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the check-in log path (useful for tests or a custom location)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sign in or sign out, depending on today's state
    Run {
        /// Bearer token (falls back to $RCHECKIN_TOKEN, then `token_command`)
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },

    /// Show today's check-in state without contacting the server
    Status,

    /// Print the check-in history
    Log {
        /// Filter by year, month or day (YYYY, YYYY-MM, YYYY-MM-DD)
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Print sample jittered coordinates around the configured center
    Jitter {
        #[arg(long, short = 'n', default_value_t = 5)]
        count: usize,
    },
}
