use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::info;
use crate::utils::date::Period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { period } = cmd {
        let period = period.as_deref().map(Period::parse).transpose()?;
        let store = open_store(cfg);
        let rows = HistoryLogic::rows(&store.load(), period);

        if rows.is_empty() {
            info(format!("No check-in records in {}", store.describe()));
            return Ok(());
        }

        println!("📜 Check-in history:\n");
        HistoryLogic::print(&rows);
    }

    Ok(())
}
