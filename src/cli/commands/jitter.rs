use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::geo::distance::great_circle_meters;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Jitter { count } = cmd {
        cfg.validate()?;
        let jitter = cfg.jitter();
        let center = jitter.center();

        info(format!(
            "Center ({}, {}), radius {} m",
            center.longitude_text(),
            center.latitude_text(),
            jitter.radius_meters()
        ));

        for _ in 0..*count {
            let c = jitter.sample();
            println!(
                "lon={:<20} lat={:<20} {:>7.2} m",
                c.longitude_text(),
                c.latitude_text(),
                great_circle_meters(center, c)
            );
        }
    }

    Ok(())
}
