use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Record a study session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        subject,
        duration,
        description,
        date,
    } = cmd
    {
        let mut store = load_store(cfg, true)?;

        let outcome = AddLogic::apply(
            &mut store,
            AddRequest {
                date: date.as_deref(),
                subject,
                duration,
                description,
            },
        )?;

        if let Some(bad) = &outcome.date_fallback {
            warning(format!("Invalid date '{bad}'. Using today's date."));
        }

        success(format!("Study log #{} saved: {}", outcome.position, outcome.record));
        ttlog(
            cfg,
            "add",
            &format!("#{}", outcome.position),
            &outcome.record.to_string(),
        );
    }

    Ok(())
}
