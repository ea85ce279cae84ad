use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditRequest};
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        position,
        subject,
        duration,
        description,
    } = cmd
    {
        let mut store = load_store(cfg, true)?;

        let outcome = EditLogic::apply(
            &mut store,
            *position,
            EditRequest {
                subject: subject.as_deref(),
                duration: duration.as_deref(),
                description: description.as_deref(),
            },
        )?;

        if let Some(e) = &outcome.rejected_duration {
            warning(format!("{e}. Keeping the original duration."));
        }

        if outcome.changed {
            let record = store.get(*position)?;
            success(format!("Study log #{position} updated: {record}"));
            ttlog(cfg, "edit", &format!("#{position}"), &record.to_string());
        } else {
            info("Nothing to change.");
        }
    }

    Ok(())
}
