use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    confirm(io::stdin().lock()).unwrap_or(false)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position, yes } = cmd {
        let mut store = load_store(cfg, true)?;

        // validates the position before asking anything
        let record = store.get(*position)?.clone();

        if cfg.confirm_delete
            && !*yes
            && !ask_confirmation(&format!("Delete study log #{position}: {record}?"))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut store, *position)?;
        success(format!("Study log #{position} deleted."));
        ttlog(cfg, "del", &format!("#{position}"), &removed.to_string());
    }

    Ok(())
}
