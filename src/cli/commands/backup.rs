use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { to, compress, force } = cmd {
        let written = BackupLogic::backup(&cfg.log_path(), &expand_tilde(to), *compress, *force)?;
        success(format!("Backup created: {}", written.display()));
        ttlog(
            cfg,
            "backup",
            &written.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
