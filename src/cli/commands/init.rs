use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::store::StudyStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the log file, written with just its header when it does not exist yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing studylog…");

    // `cfg` may carry the --file override; persist the settings as stored on disk
    if !cli.test {
        Config::load()?.save()?;
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let path = cfg.log_path();
    if path.exists() {
        info(format!("Log file already present: {}", path.display()));
    } else {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        StudyStore::new(&path).save()?;
        success(format!("Log file:    {}", path.display()));
        ttlog(cfg, "init", &path.to_string_lossy(), "Log file created");
    }

    Ok(())
}
