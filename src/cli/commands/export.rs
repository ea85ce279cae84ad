use crate::cli::commands::load_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportTarget;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out, force } = cmd {
        let store = load_store(cfg, false)?;

        let target = match out {
            Some(f) => ExportTarget::File {
                path: expand_tilde(f),
                force: *force,
            },
            None => ExportTarget::Dated {
                dir: cfg.export_dir_path(),
                day: today(),
            },
        };

        let path = ExportLogic::export(store.list(), *format, &target)?;
        ttlog(
            cfg,
            "export",
            &path.to_string_lossy(),
            &format!("{} log(s) exported as {}", store.len(), format.as_str()),
        );
    }
    Ok(())
}
