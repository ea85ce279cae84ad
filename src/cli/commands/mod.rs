pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod menu;
pub mod summary;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::StudyStore;
use crate::ui::messages::warning;

/// Open the configured log file.
///
/// With `strict` a corrupt file is an error, so a later save cannot drop the
/// rows that failed to load. Otherwise the readable rows are kept and a warning
/// is printed.
pub(crate) fn load_store(cfg: &Config, strict: bool) -> AppResult<StudyStore> {
    if strict {
        let mut store = StudyStore::new(cfg.log_path());
        store.load()?;
        return Ok(store);
    }
    load_partial(cfg).map(|(store, _)| store)
}

/// Open the log file, keeping the rows read before a corrupt one.
///
/// The flag is `true` when the file could not be read completely.
pub(crate) fn load_partial(cfg: &Config) -> AppResult<(StudyStore, bool)> {
    let mut store = StudyStore::new(cfg.log_path());
    match store.load() {
        Ok(_) => Ok((store, false)),
        Err(e @ AppError::CorruptFile { .. }) => {
            warning(format!(
                "{e}. Continuing with the {} log(s) read before the error.",
                store.len()
            ));
            Ok((store, true))
        }
        Err(e) => Err(e),
    }
}
