use crate::cli::commands::load_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::report::records_table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = load_store(cfg, false)?;

    header("All study logs");
    if store.is_empty() {
        info("No study logs recorded yet.");
        return Ok(());
    }

    print!("{}", records_table(store.list(), cfg.separator()));
    Ok(())
}
