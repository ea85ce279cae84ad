use crate::cli::commands::load_store;
use crate::cli::parser::{Commands, SummaryKind};
use crate::config::Config;
use crate::core::summary::{by_date, by_subject};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::report::{by_date_table, by_subject_table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { by } = cmd {
        let store = load_store(cfg, false)?;
        print_summary(store.list(), *by, cfg.separator());
    }
    Ok(())
}

pub(crate) fn print_summary(
    records: &[crate::models::record::StudyRecord],
    kind: SummaryKind,
    sep: char,
) {
    match kind {
        SummaryKind::Date => header("Study summary by date"),
        SummaryKind::Subject => header("Study summary by subject"),
    }

    if records.is_empty() {
        info("No study logs recorded yet.");
        return;
    }

    let table = match kind {
        SummaryKind::Date => by_date_table(&by_date(records), sep),
        SummaryKind::Subject => by_subject_table(&by_subject(records), sep),
    };
    print!("{table}");
}
