use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::record::StudyRecord;
use crate::store::codec::write_records;
use crate::ui::messages::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Scrive i record in CSV nel file indicato, nello stesso formato del file di log.
pub(crate) fn export_csv(records: &[StudyRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)?;

    notify_export_success("CSV", path);
    Ok(())
}
