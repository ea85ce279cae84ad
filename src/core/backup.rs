use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the log file `src` to `dest`, or into a `.zip` next to `dest` when
    /// `compress` is set.
    ///
    /// Returns the path of the file actually written.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "log file not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if target == src {
            return Err(AppError::Backup(format!(
                "backup would overwrite the log file: {}",
                src.display()
            )));
        }
        ensure_writable(&target, force)?;

        if !compress {
            fs::copy(src, &target)?;
            return Ok(target);
        }

        let zip_path = target;
        compress_backup(src, &zip_path, &entry_name(src, dest)?)?;

        if dest != zip_path && dest.exists() {
            warning(format!(
                "Uncompressed file left untouched: {}",
                dest.display()
            ));
        }
        info(format!("Compressed: {}", zip_path.display()));
        Ok(zip_path)
    }
}

/// Name of the archived file: the destination name, unless that is the archive itself.
fn entry_name(src: &Path, dest: &Path) -> AppResult<String> {
    let from = if dest.extension().is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
        src
    } else {
        dest
    };
    from.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("not a file path: {}", from.display())))
}

/// Write `src` into a new zip archive at `zip_path`; `src` must not be `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path, name: &str) -> AppResult<()> {
    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    Ok(())
}
