//! In-memory study log backed by a flat file.
//!
//! The whole collection is rewritten on every mutation. A mutation whose save
//! fails is undone, so memory never runs ahead of the file.

pub mod codec;

use crate::errors::{AppError, AppResult};
use crate::models::record::StudyRecord;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Field replacements for [`StudyStore::edit`]; `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordPatch {
    pub subject: Option<String>,
    pub duration: Option<f64>,
    pub description: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.duration.is_none() && self.description.is_none()
    }
}

#[derive(Debug)]
pub struct StudyStore {
    path: PathBuf,
    records: Vec<StudyRecord>,
}

impl StudyStore {
    /// Create an empty store bound to `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the collection with the file contents.
    ///
    /// A missing file leaves the store empty. On a corrupt row the rows read
    /// before it are kept and the error is returned.
    pub fn load(&mut self) -> AppResult<usize> {
        self.records.clear();

        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        codec::read_records(BufReader::new(file), &mut self.records)?;
        Ok(self.records.len())
    }

    /// Rewrite the file from the current collection.
    pub fn save(&self) -> AppResult<()> {
        write_atomic(&self.path, &self.records)
    }

    pub fn list(&self) -> &[StudyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a 1-based position.
    pub fn get(&self, position: usize) -> AppResult<&StudyRecord> {
        let idx = self.index_of(position)?;
        Ok(&self.records[idx])
    }

    /// Append a record and save. Returns its 1-based position.
    pub fn insert(&mut self, record: StudyRecord) -> AppResult<usize> {
        check_duration(record.duration)?;

        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(self.records.len())
    }

    /// Apply `patch` to the record at `position` and save.
    ///
    /// Returns `false` (and writes nothing) when the patch is empty.
    pub fn edit(&mut self, position: usize, patch: RecordPatch) -> AppResult<bool> {
        let idx = self.index_of(position)?;
        if let Some(d) = patch.duration {
            check_duration(d)?;
        }
        if patch.is_empty() {
            return Ok(false);
        }

        let previous = self.records[idx].clone();
        let rec = &mut self.records[idx];
        if let Some(s) = patch.subject {
            rec.subject = s;
        }
        if let Some(d) = patch.duration {
            rec.duration = d;
        }
        if let Some(s) = patch.description {
            rec.description = s;
        }

        if let Err(e) = self.save() {
            self.records[idx] = previous;
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the record at `position` and save. Later positions shift down by one.
    pub fn delete(&mut self, position: usize) -> AppResult<StudyRecord> {
        let idx = self.index_of(position)?;

        let removed = self.records.remove(idx);
        if let Err(e) = self.save() {
            self.records.insert(idx, removed);
            return Err(e);
        }
        Ok(removed)
    }

    fn index_of(&self, position: usize) -> AppResult<usize> {
        if position == 0 || position > self.records.len() {
            return Err(AppError::InvalidIndex {
                position,
                len: self.records.len(),
            });
        }
        Ok(position - 1)
    }
}

fn check_duration(hours: f64) -> AppResult<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidDuration(format!(
            "{hours} is not a valid number of hours"
        )));
    }
    Ok(())
}

/// Write `records` to a sibling temp file, then rename it over `path`.
pub(crate) fn write_atomic(path: &Path, records: &[StudyRecord]) -> AppResult<()> {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = File::create(&tmp)
        .map_err(AppError::from)
        .and_then(|f| {
            let mut w = BufWriter::new(f);
            codec::write_records(&mut w, records)?;
            w.flush()?;
            Ok(())
        })
        .and_then(|_| fs::rename(&tmp, path).map_err(AppError::from));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
