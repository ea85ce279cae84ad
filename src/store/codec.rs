//! Row format of the log file.
//!
//! ```text
//! Date,Subject,Duration,Description
//! 2024-01-01,Math,2.5,algebra; chapter 3
//! ```
//!
//! Commas inside subject and description are written as `;` and turned back
//! into `,` on read. A literal `;` typed by the user therefore reads back as
//! `,`: the format cannot tell them apart.

use crate::errors::{AppError, AppResult};
use crate::models::record::StudyRecord;
use crate::utils::date::parse_date;
use crate::utils::duration::{format_hours, parse_hours};
use csv::{QuoteStyle, WriterBuilder};
use std::io::{BufRead, ErrorKind, Write};

pub const HEADER: [&str; 4] = ["Date", "Subject", "Duration", "Description"];

/// Replace commas with `;` and flatten line breaks so a field stays on one row.
pub fn escape_field(s: &str) -> String {
    s.replace(',', ";").replace(['\r', '\n'], " ")
}

pub fn unescape_field(s: &str) -> String {
    s.replace(';', ",")
}

/// Parse one data row. `line_no` is 1-based and only used for error reporting.
pub fn parse_row(line: &str, line_no: usize) -> AppResult<StudyRecord> {
    let corrupt = |reason: String| AppError::CorruptFile {
        line: line_no,
        reason,
    };

    // only the first three commas separate fields
    let fields: Vec<&str> = line.splitn(4, ',').collect();
    if fields.len() != 4 {
        return Err(corrupt(format!("expected 4 fields, found {}", fields.len())));
    }

    let date = parse_date(fields[0])
        .ok_or_else(|| corrupt(AppError::InvalidDate(fields[0].to_string()).to_string()))?;
    let duration = parse_hours(fields[2]).map_err(|e| corrupt(e.to_string()))?;

    Ok(StudyRecord::new(
        date,
        unescape_field(fields[1]),
        duration,
        unescape_field(fields[3]),
    ))
}

/// Read every row after the header into `out`.
///
/// Blank lines are skipped. Reading stops at the first bad row; rows parsed
/// before it stay in `out`. A row that is not valid UTF-8 is a bad row too.
pub fn read_records<R: BufRead>(reader: R, out: &mut Vec<StudyRecord>) -> AppResult<()> {
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = match line {
            Ok(l) => l,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(AppError::CorruptFile {
                    line: idx + 1,
                    reason: "invalid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        out.push(parse_row(&line, idx + 1)?);
    }
    Ok(())
}

/// Write the header and one row per record.
pub fn write_records<W: Write>(writer: W, records: &[StudyRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    for r in records {
        wtr.write_record(&[
            r.date.format("%Y-%m-%d").to_string(),
            escape_field(&r.subject),
            format_hours(r.duration),
            escape_field(&r.description),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
