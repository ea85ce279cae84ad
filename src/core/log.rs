//! Activity log: one tab-separated line per operation that changed something.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const MAX_TARGET_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(4, '\t');
        Some(Self {
            date: parts.next()?.to_string(),
            operation: parts.next()?.to_string(),
            target: parts.next()?.to_string(),
            message: parts.next().unwrap_or("").to_string(),
        })
    }
}

fn clean(s: &str) -> String {
    s.replace(['\t', '\r', '\n'], " ")
}

/// Append an entry to the log at `path`, creating parent directories.
pub fn append(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{}\t{}\t{}\t{}",
        Local::now().to_rfc3339(),
        clean(operation),
        clean(target),
        clean(message)
    )?;
    Ok(())
}

/// Record an operation; a failure to write is only a warning.
pub fn ttlog(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = append(&cfg.activity_log_path(), operation, target, message) {
        warning(format!("Failed to write activity log: {e}"));
    }
}

/// Read all entries; a missing file reads as empty. Malformed lines are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(LogEntry::parse).collect())
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = read_entries(&cfg.activity_log_path())?;
        if entries.is_empty() {
            info("Activity log is empty.");
            return Ok(());
        }

        let targets: Vec<String> = entries
            .iter()
            .map(|e| truncate(&e.target, MAX_TARGET_WIDTH))
            .collect();
        let op_w = entries.iter().map(|e| e.operation.len()).max().unwrap_or(0);
        let target_w = targets.iter().map(|t| t.chars().count()).max().unwrap_or(0);
        let id_w = entries.len().to_string().len();

        println!("📜 Activity log:\n");

        for (i, (entry, target)) in entries.iter().zip(&targets).enumerate() {
            // pad before painting so ANSI codes do not skew the width
            let op = format!("{:<op_w$}", entry.operation);
            println!(
                "{:>id_w$}: {} | {} {:<target_w$} => {}",
                i + 1,
                entry.date,
                color_for_operation(&entry.operation).paint(op),
                target,
                entry.message,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("activity.log");

        append(&path, "add", "#1", "Math\t2.5 hrs").unwrap();
        append(&path, "del", "#1", "removed").unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "add");
        assert_eq!(entries[0].message, "Math 2.5 hrs");
        assert_eq!(entries[1].operation, "del");
    }

    #[test]
    fn missing_log_reads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_entries(&dir.path().join("none.log")).unwrap().is_empty());
    }

    #[test]
    fn long_targets_are_truncated() {
        let t = truncate(&"x".repeat(50), 10);
        assert_eq!(t, "xxxxxxx...");
        assert_eq!(truncate("short", 10), "short");
    }
}
