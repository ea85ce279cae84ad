use crate::utils::duration::format_hours;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single study session.
///
/// Records carry no id: a record is addressed by its 1-based position in
/// the store at the time of the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyRecord {
    pub date: NaiveDate,
    pub subject: String,
    /// Hours spent, never negative.
    pub duration: f64,
    pub description: String,
}

impl StudyRecord {
    pub fn new(
        date: NaiveDate,
        subject: impl Into<String>,
        duration: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            subject: subject.into(),
            duration,
            description: description.into(),
        }
    }
}

impl fmt::Display for StudyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} hrs | {}",
            self.date.format("%Y-%m-%d"),
            self.subject,
            format_hours(self.duration),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_iso_date_and_hours_suffix() {
        let r = StudyRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Math",
            2.5,
            "algebra",
        );
        assert_eq!(r.to_string(), "2024-01-01 | Math | 2.5 hrs | algebra");
    }

    #[test]
    fn display_keeps_one_decimal_for_whole_hours() {
        let r = StudyRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            "Physics",
            1.0,
            "",
        );
        assert_eq!(r.to_string(), "2024-03-09 | Physics | 1.0 hrs | ");
    }
}
