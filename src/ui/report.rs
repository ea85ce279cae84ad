//! Text rendering of the collection and its summaries.

use crate::models::record::StudyRecord;
use crate::models::summary::SubjectSummary;
use crate::utils::format_hours;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Numbered table of all records; positions are 1-based.
pub fn records_table(records: &[StudyRecord], sep: char) -> String {
    let mut t = Table::new(vec![
        Column::new("#"),
        Column::new("Date"),
        Column::new("Subject"),
        Column::new("Duration"),
        Column::new("Description"),
    ])
    .with_separator(sep);

    for (i, r) in records.iter().enumerate() {
        t.add_row(vec![
            (i + 1).to_string(),
            r.date.format("%Y-%m-%d").to_string(),
            r.subject.clone(),
            format!("{} hrs", format_hours(r.duration)),
            r.description.clone(),
        ]);
    }
    t.render()
}

pub fn by_date_table(totals: &BTreeMap<NaiveDate, f64>, sep: char) -> String {
    let mut t = Table::new(vec![Column::new("Date"), Column::new("Total hours")])
        .with_separator(sep);
    for (date, hours) in totals {
        t.add_row(vec![date.format("%Y-%m-%d").to_string(), format!("{hours:.2}")]);
    }
    t.render()
}

pub fn by_subject_table(totals: &BTreeMap<String, SubjectSummary>, sep: char) -> String {
    let mut t = Table::new(vec![
        Column::new("Subject"),
        Column::new("Total hours"),
        Column::new("Studied on"),
    ])
    .with_separator(sep);
    for (subject, s) in totals {
        let dates: Vec<String> = s.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        t.add_row(vec![
            subject.clone(),
            format!("{:.2}", s.total_duration),
            dates.join(", "),
        ]);
    }
    t.render()
}
