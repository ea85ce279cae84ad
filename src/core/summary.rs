//! Aggregations over the current collection.

use crate::models::record::StudyRecord;
use crate::models::summary::SubjectSummary;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Total hours per day, ascending by date. Days without records are absent.
pub fn by_date(records: &[StudyRecord]) -> BTreeMap<NaiveDate, f64> {
    let mut out = BTreeMap::new();
    for r in records {
        *out.entry(r.date).or_insert(0.0) += r.duration;
    }
    out
}

/// Total hours and distinct days per subject, ascending by subject.
///
/// Subjects are compared exactly, so `Math` and `math` are two entries.
pub fn by_subject(records: &[StudyRecord]) -> BTreeMap<String, SubjectSummary> {
    let mut out: BTreeMap<String, SubjectSummary> = BTreeMap::new();
    for r in records {
        let entry = out.entry(r.subject.clone()).or_default();
        entry.total_duration += r.duration;
        entry.dates.insert(r.date);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(date: NaiveDate, subject: &str, hours: f64) -> StudyRecord {
        StudyRecord::new(date, subject, hours, "")
    }

    #[test]
    fn two_math_sessions_on_one_day() {
        let records = vec![
            StudyRecord::new(d(2024, 1, 1), "Math", 2.5, "algebra"),
            StudyRecord::new(d(2024, 1, 1), "Math", 1.0, "geometry"),
        ];

        let dates = by_date(&records);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[&d(2024, 1, 1)], 3.5);

        let subjects = by_subject(&records);
        assert_eq!(subjects.len(), 1);
        let math = &subjects["Math"];
        assert_eq!(math.total_duration, 3.5);
        assert_eq!(math.dates.iter().copied().collect::<Vec<_>>(), vec![d(2024, 1, 1)]);
    }

    #[test]
    fn by_date_is_sorted_and_sparse() {
        let records = vec![
            rec(d(2024, 3, 1), "A", 1.0),
            rec(d(2024, 1, 1), "B", 2.0),
            rec(d(2024, 3, 1), "C", 0.5),
        ];

        let dates: Vec<_> = by_date(&records).into_iter().collect();
        assert_eq!(dates, vec![(d(2024, 1, 1), 2.0), (d(2024, 3, 1), 1.5)]);
    }

    #[test]
    fn by_subject_is_case_sensitive_with_distinct_sorted_dates() {
        let records = vec![
            rec(d(2024, 2, 2), "math", 1.0),
            rec(d(2024, 2, 3), "Math", 1.0),
            rec(d(2024, 2, 1), "Math", 2.0),
            rec(d(2024, 2, 3), "Math", 0.5),
        ];

        let subjects = by_subject(&records);
        let keys: Vec<_> = subjects.keys().cloned().collect();
        assert_eq!(keys, vec!["Math".to_string(), "math".to_string()]);

        let math = &subjects["Math"];
        assert_eq!(math.total_duration, 3.5);
        assert_eq!(
            math.dates.iter().copied().collect::<Vec<_>>(),
            vec![d(2024, 2, 1), d(2024, 2, 3)]
        );
        assert_eq!(subjects["math"].total_duration, 1.0);
    }

    #[test]
    fn empty_collection_gives_empty_summaries() {
        assert!(by_date(&[]).is_empty());
        assert!(by_subject(&[]).is_empty());
    }
}
