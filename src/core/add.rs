use crate::errors::AppResult;
use crate::models::record::StudyRecord;
use crate::store::StudyStore;
use crate::utils::date::resolve_or_today;
use crate::utils::duration::parse_hours;

/// Raw user input for a new study session.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddRequest<'a> {
    /// `None` or blank means today.
    pub date: Option<&'a str>,
    pub subject: &'a str,
    pub duration: &'a str,
    pub description: &'a str,
}

#[derive(Debug)]
pub struct AddOutcome {
    /// 1-based position of the new record.
    pub position: usize,
    pub record: StudyRecord,
    /// Date text that could not be parsed and was replaced by today.
    pub date_fallback: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Parse the request and append it to the store.
    ///
    /// A bad duration aborts before anything is touched. A bad date does not:
    /// today is used and reported through [`AddOutcome::date_fallback`].
    pub fn apply(store: &mut StudyStore, req: AddRequest<'_>) -> AppResult<AddOutcome> {
        let duration = parse_hours(req.duration)?;
        let (date, date_fallback) = resolve_or_today(req.date);

        let record = StudyRecord::new(date, req.subject, duration, req.description);
        let position = store.insert(record.clone())?;

        Ok(AddOutcome {
            position,
            record,
            date_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::utils::date::today;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn adds_with_explicit_date() {
        let dir = TempDir::new().unwrap();
        let mut store = StudyStore::new(dir.path().join("log.csv"));

        let out = AddLogic::apply(
            &mut store,
            AddRequest {
                date: Some("2024-01-01"),
                subject: "Math",
                duration: "2.5",
                description: "algebra",
            },
        )
        .unwrap();

        assert_eq!(out.position, 1);
        assert!(out.date_fallback.is_none());
        assert_eq!(out.record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unparseable_date_falls_back_to_today() {
        let dir = TempDir::new().unwrap();
        let mut store = StudyStore::new(dir.path().join("log.csv"));

        let out = AddLogic::apply(
            &mut store,
            AddRequest {
                date: Some("31/12/2024"),
                subject: "Math",
                duration: "1",
                description: "",
            },
        )
        .unwrap();

        assert_eq!(out.record.date, today());
        assert_eq!(out.date_fallback.as_deref(), Some("31/12/2024"));
    }

    #[test]
    fn non_numeric_duration_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let mut store = StudyStore::new(dir.path().join("log.csv"));
        AddLogic::apply(
            &mut store,
            AddRequest {
                date: Some("2024-01-01"),
                subject: "Math",
                duration: "1",
                description: "",
            },
        )
        .unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = AddLogic::apply(
            &mut store,
            AddRequest {
                date: Some("2024-01-02"),
                subject: "Math",
                duration: "two hours",
                description: "",
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidDuration(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }
}
