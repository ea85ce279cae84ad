use crate::errors::{AppError, AppResult};
use crate::store::{RecordPatch, StudyStore};
use crate::utils::duration::parse_hours;

/// Raw replacement values; `None` or blank keeps the current value.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditRequest<'a> {
    pub subject: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub description: Option<&'a str>,
}

#[derive(Debug)]
pub struct EditOutcome {
    pub changed: bool,
    /// Set when the duration was given but did not parse; that field was kept.
    pub rejected_duration: Option<AppError>,
}

pub struct EditLogic;

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

impl EditLogic {
    /// Update the record at `position` (1-based).
    ///
    /// A bad duration only skips that field; the other fields still apply.
    pub fn apply(
        store: &mut StudyStore,
        position: usize,
        req: EditRequest<'_>,
    ) -> AppResult<EditOutcome> {
        // fail on the position before looking at any field
        store.get(position)?;

        let mut rejected_duration = None;
        let duration = match non_blank(req.duration).map(parse_hours) {
            Some(Ok(h)) => Some(h),
            Some(Err(e)) => {
                rejected_duration = Some(e);
                None
            }
            None => None,
        };

        let patch = RecordPatch {
            subject: non_blank(req.subject).map(str::to_string),
            duration,
            description: non_blank(req.description).map(str::to_string),
        };

        let changed = store.edit(position, patch)?;
        Ok(EditOutcome {
            changed,
            rejected_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::StudyRecord;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn seeded(dir: &TempDir) -> StudyStore {
        let mut s = StudyStore::new(dir.path().join("log.csv"));
        s.insert(StudyRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Math",
            2.5,
            "algebra",
        ))
        .unwrap();
        s
    }

    #[test]
    fn bad_duration_skips_only_that_field() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded(&dir);

        let out = EditLogic::apply(
            &mut store,
            1,
            EditRequest {
                subject: Some("Calculus"),
                duration: Some("lots"),
                description: None,
            },
        )
        .unwrap();

        assert!(out.changed);
        assert!(matches!(
            out.rejected_duration,
            Some(AppError::InvalidDuration(_))
        ));
        let r = store.get(1).unwrap();
        assert_eq!(r.subject, "Calculus");
        assert_eq!(r.duration, 2.5);
        assert_eq!(r.description, "algebra");
    }

    #[test]
    fn blank_fields_keep_current_values() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded(&dir);

        let out = EditLogic::apply(
            &mut store,
            1,
            EditRequest {
                subject: Some("   "),
                duration: Some(""),
                description: None,
            },
        )
        .unwrap();

        assert!(!out.changed);
        assert!(out.rejected_duration.is_none());
        assert_eq!(store.get(1).unwrap().subject, "Math");
    }

    #[test]
    fn position_is_checked_first() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded(&dir);

        let err = EditLogic::apply(
            &mut store,
            2,
            EditRequest {
                duration: Some("bad"),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidIndex { position: 2, len: 1 }));
    }

    #[test]
    fn edit_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = seeded(&dir);

        EditLogic::apply(
            &mut store,
            1,
            EditRequest {
                duration: Some("4"),
                description: Some("limits, series"),
                ..Default::default()
            },
        )
        .unwrap();

        let mut reloaded = StudyStore::new(store.path());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(1).unwrap().duration, 4.0);
        assert_eq!(reloaded.get(1).unwrap().description, "limits, series");
    }
}
