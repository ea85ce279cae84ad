use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Totals for one subject: hours studied and the distinct days it was studied on.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubjectSummary {
    pub total_duration: f64,
    pub dates: BTreeSet<NaiveDate>,
}
