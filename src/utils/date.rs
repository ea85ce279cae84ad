use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve user-supplied date input.
///
/// Blank or missing input means today. Input that does not parse also falls
/// back to today, and the rejected text is returned so the caller can warn.
pub fn resolve_or_today(input: Option<&str>) -> (NaiveDate, Option<String>) {
    match input.map(str::trim) {
        None | Some("") => (today(), None),
        Some(s) => match parse_date(s) {
            Some(d) => (d, None),
            None => (today(), Some(s.to_string())),
        },
    }
}
