//! Duration utilities: parsing and formatting study hours.

use crate::errors::{AppError, AppResult};

/// Parse a duration in hours.
///
/// Accepts any decimal number that is finite and not negative.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let trimmed = s.trim();
    let hours: f64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidDuration(format!("'{trimmed}' is not a number")))?;

    if !hours.is_finite() {
        return Err(AppError::InvalidDuration(format!(
            "'{trimmed}' is not a finite number"
        )));
    }
    if hours < 0.0 {
        return Err(AppError::InvalidDuration(format!(
            "'{trimmed}' is negative"
        )));
    }

    Ok(hours)
}

/// Format hours as a plain decimal; whole values keep one decimal place (`2.0`).
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.abs() < 1e15 {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimals_and_trims() {
        assert_eq!(parse_hours("2.5").unwrap(), 2.5);
        assert_eq!(parse_hours(" 3 ").unwrap(), 3.0);
        assert_eq!(parse_hours("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_numeric_negative_and_non_finite() {
        assert!(matches!(parse_hours("two"), Err(AppError::InvalidDuration(_))));
        assert!(matches!(parse_hours("-1"), Err(AppError::InvalidDuration(_))));
        assert!(matches!(parse_hours("NaN"), Err(AppError::InvalidDuration(_))));
        assert!(matches!(parse_hours("inf"), Err(AppError::InvalidDuration(_))));
        assert!(matches!(parse_hours(""), Err(AppError::InvalidDuration(_))));
    }

    #[test]
    fn formats_like_a_decimal() {
        assert_eq!(format_hours(1.0), "1.0");
        assert_eq!(format_hours(2.5), "2.5");
        assert_eq!(format_hours(0.25), "0.25");
    }
}
