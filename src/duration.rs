//! Duration normalization for calculator inputs
//!
//! Every calculator works in fractional years. The (years, months, days)
//! triple normalizes with 12 months per year and 365 days per year; there is
//! no leap-year adjustment.

use serde::{Deserialize, Serialize};

/// A non-negative (years, months, days) duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    pub years: f64,
    pub months: f64,
    pub days: f64,
}

impl Duration {
    /// The zero duration
    pub const ZERO: Duration = Duration {
        years: 0.0,
        months: 0.0,
        days: 0.0,
    };

    /// Create a duration from already-parsed parts
    pub fn new(years: f64, months: f64, days: f64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Parse a duration from raw text fields, blank fields counting as zero.
    ///
    /// Returns `None` when any field fails to parse, is negative or
    /// non-finite, or when all three are zero. `None` means "no duration":
    /// the caller decides whether that is a degenerate zero-time calculation
    /// or an input to reject.
    pub fn parse(years: &str, months: &str, days: &str) -> Option<Self> {
        let years = parse_part(years)?;
        let months = parse_part(months)?;
        let days = parse_part(days)?;
        let duration = Self::new(years, months, days);
        if duration.is_zero() {
            None
        } else {
            Some(duration)
        }
    }

    /// Whether all three parts are zero
    pub fn is_zero(&self) -> bool {
        self.years == 0.0 && self.months == 0.0 && self.days == 0.0
    }

    /// Total duration in fractional years
    pub fn total_years(&self) -> f64 {
        self.years + self.months / 12.0 + self.days / 365.0
    }
}

fn parse_part(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_years_combines_parts() {
        let duration = Duration::new(1.0, 6.0, 0.0);
        assert!((duration.total_years() - 1.5).abs() < 1e-10);

        let days_only = Duration::new(0.0, 0.0, 73.0);
        assert!((days_only.total_years() - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_no_leap_year_adjustment() {
        let one_year_of_days = Duration::new(0.0, 0.0, 365.0);
        assert!((one_year_of_days.total_years() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_blank_fields_are_zero() {
        assert_eq!(
            Duration::parse("2", "", ""),
            Some(Duration::new(2.0, 0.0, 0.0))
        );
        assert_eq!(
            Duration::parse("", " 9 ", ""),
            Some(Duration::new(0.0, 9.0, 0.0))
        );
    }

    #[test]
    fn test_parse_all_blank_is_no_duration() {
        assert_eq!(Duration::parse("", "", ""), None);
        assert_eq!(Duration::parse("0", "0", "0"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Duration::parse("one", "", ""), None);
        assert_eq!(Duration::parse("1", "2x", ""), None);
        assert_eq!(Duration::parse("nan", "", ""), None);
    }

    #[test]
    fn test_parse_rejects_negative_parts() {
        assert_eq!(Duration::parse("-1", "", ""), None);
        assert_eq!(Duration::parse("1", "-6", ""), None);
    }

    #[test]
    fn test_parse_fractional_parts() {
        let duration = Duration::parse("0.5", "3", "0").unwrap();
        assert!((duration.total_years() - 0.75).abs() < 1e-10);
    }
}
