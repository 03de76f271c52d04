use crate::error::{RentalError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Long-form pattern used for due dates, e.g. `November 10, 2020`.
pub const DEFAULT_DATE_PATTERN: &str = "%B %-d, %Y";

/// A validated `strftime` pattern for rendering due dates.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RentalError::InvalidConfig(
                "date format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(RentalError::InvalidConfig(format!(
                "invalid date format {pattern:?}"
            )));
        }
        Ok(Self(pattern))
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    pub fn render(&self, date: NaiveDate) -> Result<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", date.format(&self.0)).map_err(|_| {
            RentalError::InvalidConfig(format!("date format {:?} cannot render {date}", self.0))
        })?;
        Ok(rendered)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_PATTERN.to_string())
    }
}

impl TryFrom<String> for DateFormat {
    type Error = RentalError;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.0
    }
}

/// The date a rental starting on `start` and lasting `days` must be returned.
pub fn due_date(start: NaiveDate, days: u64) -> Result<NaiveDate> {
    start.checked_add_days(Days::new(days)).ok_or_else(|| {
        RentalError::InvalidArgument(format!("{days} days from {start} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_long_form() {
        let format = DateFormat::default();
        assert_eq!(format.render(date(2020, 11, 5)).unwrap(), "November 5, 2020");
    }

    #[test]
    fn test_due_date_crosses_month_and_year() {
        assert_eq!(due_date(date(2020, 11, 5), 5).unwrap(), date(2020, 11, 10));
        assert_eq!(due_date(date(2020, 12, 30), 3).unwrap(), date(2021, 1, 2));
        assert_eq!(due_date(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_due_date_overflow() {
        assert!(matches!(
            due_date(NaiveDate::MAX, 1),
            Err(RentalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_custom_pattern() {
        let format = DateFormat::new("%Y-%m-%d").unwrap();
        assert_eq!(format.render(date(2020, 11, 5)).unwrap(), "2020-11-05");
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        assert!(matches!(
            DateFormat::new("%Q"),
            Err(RentalError::InvalidConfig(_))
        ));
        assert!(DateFormat::new("").is_err());
    }
}
