use serde::Serialize;

use crate::{CalendarDate, DateLabel, ValidationError, days_between, prelude::*, validate};

/// A start and end date to count between.
/// Unlike a calendar interval, the two ends may come in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start} - {end}")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

/// The outcome of one computation, as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Elapsed {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: i32,
}

impl DateRange {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Validates both raw inputs, start first.
    ///
    /// # Errors
    /// Returns the first `ValidationError`, labelled `Start` or `End`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        let start = validate(start, DateLabel::Start)?;
        let end = validate(end, DateLabel::End)?;
        Ok(Self::new(start, end))
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Whole days strictly between the two ends. See [`days_between`].
    pub fn days_between(&self) -> i32 {
        days_between(self.start, self.end)
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed {
            start: self.start,
            end: self.end,
            days: self.days_between(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::test_utils::date;

    #[test]
    fn test_parse_and_count() {
        let range = DateRange::parse("02/06/1983", "22/06/1983").unwrap();
        assert_eq!(range.start(), date(2, 6, 1983));
        assert_eq!(range.end(), date(22, 6, 1983));
        assert_eq!(range.days_between(), 19);
    }

    #[test]
    fn test_reversed_order_is_kept() {
        let range = DateRange::parse("03/01/1989", "03/08/1983").unwrap();
        assert!(range.start() > range.end());
        assert_eq!(range.days_between(), 1979);
    }

    #[test]
    fn test_parse_reports_start_first() {
        let err = DateRange::parse("12-02/2000", "14/02-2000").unwrap_err();
        assert_eq!(err, ValidationError::new(ErrorKind::Format, DateLabel::Start));
    }

    #[test]
    fn test_parse_reports_end() {
        let err = DateRange::parse("29/02/2000", "29/02/2001").unwrap_err();
        assert_eq!(err, ValidationError::new(ErrorKind::InvalidDate, DateLabel::End));
        assert_eq!(err.to_string(), "End Date is not a valid date");
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(12, 2, 2000), date(14, 2, 2000));
        assert_eq!(range.to_string(), "12/02/2000 - 14/02/2000");
    }

    #[test]
    fn test_elapsed_serde() {
        let range = DateRange::new(date(12, 2, 2000), date(14, 2, 2000));
        let json = serde_json::to_string(&range.elapsed()).unwrap();
        assert_eq!(json, r#"{"start":"12/02/2000","end":"14/02/2000","days":1}"#);
    }
}
