//! Count the whole days strictly between two `DD/MM/YYYY` calendar dates.
//!
//! Dates are validated into a [`CalendarDate`] by [`validate`], then handed to
//! [`days_between`], which works on Julian Day Numbers so that month lengths and
//! leap years fall out of plain integer arithmetic.
//!
//! ```
//! use elapsed_days::{DateLabel, days_between, validate};
//!
//! let start = validate("04/07/1984", DateLabel::Start)?;
//! let end = validate("25/12/1984", DateLabel::End)?;
//! assert_eq!(days_between(start, end), 173);
//! # Ok::<(), elapsed_days::ValidationError>(())
//! ```

mod consts;
mod counter;
mod prelude;
mod range;
pub mod shell;
#[cfg(test)]
mod test_utils;
mod types;
mod validator;

pub use consts::*;
pub use counter::days_between;
pub use range::{DateRange, Elapsed};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validator::validate;

use crate::prelude::*;

/// A real Gregorian date inside the supported window (01/01/1901 to 31/12/2999).
///
/// Only produced by [`validate`] or by stepping an existing date with
/// [`CalendarDate::next_day`], so the day always fits its month and year.
/// Field order gives chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}/{}", day, month, year)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Which of the two inputs a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateLabel {
    #[display(fmt = "Start")]
    Start,
    #[display(fmt = "End")]
    End,
}

/// The three ways a raw date can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Not `DD/MM/YYYY`: wrong field count, wrong width or non-digit characters
    #[display(fmt = "Date format is incorrect")]
    Format,
    /// Well formed, but no such day exists
    #[display(fmt = "Date is not a valid date")]
    InvalidDate,
    /// A real date outside `MIN_YEAR..=MAX_YEAR`
    #[display(fmt = "Date is not within acceptable range")]
    OutOfRange,
}

/// A rejected input, tagged with its kind and the input it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{label} {kind}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub label: DateLabel,
}

impl ValidationError {
    pub const fn new(kind: ErrorKind, label: DateLabel) -> Self {
        Self { kind, label }
    }
}

impl CalendarDate {
    /// Assembles a date from fields that are already validated against each other.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the day of the month (1-31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year (1901-2999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// The following calendar day, or `None` past 31/12/2999.
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        let (year, month, day) = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else {
            (year.checked_add(1)?, JANUARY, MIN_DAY)
        };

        let year = Year::new(year).ok()?;
        let month = Month::new(month).ok()?;
        let day = Day::new(day, year, month).ok()?;
        Some(Self::from_parts(year, month, day))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_accessors() {
        let d = date(15, 8, 1991);
        assert_eq!(d.day(), 15);
        assert_eq!(d.month(), 8);
        assert_eq!(d.year(), 1991);
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(date(2, 6, 1983).to_string(), "02/06/1983");
        assert_eq!(date(31, 12, 2999).to_string(), "31/12/2999");
    }

    #[test]
    fn test_ordering_is_chronological() {
        // Day-first text order would put these the other way round
        assert!(date(31, 1, 1990) < date(1, 2, 1990));
        assert!(date(31, 12, 1989) < date(1, 1, 1990));
        assert_eq!(date(4, 7, 1984), date(4, 7, 1984));
    }

    #[test]
    fn test_next_day_rollover() {
        struct TestCase {
            from: CalendarDate,
            to: CalendarDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from: date(14, 2, 2000),
                to: date(15, 2, 2000),
                description: "mid month",
            },
            TestCase {
                from: date(30, 4, 2001),
                to: date(1, 5, 2001),
                description: "end of 30 day month",
            },
            TestCase {
                from: date(28, 2, 2000),
                to: date(29, 2, 2000),
                description: "leap February",
            },
            TestCase {
                from: date(28, 2, 2100),
                to: date(1, 3, 2100),
                description: "century February",
            },
            TestCase {
                from: date(31, 12, 1999),
                to: date(1, 1, 2000),
                description: "year end",
            },
        ];

        for case in &cases {
            assert_eq!(case.from.next_day(), Some(case.to), "{}", case.description);
        }
    }

    #[test]
    fn test_next_day_at_upper_limit() {
        assert_eq!(date(31, 12, MAX_YEAR).next_day(), None);
    }

    #[test]
    fn test_error_messages() {
        struct TestCase {
            kind: ErrorKind,
            label: DateLabel,
            message: &'static str,
        }

        let cases = [
            TestCase {
                kind: ErrorKind::Format,
                label: DateLabel::Start,
                message: "Start Date format is incorrect",
            },
            TestCase {
                kind: ErrorKind::InvalidDate,
                label: DateLabel::End,
                message: "End Date is not a valid date",
            },
            TestCase {
                kind: ErrorKind::OutOfRange,
                label: DateLabel::Start,
                message: "Start Date is not within acceptable range",
            },
        ];

        for case in &cases {
            assert_eq!(
                ValidationError::new(case.kind, case.label).to_string(),
                case.message
            );
        }
    }

    #[test]
    fn test_serialize_as_text() {
        let json = serde_json::to_string(&date(12, 2, 2000)).unwrap();
        assert_eq!(json, r#""12/02/2000""#);
    }
}
