use crate::consts::{DATE_SEPARATOR, DAY_WIDTH, MAX_DAY, MIN_DAY, MONTH_WIDTH, YEAR_WIDTH};
use crate::{CalendarDate, DateLabel, Day, ErrorKind, Month, ValidationError, Year};
use std::str::FromStr;

/// Parses a `DD/MM/YYYY` string into a [`CalendarDate`].
///
/// Checks run in a fixed order and stop at the first failure:
/// field count, field widths, digits only, day in `1..=31`, month in `1..=12`,
/// year in `1901..=2999`, and finally the day against the month length
/// (February 29 only in leap years). The `label` is carried into the error so
/// the caller can tell the start and end inputs apart.
///
/// # Errors
/// Returns a [`ValidationError`] whose [`ErrorKind`] says which check failed.
pub fn validate(text: &str, label: DateLabel) -> Result<CalendarDate, ValidationError> {
    parse_date(text).map_err(|kind| ValidationError::new(kind, label))
}

fn parse_date(text: &str) -> Result<CalendarDate, ErrorKind> {
    let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();
    let [dd, mm, yyyy] = parts[..] else {
        return Err(ErrorKind::Format);
    };

    if dd.len() != DAY_WIDTH || mm.len() != MONTH_WIDTH || yyyy.len() != YEAR_WIDTH {
        return Err(ErrorKind::Format);
    }

    let day: u8 = parse_digits(dd)?;
    let month: u8 = parse_digits(mm)?;
    let year: u16 = parse_digits(yyyy)?;

    // Intrinsic day range comes before the month and year checks
    if !(MIN_DAY..=MAX_DAY).contains(&day) {
        return Err(ErrorKind::InvalidDate);
    }
    let month = Month::new(month)?;
    let year = Year::new(year)?;
    let day = Day::new(day, year, month)?;

    Ok(CalendarDate::from_parts(year, month, day))
}

/// Parses a fixed-width field made only of ASCII digits.
fn parse_digits<T: FromStr>(field: &str) -> Result<T, ErrorKind> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::Format);
    }
    field.parse().map_err(|_| ErrorKind::Format)
}
