//! Builders for already-valid values, shared by the unit tests.

use crate::{CalendarDate, DateLabel, Day, Month, Year, validate};

pub fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn date(day: u8, month_value: u8, year_value: u16) -> CalendarDate {
    let y = year(year_value);
    let m = month(month_value);
    CalendarDate::from_parts(y, m, Day::new(day, y, m).unwrap())
}

pub fn parse(text: &str) -> CalendarDate {
    validate(text, DateLabel::Start).unwrap()
}
