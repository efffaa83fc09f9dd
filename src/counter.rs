use crate::CalendarDate;
use crate::consts::{JDN_EPOCH_OFFSET, JDN_YEAR_OFFSET};
use std::ops::Sub;

/// Continuous day count since 1 January 4713 BC (proleptic Julian calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct JulianDay(i32);

impl From<CalendarDate> for JulianDay {
    fn from(date: CalendarDate) -> Self {
        let day = i32::from(date.day());
        let month = i32::from(date.month());
        let year = i32::from(date.year());

        // Count from March so February's variable length lands at the end of the year
        let a = (14 - month) / 12;
        let y = year + JDN_YEAR_OFFSET - a;
        let m = month + 12 * a - 3;

        Self(day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - JDN_EPOCH_OFFSET)
    }
}

impl Sub for JulianDay {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.0 - rhs.0
    }
}

/// Number of whole days strictly between `start` and `end`.
///
/// Order does not matter. Adjacent days give `0`; the same date given twice
/// gives `-1`, since neither endpoint is counted.
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i32 {
    let interval = (JulianDay::from(end) - JulianDay::from(start)).abs();
    interval - 1
}
