use crate::ErrorKind;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the supported window `MIN_YEAR..=MAX_YEAR` (1901..=2999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies inside the supported window
    ///
    /// # Errors
    /// Returns `ErrorKind::OutOfRange` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ErrorKind> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ErrorKind::OutOfRange);
        }
        NonZeroU16::new(value).map(Self).ok_or(ErrorKind::OutOfRange)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ErrorKind::InvalidDate` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ErrorKind> {
        if !(MIN_MONTH..=MAX_MONTH).contains(&value) {
            return Err(ErrorKind::InvalidDate);
        }
        NonZeroU8::new(value).map(Self).ok_or(ErrorKind::InvalidDate)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the month it belongs to
    ///
    /// # Errors
    /// Returns `ErrorKind::InvalidDate` if the value is 0 or past the last day of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ErrorKind> {
        if value < MIN_DAY || value > days_in_month(year.get(), month.get()) {
            return Err(ErrorKind::InvalidDate);
        }
        NonZeroU8::new(value).map(Self).ok_or(ErrorKind::InvalidDate)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

// Helper functions

/// Gregorian rule: every fourth year, except centuries not divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
