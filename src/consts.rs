/// Earliest accepted year (inclusive)
pub const MIN_YEAR: u16 = 1901;
/// Latest accepted year (inclusive)
pub const MAX_YEAR: u16 = 2999;

/// First month of the year (January)
pub const MIN_MONTH: u8 = 1;
/// Last month of the year (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Longest month length, the intrinsic upper bound for a day field
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between the day, month and year fields of `DD/MM/YYYY`
pub const DATE_SEPARATOR: char = '/';

/// Exact width of the day field (leading zero required)
pub const DAY_WIDTH: usize = 2;
/// Exact width of the month field (leading zero required)
pub const MONTH_WIDTH: usize = 2;
/// Exact width of the year field
pub const YEAR_WIDTH: usize = 4;

/// Years added so the March-based count starts in 4801 BC
pub(crate) const JDN_YEAR_OFFSET: i32 = 4800;
/// Shifts the day count so that JDN 0 is 1 January 4713 BC (Julian calendar)
pub(crate) const JDN_EPOCH_OFFSET: i32 = 32045;

/// Longest input line the shell keeps; anything past it is discarded
pub(crate) const MAX_LINE_BYTES: u64 = 64;

pub(crate) const RULE: &str = "---------------------------------------------------------";
pub(crate) const RESULT_RULE: &str = "========================";
pub(crate) const PROMPT: &str = "-> ";
pub(crate) const BANNER: [&str; 4] = [
    "Please enter experiment dates to get the days elapsed.",
    "To proceed please input valid start and end dates",
    "beginning with the start date, followed by the end date",
    "between 01/01/1901 and 31/12/2999 in a DD/MM/YYYY format",
];
