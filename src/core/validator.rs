//! Gregorian validity checks. Months are zero-based throughout the crate.

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Length of `month` (0 = January) in `year`. Out-of-range months have no days.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        0..=11 => DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}

pub fn is_valid_date(day: i64, month: i64, year: i64) -> bool {
    if year < 1 || !(0..=11).contains(&month) || day < 1 {
        return false;
    }
    day <= i64::from(days_in_month(year, month as u32))
}
