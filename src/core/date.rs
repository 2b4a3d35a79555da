use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::core::validator;
use crate::error::DateError;

pub const MIN_YEAR: i32 = 1;
/// Largest year the four-digit display mask can carry.
pub const MAX_YEAR: i32 = 9999;

/// A date-only value on the proleptic Gregorian calendar.
///
/// Fields are private so a `CalendarDate` can only come from
/// [`CalendarDate::new`] or a chrono date, and is therefore always real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    year: i32,
    /// Zero-based: 0 = January.
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !validator::is_valid_date(i64::from(day), i64::from(month), i64::from(year)) {
            return Err(DateError::Impossible {
                day: i64::from(day),
                month: i64::from(month) + 1,
                year: i64::from(year),
            });
        }
        if year > MAX_YEAR {
            return Err(year_out_of_range(i64::from(year)));
        }

        // Round-trip through chrono and insist nothing was normalized away.
        let expected = format!("{year:04}-{:02}-{day:02}", month + 1);
        let naive = NaiveDate::from_ymd_opt(year, month + 1, day).ok_or_else(|| {
            DateError::CalendarMismatch {
                expected: expected.clone(),
                actual: "<out of range>".to_string(),
            }
        })?;
        let date = Self::from_naive(naive);
        if date.year != year || date.month != month || date.day != day {
            return Err(DateError::CalendarMismatch {
                expected,
                actual: naive.to_string(),
            });
        }
        Ok(date)
    }

    /// Accept a chrono date only if it is inside the supported year range.
    pub(crate) fn try_from_naive(date: NaiveDate) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(year_out_of_range(i64::from(date.year())));
        }
        Self::new(date.year(), date.month0(), date.day())
    }

    /// Unchecked; only for dates derived from an already valid one.
    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    pub(crate) fn to_naive(self) -> NaiveDate {
        // Every constructor validated the triple, so chrono accepts it.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day).unwrap_or(NaiveDate::MIN)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Monday = 0 … Sunday = 6.
    pub fn weekday(self) -> u32 {
        self.to_naive().weekday().num_days_from_monday()
    }

    pub fn add_days(self, delta: i64) -> Self {
        let naive = self.to_naive();
        let shifted = if delta >= 0 {
            naive.checked_add_days(Days::new(delta.unsigned_abs()))
        } else {
            naive.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        shifted.map(Self::from_naive).unwrap_or(self)
    }

    pub fn cursor(self) -> MonthCursor {
        MonthCursor {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

fn year_out_of_range(year: i64) -> DateError {
    DateError::YearOutOfRange {
        year,
        min: MIN_YEAR,
        max: MAX_YEAR,
    }
}

/// Today's date in the local calendar. Only used to seed an empty picker.
pub fn today() -> CalendarDate {
    CalendarDate::from_naive(chrono::Local::now().date_naive())
}

/// The (year, month) rendered by the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    /// Zero-based: 0 = January.
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        let total = i64::from(year) * 12 + i64::from(month);
        Self::from_total(total)
    }

    /// Normalizes overflowing months and stays within January of
    /// [`MIN_YEAR`] and December of [`MAX_YEAR`].
    fn from_total(total: i64) -> Self {
        let lowest = i64::from(MIN_YEAR) * 12;
        let highest = i64::from(MAX_YEAR) * 12 + 11;
        let total = total.clamp(lowest, highest);
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    /// Move by `delta` months, carrying into the year. Navigation stops at
    /// the ends of the supported range.
    pub fn shifted(self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        Self::from_total(total)
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    pub fn days(self) -> u32 {
        validator::days_in_month(i64::from(self.year), self.month)
    }

    pub fn first_day(self) -> Result<CalendarDate, DateError> {
        CalendarDate::new(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Result<CalendarDate, DateError> {
        CalendarDate::new(self.year, self.month, self.days())
    }

    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
