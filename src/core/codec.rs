//! Conversions between [`CalendarDate`] and its two text forms.
//!
//! - display: `DD/MM/YYYY`, what the user edits
//! - storage: `YYYY-MM-DD`, what the observer and hidden field receive

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::core::date::CalendarDate;
use crate::core::validator;
use crate::error::DateError;

static ISO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?\d{4,6})-(\d{1,2})-(\d{1,2})(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?$",
    )
    .expect("static regex")
});

static ISO_REDUCED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:-(\d{1,2}))?$").expect("static regex"));

/// Free-form layouts accepted for initial values, tried in order.
const GENERIC_FORMATS: [&str; 8] = [
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%a %b %d %Y",
];

pub fn to_display(date: CalendarDate) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        date.month() + 1,
        date.year()
    )
}

pub fn to_storage(date: CalendarDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() + 1,
        date.day()
    )
}

/// Parse a complete `DD/MM/YYYY` string.
pub fn parse(display: &str) -> Result<CalendarDate, DateError> {
    let parts: Vec<&str> = display.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(DateError::SegmentCount { count: parts.len() });
    };

    let day = parse_segment(day)?;
    let month = parse_segment(month)? - 1;
    let year = parse_segment(year)?;

    if !validator::is_valid_date(day, month, year) {
        tracing::trace!(day, month, year, "rejected impossible date");
        return Err(DateError::Impossible {
            day,
            month: month + 1,
            year,
        });
    }

    let impossible = || DateError::Impossible {
        day,
        month: month + 1,
        year,
    };
    let year = i32::try_from(year).map_err(|_| impossible())?;
    let month = u32::try_from(month).map_err(|_| impossible())?;
    let day = u32::try_from(day).map_err(|_| impossible())?;
    CalendarDate::new(year, month, day)
}

fn parse_segment(segment: &str) -> Result<i64, DateError> {
    let trimmed = segment.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(DateError::NotNumeric {
            segment: segment.to_string(),
        });
    }
    trimmed.parse::<i64>().map_err(|_| DateError::NotNumeric {
        segment: segment.to_string(),
    })
}

/// Parse an externally supplied value: storage format first, then an ISO
/// timestamp (its date part is taken as written, no timezone shift), then a
/// handful of common human layouts.
pub fn from_storage(text: &str) -> Result<CalendarDate, DateError> {
    let trimmed = text.trim();
    let unparseable = || DateError::Unparseable {
        input: text.to_string(),
    };
    if trimmed.is_empty() {
        return Err(unparseable());
    }

    if let Some(caps) = ISO_PREFIX.captures(trimmed) {
        let year = caps[1].parse::<i32>().map_err(|_| unparseable())?;
        let month = caps[2].parse::<u32>().map_err(|_| unparseable())?;
        let day = caps[3].parse::<u32>().map_err(|_| unparseable())?;
        if month == 0 {
            return Err(unparseable());
        }
        return CalendarDate::new(year, month - 1, day);
    }

    if let Some(caps) = ISO_REDUCED.captures(trimmed) {
        let year = caps[1].parse::<i32>().map_err(|_| unparseable())?;
        let month = match caps.get(2) {
            Some(month) => month.as_str().parse::<u32>().map_err(|_| unparseable())?,
            None => 1,
        };
        if month == 0 {
            return Err(unparseable());
        }
        return CalendarDate::new(year, month - 1, 1);
    }

    if let Ok(stamp) = DateTime::parse_from_rfc2822(trimmed) {
        return CalendarDate::try_from_naive(stamp.date_naive());
    }

    GENERIC_FORMATS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .ok_or_else(unparseable)
        .and_then(CalendarDate::try_from_naive)
}
