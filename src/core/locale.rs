//! Fixed display locale (fr-FR) for captions and weekday headers.

use crate::core::date::MonthCursor;

pub const DEFAULT_PLACEHOLDER: &str = "jj/mm/aaaa";

/// Monday-first short labels for the grid header.
pub const WEEKDAY_LABELS: [&str; 7] = ["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"];

const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize % 12]
}

/// Long month name followed by the numeric year, e.g. `février 2024`.
pub fn caption(cursor: MonthCursor) -> String {
    format!("{} {}", month_name(cursor.month), cursor.year)
}

#[cfg(test)]
mod tests {
    use super::{WEEKDAY_LABELS, caption, month_name};
    use crate::core::date::MonthCursor;

    #[test]
    fn caption_uses_long_month_name_and_year() {
        assert_eq!(caption(MonthCursor::new(2024, 1)), "février 2024");
        assert_eq!(caption(MonthCursor::new(1999, 11)), "décembre 1999");
    }

    #[test]
    fn labels_start_on_monday() {
        assert_eq!(WEEKDAY_LABELS[0], "Lu");
        assert_eq!(WEEKDAY_LABELS[6], "Di");
        assert_eq!(month_name(7), "août");
    }
}
