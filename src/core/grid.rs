use serde::Serialize;

use crate::core::date::{CalendarDate, MonthCursor};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub is_in_current_month: bool,
    pub is_selected: bool,
}

/// Every day shown for `cursor`: from the Monday on or before the 1st to the
/// Sunday on or after the last day, in order.
pub fn generate(cursor: MonthCursor, selected: Option<CalendarDate>) -> Vec<DayCell> {
    // Fields are public, so fold hand-built cursors back into range first.
    let cursor = MonthCursor::new(cursor.year, cursor.month);
    let (Ok(first), Ok(last)) = (cursor.first_day(), cursor.last_day()) else {
        return Vec::new();
    };

    let start = first.add_days(-i64::from(first.weekday()));
    let end = last.add_days(i64::from(6 - last.weekday()));

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);
    let mut date = start;
    while date <= end {
        cells.push(DayCell {
            date,
            is_in_current_month: cursor.contains(date),
            is_selected: selected == Some(date),
        });
        let next = date.add_days(1);
        if next == date {
            break;
        }
        date = next;
    }
    cells
}

/// Split a generated grid into display rows.
pub fn weeks(cells: &[DayCell]) -> Vec<&[DayCell]> {
    cells.chunks(DAYS_PER_WEEK).collect()
}

#[cfg(test)]
mod tests {
    use super::{DAYS_PER_WEEK, generate, weeks};
    use crate::core::date::{CalendarDate, MonthCursor};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid date")
    }

    #[test]
    fn february_2024_spans_whole_weeks() {
        let cells = generate(MonthCursor::new(2024, 1), None);
        assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
        assert_eq!(cells.len(), 35);
        assert_eq!(cells.first().map(|cell| cell.date), Some(date(2024, 0, 29)));
        assert_eq!(cells.last().map(|cell| cell.date), Some(date(2024, 2, 3)));

        let in_month: Vec<u32> = cells
            .iter()
            .filter(|cell| cell.is_in_current_month)
            .map(|cell| cell.date.day())
            .collect();
        assert_eq!(in_month, (1..=29).collect::<Vec<_>>());
        assert!(cells.iter().all(|cell| !cell.is_selected));
    }

    #[test]
    fn six_row_month() {
        // September 2024 starts on a Sunday.
        let cells = generate(MonthCursor::new(2024, 8), None);
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, date(2024, 7, 26));
        assert_eq!(cells[6].date, date(2024, 8, 1));
        assert_eq!(cells[41].date, date(2024, 9, 6));
    }

    #[test]
    fn four_row_february_starting_on_monday() {
        let cells = generate(MonthCursor::new(2021, 1), None);
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|cell| cell.is_in_current_month));
    }

    #[test]
    fn selected_day_is_flagged_once() {
        let selected = date(2024, 1, 14);
        let cells = generate(MonthCursor::new(2024, 1), Some(selected));
        let flagged: Vec<_> = cells.iter().filter(|cell| cell.is_selected).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, selected);
    }

    #[test]
    fn selection_in_adjacent_month_is_flagged_out_of_month() {
        let selected = date(2024, 2, 2);
        let cells = generate(MonthCursor::new(2024, 1), Some(selected));
        let cell = cells
            .iter()
            .find(|cell| cell.is_selected)
            .expect("trailing day selected");
        assert!(!cell.is_in_current_month);
    }

    #[test]
    fn selection_outside_grid_flags_nothing() {
        let cells = generate(MonthCursor::new(2024, 1), Some(date(2025, 1, 14)));
        assert!(cells.iter().all(|cell| !cell.is_selected));
    }

    #[test]
    fn weeks_start_on_monday() {
        let cells = generate(MonthCursor::new(2023, 11), None);
        let rows = weeks(&cells);
        assert!(rows.iter().all(|row| row.len() == DAYS_PER_WEEK));
        assert!(rows.iter().all(|row| row[0].date.weekday() == 0));
        assert!(rows.iter().all(|row| row[6].date.weekday() == 6));
    }

    #[test]
    fn out_of_range_cursor_still_yields_whole_weeks() {
        let cells = generate(MonthCursor { year: 0, month: 11 }, None);
        assert!(!cells.is_empty());
        assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
        assert_eq!(cells[0].date, date(1, 0, 1));

        let cells = generate(MonthCursor { year: 9999, month: 12 }, None);
        assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
        assert!(cells.iter().any(|cell| cell.date == date(9999, 11, 31)));
    }

    #[test]
    fn year_one_january_reaches_back_into_year_zero_safely() {
        // 0001-01-01 is a Monday, so no leading days are needed.
        let cells = generate(MonthCursor::new(1, 0), None);
        assert_eq!(cells[0].date, date(1, 0, 1));
    }
}
