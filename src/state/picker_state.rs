use serde::Serialize;

use crate::core::codec;
use crate::core::date::{CalendarDate, MonthCursor};
use crate::core::mask;

/// Everything the picker shows. Only the reducer mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerState {
    pub is_open: bool,
    pub text: String,
    pub selected: Option<CalendarDate>,
    pub cursor: MonthCursor,
}

impl PickerState {
    pub fn empty(today: CalendarDate) -> Self {
        Self {
            is_open: false,
            text: String::new(),
            selected: None,
            cursor: today.cursor(),
        }
    }

    /// Seed from an external initial value. An unparseable value is logged and
    /// ignored rather than shown.
    pub fn seeded(initial: Option<&str>, today: CalendarDate) -> Self {
        let Some(initial) = initial.filter(|value| !value.trim().is_empty()) else {
            return Self::empty(today);
        };
        match codec::from_storage(initial) {
            Ok(date) => Self {
                is_open: false,
                text: codec::to_display(date),
                selected: Some(date),
                cursor: date.cursor(),
            },
            Err(err) => {
                tracing::warn!(initial, %err, "ignoring initial picker value");
                Self::empty(today)
            }
        }
    }

    /// Committed value in storage format, empty when nothing is selected.
    pub fn committed_value(&self) -> String {
        self.selected.map(codec::to_storage).unwrap_or_default()
    }

    /// Returns the value to report to the observer.
    pub(crate) fn apply_text(&mut self, raw: &str) -> String {
        if raw.trim().is_empty() {
            self.text.clear();
            self.selected = None;
            return String::new();
        }

        self.text = mask::format(raw);
        if !mask::is_complete(&self.text) {
            // Keep the partial mask on screen; only the selection goes.
            self.selected = None;
            return String::new();
        }

        match codec::parse(&self.text) {
            Ok(date) => {
                self.selected = Some(date);
                self.cursor = date.cursor();
                codec::to_storage(date)
            }
            Err(err) => {
                tracing::debug!(text = %self.text, %err, "complete text is not a date, resetting");
                self.selected = None;
                self.text.clear();
                String::new()
            }
        }
    }

    pub(crate) fn select_day(&mut self, date: CalendarDate) -> String {
        self.selected = Some(date);
        self.text = codec::to_display(date);
        self.is_open = false;
        codec::to_storage(date)
    }

    pub(crate) fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
    }

    pub(crate) fn navigate(&mut self, delta: i32) {
        self.cursor = self.cursor.shifted(delta);
    }
}
