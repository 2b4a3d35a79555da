use serde::Serialize;

use crate::config::PickerConfig;
use crate::core::codec;
use crate::core::date::{self, CalendarDate, MonthCursor};
use crate::core::grid::{self, DayCell};
use crate::core::locale;
use crate::runtime::{
    Effect, EventQueue, OutsideClickSource, OutsideClickWatch, PickerEvent, PointerTarget, Reducer,
};
use crate::state::PickerState;

pub type ChangeObserver = Box<dyn FnMut(&str)>;

/// Form field carrying the committed value for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// A single date picker instance: owns its [`PickerState`] and turns
/// interaction events into state changes and observer notifications.
pub struct DatePicker {
    name: Option<String>,
    placeholder: String,
    today: CalendarDate,
    state: PickerState,
    queue: EventQueue,
    on_change: Option<ChangeObserver>,
    outside_source: Option<Box<dyn OutsideClickSource>>,
    outside_watch: OutsideClickWatch,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    pub fn new() -> Self {
        let today = date::today();
        Self {
            name: None,
            placeholder: locale::DEFAULT_PLACEHOLDER.to_string(),
            today,
            state: PickerState::empty(today),
            queue: EventQueue::new(),
            on_change: None,
            outside_source: None,
            outside_watch: OutsideClickWatch::new(),
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        let mut picker = Self::new().with_placeholder(config.placeholder.clone());
        if let Some(name) = &config.name {
            picker = picker.with_name(name.clone());
        }
        if let Some(value) = &config.value {
            picker = picker.with_value(value.clone());
        }
        picker
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Seed the picker from an initial value (storage format or another
    /// recognizable date). The observer is not notified.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.state = PickerState::seeded(Some(value.as_str()), self.today);
        self
    }

    /// Override the date used to position an empty picker.
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = today;
        if self.state.selected.is_none() {
            self.state.cursor = today.cursor();
        }
        self
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn with_outside_source(mut self, source: impl OutsideClickSource + 'static) -> Self {
        self.outside_source = Some(Box::new(source));
        self.sync_outside_watch();
        self
    }

    // ── Read-only view ───────────────────────────────────────────────────────

    pub fn state(&self) -> PickerState {
        self.state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.state.selected
    }

    pub fn cursor(&self) -> MonthCursor {
        self.state.cursor
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> String {
        self.state.committed_value()
    }

    pub fn grid(&self) -> Vec<DayCell> {
        grid::generate(self.state.cursor, self.state.selected)
    }

    pub fn caption(&self) -> String {
        locale::caption(self.state.cursor)
    }

    pub fn hidden_field(&self) -> Option<HiddenField> {
        self.name.as_ref().map(|name| HiddenField {
            name: name.clone(),
            value: self.value(),
        })
    }

    /// Name of the visible text field. It never collides with the hidden
    /// field, which carries the bare name.
    pub fn display_field_name(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("{name}-display"))
    }

    pub fn is_listening_outside(&self) -> bool {
        self.outside_watch.is_active()
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    pub fn on_text_input(&mut self, raw: &str) {
        self.dispatch(PickerEvent::TextInput(raw.to_string()));
    }

    pub fn on_day_selected(&mut self, date: CalendarDate) {
        self.dispatch(PickerEvent::DaySelected(date));
    }

    /// Select a day from a display-format string such as `15/03/2024`.
    pub fn on_day_selected_text(&mut self, text: &str) -> bool {
        match codec::parse(text) {
            Ok(date) => {
                self.on_day_selected(date);
                true
            }
            Err(err) => {
                tracing::debug!(text, %err, "ignoring day selection");
                false
            }
        }
    }

    pub fn on_toggle_open(&mut self) {
        self.dispatch(PickerEvent::ToggleOpen);
    }

    pub fn on_outside_interaction(&mut self) {
        self.dispatch(PickerEvent::OutsideInteraction);
    }

    pub fn on_navigate_previous_month(&mut self) {
        self.dispatch(PickerEvent::PreviousMonth);
    }

    pub fn on_navigate_next_month(&mut self) {
        self.dispatch(PickerEvent::NextMonth);
    }

    /// Route a document-level pointer event. Only events outside the picker
    /// while it is open close it.
    pub fn on_pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside && self.state.is_open {
            self.on_outside_interaction();
        }
    }

    pub fn dispatch(&mut self, event: PickerEvent) {
        self.queue.emit(event);
        while let Some(event) = self.queue.next_ready() {
            tracing::debug!(?event, "picker event");
            let effects = Reducer::reduce(&mut self.state, event);
            for effect in effects {
                self.apply_effect(effect);
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Emit(value) => {
                tracing::debug!(value = %value, "picker value changed");
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&value);
                }
            }
            Effect::Opened | Effect::Closed => self.sync_outside_watch(),
        }
    }

    fn sync_outside_watch(&mut self) {
        if let Some(source) = self.outside_source.as_deref_mut() {
            self.outside_watch.sync(self.state.is_open, source);
        }
    }
}
