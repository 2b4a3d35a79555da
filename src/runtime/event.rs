use crate::core::date::CalendarDate;

/// Inputs from the rendering layer, one per user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Whole current content of the text field after a keystroke or paste.
    TextInput(String),
    DaySelected(CalendarDate),
    ToggleOpen,
    OutsideInteraction,
    PreviousMonth,
    NextMonth,
}

/// Where a pointer event landed relative to the picker's own subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}
