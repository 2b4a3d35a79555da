pub mod picker_state;

pub use picker_state::PickerState;
