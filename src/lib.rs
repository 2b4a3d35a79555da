pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod picker;
pub mod runtime;
pub mod snapshot;
pub mod state;

pub use config::PickerConfig;
pub use crate::core::codec;
pub use crate::core::date::{CalendarDate, MonthCursor};
pub use crate::core::grid::{self, DayCell};
pub use crate::core::locale;
pub use crate::core::mask;
pub use crate::core::validator;
pub use error::{ConfigError, DateError};
pub use form::FormData;
pub use picker::{ChangeObserver, DatePicker, HiddenField};
pub use runtime::{OutsideClickSource, PickerEvent, PointerTarget, Subscription};
pub use state::PickerState;
