pub mod codec;
pub mod date;
pub mod grid;
pub mod locale;
pub mod mask;
pub mod validator;

pub use date::{CalendarDate, MonthCursor};
pub use grid::DayCell;
