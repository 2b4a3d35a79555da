pub mod effect;
pub mod event;
pub mod event_queue;
pub mod reducer;
pub mod subscription;

pub use effect::Effect;
pub use event::{PickerEvent, PointerTarget};
pub use event_queue::EventQueue;
pub use reducer::Reducer;
pub use subscription::{OutsideClickSource, OutsideClickWatch, Subscription};
