#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Report a committed value (storage format) or `""` to the observer.
    Emit(String),
    /// The panel opened; outside-click listening should start.
    Opened,
    /// The panel closed; outside-click listening should stop.
    Closed,
}
