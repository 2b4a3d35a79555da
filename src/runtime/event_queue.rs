use std::collections::VecDeque;

use crate::runtime::event::PickerEvent;

/// Arrival-ordered buffer of picker events.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<PickerEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: PickerEvent) {
        self.queue.push_back(event);
    }

    pub fn next_ready(&mut self) -> Option<PickerEvent> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::EventQueue;
    use crate::runtime::event::PickerEvent;

    #[test]
    fn events_come_out_in_arrival_order() {
        let mut queue = EventQueue::new();
        queue.emit(PickerEvent::ToggleOpen);
        queue.emit(PickerEvent::TextInput("1".into()));
        queue.emit(PickerEvent::NextMonth);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.next_ready(), Some(PickerEvent::ToggleOpen));
        assert_eq!(queue.next_ready(), Some(PickerEvent::TextInput("1".into())));
        assert_eq!(queue.next_ready(), Some(PickerEvent::NextMonth));
        assert_eq!(queue.next_ready(), None);
        assert!(queue.is_empty());
    }
}
