//! Outside-click listening as a scoped resource: attached while the panel is
//! open, torn down on close or when the picker is dropped.

use std::fmt;

/// Handle to an attached listener. Dropping it detaches the listener.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.teardown.is_some())
            .finish()
    }
}

/// Host-side registration of a document-level pointer listener.
pub trait OutsideClickSource {
    fn listen(&mut self) -> Subscription;
}

/// Keeps at most one live [`Subscription`] in step with the open flag.
#[derive(Debug, Default)]
pub struct OutsideClickWatch {
    active: Option<Subscription>,
}

impl OutsideClickWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn sync(&mut self, is_open: bool, source: &mut dyn OutsideClickSource) {
        match (is_open, self.active.is_some()) {
            (true, false) => {
                tracing::trace!("attaching outside-click listener");
                self.active = Some(source.listen());
            }
            (false, true) => self.stop(),
            _ => {}
        }
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.active.take() {
            tracing::trace!("detaching outside-click listener");
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutsideClickSource, OutsideClickWatch, Subscription};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingSource {
        attached: Rc<Cell<usize>>,
        detached: Rc<Cell<usize>>,
    }

    impl OutsideClickSource for CountingSource {
        fn listen(&mut self) -> Subscription {
            self.attached.set(self.attached.get() + 1);
            let detached = Rc::clone(&self.detached);
            Subscription::new(move || detached.set(detached.get() + 1))
        }
    }

    #[test]
    fn teardown_runs_once_on_drop() {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        let subscription = Subscription::new(move || inner.set(inner.get() + 1));
        drop(subscription);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_does_not_double_teardown() {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        Subscription::new(move || inner.set(inner.get() + 1)).unsubscribe();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn watch_attaches_once_while_open() {
        let mut source = CountingSource::default();
        let mut watch = OutsideClickWatch::new();

        watch.sync(true, &mut source);
        watch.sync(true, &mut source);
        assert!(watch.is_active());
        assert_eq!(source.attached.get(), 1);

        watch.sync(false, &mut source);
        watch.sync(false, &mut source);
        assert!(!watch.is_active());
        assert_eq!(source.detached.get(), 1);
    }

    #[test]
    fn dropping_watch_detaches() {
        let mut source = CountingSource::default();
        let mut watch = OutsideClickWatch::new();
        watch.sync(true, &mut source);
        drop(watch);
        assert_eq!(source.detached.get(), 1);
    }
}
