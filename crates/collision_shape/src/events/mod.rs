//! Change notification for shared resources
//!
//! Resources such as shapes are shared between several owners. When a
//! resource changes it emits its [`ChangedSignal`], which synchronously calls
//! every connected callback. Callbacks are keyed by [`SubscriberId`] so an
//! owner can disconnect exactly its own callback when it lets go of the
//! resource.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a signal subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Allocate a process-unique subscriber id
    pub fn next() -> Self {
        Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber#{}", self.0)
    }
}

type Callback = Rc<dyn Fn()>;

/// Multicast "changed" notification
#[derive(Default)]
pub struct ChangedSignal {
    subscribers: RefCell<Vec<(SubscriberId, Callback)>>,
}

impl ChangedSignal {
    /// Create a signal with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `callback` under `id`
    ///
    /// Returns `false` and keeps the existing callback if `id` is already
    /// connected.
    pub fn connect(&self, id: SubscriberId, callback: impl Fn() + 'static) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.iter().any(|(existing, _)| *existing == id) {
            log::warn!("{} is already connected to this signal", id);
            return false;
        }
        subscribers.push((id, Rc::new(callback)));
        true
    }

    /// Disconnect the callback registered under `id`; returns whether one was found
    pub fn disconnect(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Check whether `id` is connected
    pub fn is_connected(&self, id: SubscriberId) -> bool {
        self.subscribers.borrow().iter().any(|(existing, _)| *existing == id)
    }

    /// Number of connected callbacks
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Call every connected callback in connection order
    ///
    /// Callbacks may connect or disconnect while the signal is emitting;
    /// such changes take effect on the next emit.
    pub fn emit(&self) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }
}

impl fmt::Debug for ChangedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangedSignal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_subscribers() {
        let signal = ChangedSignal::new();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            assert!(signal.connect(SubscriberId::next(), move || hits.set(hits.get() + 1)));
        }

        signal.emit();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_disconnect_by_identity() {
        let signal = ChangedSignal::new();
        let a = SubscriberId::next();
        let b = SubscriberId::next();
        let a_hits = Rc::new(Cell::new(0));
        let b_hits = Rc::new(Cell::new(0));

        {
            let a_hits = Rc::clone(&a_hits);
            signal.connect(a, move || a_hits.set(a_hits.get() + 1));
        }
        {
            let b_hits = Rc::clone(&b_hits);
            signal.connect(b, move || b_hits.set(b_hits.get() + 1));
        }

        assert!(signal.disconnect(a));
        assert!(!signal.disconnect(a));
        signal.emit();

        assert_eq!(a_hits.get(), 0);
        assert_eq!(b_hits.get(), 1);
        assert!(!signal.is_connected(a));
        assert!(signal.is_connected(b));
    }

    #[test]
    fn test_duplicate_connect_is_rejected() {
        let signal = ChangedSignal::new();
        let id = SubscriberId::next();

        assert!(signal.connect(id, || {}));
        assert!(!signal.connect(id, || {}));
        assert_eq!(signal.subscriber_count(), 1);
    }

    #[test]
    fn test_disconnect_during_emit() {
        let signal = Rc::new(ChangedSignal::new());
        let id = SubscriberId::next();
        let hits = Rc::new(Cell::new(0));

        {
            let weak = Rc::downgrade(&signal);
            let hits = Rc::clone(&hits);
            signal.connect(id, move || {
                hits.set(hits.get() + 1);
                if let Some(signal) = weak.upgrade() {
                    signal.disconnect(id);
                }
            });
        }

        signal.emit();
        signal.emit();
        assert_eq!(hits.get(), 1);
    }
}
