//! State change notification
//!
//! Views do not poll the controller; they subscribe. Each subscriber is
//! called with a [`DialogEvent`] after the state change is committed.
//! [`Subscription`] is an RAII guard: dropping it unsubscribes.
//!
//! Subscribers are notified in registration order. The observer list is not
//! borrowed while callbacks run, so a callback may subscribe, unsubscribe or
//! query the controller.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::types::DialogEvent;

type ObserverFn = dyn Fn(&DialogEvent);

#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(u64, Rc<ObserverFn>)>,
}

impl ObserverList {
    fn add(&mut self, callback: Rc<ObserverFn>) -> u64 {
        self.next_id += 1;
        self.entries.push((self.next_id, callback));
        self.next_id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Shared handle to an observer list
#[derive(Clone, Default)]
pub(crate) struct Observers {
    inner: Rc<RefCell<ObserverList>>,
}

impl Observers {
    pub(crate) fn subscribe(&self, callback: impl Fn(&DialogEvent) + 'static) -> Subscription {
        let id = self.inner.borrow_mut().add(Rc::new(callback));
        Subscription {
            id,
            list: Rc::downgrade(&self.inner),
        }
    }

    pub(crate) fn notify(&self, event: DialogEvent) {
        let callbacks: Vec<Rc<ObserverFn>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in callbacks {
            callback(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

/// Keeps an observer registered until dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    list: Weak<RefCell<ObserverList>>,
}

impl Subscription {
    /// Whether the controller this subscription belongs to is still alive
    pub fn is_active(&self) -> bool {
        self.list.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(list) = self.list.upgrade() {
            list.borrow_mut().remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionId;
    use std::cell::RefCell;

    #[test]
    fn test_notify_in_registration_order() {
        let observers = Observers::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = log.clone();
        let _a = observers.subscribe(move |_| l1.borrow_mut().push("a"));
        let l2 = log.clone();
        let _b = observers.subscribe(move |_| l2.borrow_mut().push("b"));

        observers.notify(DialogEvent::TornDown);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let observers = Observers::default();
        let hits = Rc::new(RefCell::new(0));

        let h = hits.clone();
        let sub = observers.subscribe(move |_| *h.borrow_mut() += 1);
        observers.notify(DialogEvent::Opened {
            session: SessionId(1),
        });
        drop(sub);
        observers.notify(DialogEvent::TornDown);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(observers.len(), 0);
    }

    #[test]
    fn test_subscription_outlives_list() {
        let observers = Observers::default();
        let sub = observers.subscribe(|_| {});
        assert!(sub.is_active());

        drop(observers);
        assert!(!sub.is_active());
    }
}
