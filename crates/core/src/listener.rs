//! Listener callbacks and identity sets
//!
//! A [`Listener`] is a shared callback. Two listeners are equal only when they
//! are clones of the same allocation, so a [`ListenerSet`] behaves like a set
//! keyed by reference identity: registering the same listener twice stores it
//! once, while two separately created closures are always distinct.

use std::fmt;
use std::rc::Rc;

/// A callback notified with an optional result payload
pub struct Listener<T: 'static> {
    callback: Rc<dyn Fn(Option<&T>)>,
}

impl<T: 'static> Listener<T> {
    /// Wrap a closure
    pub fn new(callback: impl Fn(Option<&T>) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback
    pub fn call(&self, result: Option<&T>) {
        (self.callback)(result)
    }

    /// Whether both listeners share the same allocation
    pub fn same_as(&self, other: &Listener<T>) -> bool {
        // Compare data pointers only; vtable pointers may differ across codegen units.
        std::ptr::addr_eq(Rc::as_ptr(&self.callback), Rc::as_ptr(&other.callback))
    }
}

impl<T: 'static> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T: 'static> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T: 'static> Eq for Listener<T> {}

impl<T: 'static> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("ptr", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

// ============================================================================
// ListenerSet
// ============================================================================

/// Listeners of one kind, unique by identity
pub struct ListenerSet<T: 'static> {
    listeners: Vec<Listener<T>>,
}

impl<T: 'static> ListenerSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Add a listener; returns false if it was already present
    pub fn insert(&mut self, listener: Listener<T>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Check if a listener is registered
    pub fn contains(&self, listener: &Listener<T>) -> bool {
        self.listeners.iter().any(|l| l.same_as(listener))
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove all listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Move all listeners out, leaving the set empty
    pub fn take(&mut self) -> Vec<Listener<T>> {
        std::mem::take(&mut self.listeners)
    }

    /// Iterate over registered listeners
    pub fn iter(&self) -> impl Iterator<Item = &Listener<T>> {
        self.listeners.iter()
    }
}

impl<T: 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for ListenerSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
