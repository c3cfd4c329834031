// ============================================================================
// REACTIVITY - Shared value + change subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Value shared between a view, its view model and spawned requests.
/// Clones point at the same value and the same subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutate in place and notify subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Mutate in place without notifying (keystrokes in a form field)
    pub fn update_silent<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Subscribers may subscribe again while being notified
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

/// At most one pending job: the first `schedule` of a burst wins until
/// `finish` runs.
#[derive(Clone, Default)]
pub struct PendingFlag {
    pending: Rc<Cell<bool>>,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when nothing was pending and the caller should schedule
    pub fn schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_update_notify_silent_does_not() {
        let state = ReactiveState::new(vec![1]);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        state.set(vec![1, 2]);
        state.update(|v| v.push(3));
        state.update_silent(|v| v.push(4));

        assert_eq!(hits.get(), 2);
        assert_eq!(state.get(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let copy = state.clone();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            copy.subscribe(move || hits.set(hits.get() + 1));
        }

        state.set("hello".to_string());

        assert_eq!(hits.get(), 1);
        assert_eq!(copy.with(|s| s.len()), 5);
    }

    #[test]
    fn subscriber_can_read_value() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(Cell::new(0));
        {
            let reader = state.clone();
            let seen = seen.clone();
            state.subscribe(move || seen.set(reader.get()));
        }
        state.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn burst_of_changes_schedules_once() {
        let state = ReactiveState::new(Vec::<u32>::new());
        let flag = PendingFlag::new();
        let scheduled = Rc::new(Cell::new(0));
        {
            let flag = flag.clone();
            let scheduled = scheduled.clone();
            state.subscribe(move || {
                if flag.schedule() {
                    scheduled.set(scheduled.get() + 1);
                }
            });
        }

        // A create clears the form, then the reload replaces the list
        state.update(|v| v.clear());
        state.set(vec![1, 2]);
        assert_eq!(scheduled.get(), 1);
        assert!(flag.is_pending());

        flag.finish();
        state.set(vec![3]);
        assert_eq!(scheduled.get(), 2);
    }
}
