use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::SlotMap;

use crate::dispose::Dispose;

slotmap::new_key_type! {
    /// Stable handle for a registered watcher. Keys are never reused, so
    /// a stale key passed to `unsubscribe` is a harmless no-op.
    pub struct WatchKey;
}

/// Cloneable handle to an observable cell.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    watchers: SlotMap<WatchKey, Rc<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            watchers: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Reads the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    /// Registers a watcher; prefer [`Signal::watch`] unless you manage
    /// keys yourself.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> WatchKey {
        self.0.borrow_mut().watchers.insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, key: WatchKey) {
        self.0.borrow_mut().watchers.remove(key);
    }

    /// Registers a watcher and returns a guard that detaches it. The
    /// guard holds only a weak reference, so it never keeps the cell
    /// alive on its own.
    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let key = self.subscribe(f);
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.0);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().watchers.remove(key);
            }
        })
    }

    // Watchers run outside the mutable borrow, so a callback may read
    // the signal it observes. Writing to it from inside a callback is
    // reentrant and will panic.
    fn notify(&self) {
        let watchers: Vec<Rc<dyn Fn(&T)>> = self.0.borrow().watchers.values().cloned().collect();
        for w in watchers {
            let inner = self.0.borrow();
            w(&inner.value);
        }
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
