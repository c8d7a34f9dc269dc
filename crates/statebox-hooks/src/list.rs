//! `Vec`-backed state with positional and keyed mutators.
//!
//! Out-of-range indices are logged no-ops, never panics: list mutators
//! are wired to UI callbacks and must stay total.

use statebox_core::{Dispose, Signal, signal};

/// Elements addressable by a stable key, for [`List::remove_by_key`]
/// and [`List::update_by_key`].
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

#[derive(Clone)]
pub struct List<T: 'static> {
    items: Signal<Vec<T>>,
}

impl<T: 'static> List<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            items: signal(initial),
        }
    }

    pub fn value(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.get()
    }

    /// Reads the items without cloning them.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.items.with(|v| f(v))
    }

    pub fn len(&self) -> usize {
        self.items.with(|v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|v| v.is_empty())
    }

    pub fn set(&self, items: Vec<T>) {
        self.items.set(items);
    }

    pub fn push(&self, item: T) {
        self.items.update(|v| v.push(item));
    }

    /// Appends every item in one transition (watchers fire once).
    pub fn extend(&self, items: impl IntoIterator<Item = T>) {
        self.items.update(|v| v.extend(items));
    }

    /// Inserts at the front.
    pub fn unshift(&self, item: T) {
        self.items.update(|v| v.insert(0, item));
    }

    pub fn pop(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let mut out = None;
        self.items.update(|v| out = v.pop());
        out
    }

    /// Removes and returns the first item.
    pub fn shift(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let mut out = None;
        self.items.update(|v| out = Some(v.remove(0)));
        out
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
    }

    pub fn remove_index(&self, index: usize) {
        let len = self.len();
        if index >= len {
            log::warn!("List::remove_index: index {index} out of range (len {len})");
            return;
        }
        self.items.update(|v| {
            v.remove(index);
        });
    }

    /// Moves the item at `from` so it ends up at position `to`; `to`
    /// past the end is clamped to the end.
    pub fn move_item(&self, from: usize, to: usize) {
        let len = self.len();
        if from >= len {
            log::warn!("List::move_item: index {from} out of range (len {len})");
            return;
        }
        self.items.update(|v| {
            let item = v.remove(from);
            let to = to.min(v.len());
            v.insert(to, item);
        });
    }

    /// Keeps only the items matching `pred`.
    pub fn retain(&self, pred: impl FnMut(&T) -> bool) {
        self.items.update(|v| v.retain(pred));
    }

    pub fn watch(&self, f: impl Fn(&[T]) + 'static) -> Dispose {
        self.items.watch(move |v| f(v))
    }
}

impl<T: Keyed + 'static> List<T> {
    /// Removes every item whose key equals `key`. Absent keys are a
    /// no-op and watchers do not fire.
    pub fn remove_by_key(&self, key: &T::Key) {
        if !self.items.with(|v| v.iter().any(|it| it.key() == *key)) {
            return;
        }
        self.items.update(|v| v.retain(|it| it.key() != *key));
    }

    /// Applies `f` to the first item whose key equals `key`.
    pub fn update_by_key(&self, key: &T::Key, f: impl FnOnce(&mut T)) {
        let pos = self.items.with(|v| v.iter().position(|it| it.key() == *key));
        let Some(pos) = pos else {
            return;
        };
        self.items.update(|v| f(&mut v[pos]));
    }
}

pub fn list<T>(initial: Vec<T>) -> List<T> {
    List::new(initial)
}
