use std::collections::HashSet;
use std::hash::Hash;

use statebox_core::{Dispose, Signal, signal};

/// `HashSet`-backed state. Inserting a present item or removing an
/// absent one is silent: watchers only see actual changes.
pub struct SetState<T: Eq + Hash + 'static> {
    items: Signal<HashSet<T>>,
}

impl<T: Eq + Hash + 'static> SetState<T> {
    pub fn new(initial: HashSet<T>) -> Self {
        Self {
            items: signal(initial),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self::new(items.into_iter().collect())
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.with(|s| s.contains(item))
    }

    pub fn len(&self) -> usize {
        self.items.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|s| s.is_empty())
    }

    pub fn value(&self) -> HashSet<T>
    where
        T: Clone,
    {
        self.items.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&HashSet<T>) -> R) -> R {
        self.items.with(f)
    }

    /// Returns whether the item was newly inserted.
    pub fn insert(&self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.update(|s| {
            s.insert(item);
        });
        true
    }

    /// Returns whether the item was present.
    pub fn remove(&self, item: &T) -> bool {
        if !self.contains(item) {
            return false;
        }
        self.items.update(|s| {
            s.remove(item);
        });
        true
    }

    pub fn clear(&self) {
        self.items.set(HashSet::new());
    }

    /// Swaps in a whole new set built from `items`.
    pub fn replace(&self, items: impl IntoIterator<Item = T>) {
        self.items.set(items.into_iter().collect());
    }

    pub fn watch(&self, f: impl Fn(&HashSet<T>) + 'static) -> Dispose {
        self.items.watch(f)
    }
}

impl<T: Eq + Hash + 'static> Clone for SetState<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: Eq + Hash + 'static> Default for SetState<T> {
    fn default() -> Self {
        Self::new(HashSet::new())
    }
}
