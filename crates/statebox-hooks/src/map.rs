use std::collections::HashMap;
use std::hash::Hash;

use statebox_core::{Dispose, Signal, signal};

/// `HashMap`-backed state. Watchers fire once per mutation that changed
/// something; removing an absent key is silent.
pub struct MapState<K: Eq + Hash + 'static, V: 'static> {
    entries: Signal<HashMap<K, V>>,
}

impl<K: Eq + Hash + 'static, V: 'static> MapState<K, V> {
    pub fn new(initial: HashMap<K, V>) -> Self {
        Self {
            entries: signal(initial),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::new(entries.into_iter().collect())
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.entries.with(|m| m.get(key).cloned())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.with(|m| m.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.with(|m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.with(|m| m.is_empty())
    }

    pub fn value(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.entries.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&HashMap<K, V>) -> R) -> R {
        self.entries.with(f)
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries.update(|m| {
            m.insert(key, value);
        });
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        if !self.contains_key(key) {
            return None;
        }
        let mut out = None;
        self.entries.update(|m| out = m.remove(key));
        out
    }

    pub fn clear(&self) {
        self.entries.set(HashMap::new());
    }

    /// Swaps in a whole new map built from `entries`.
    pub fn replace(&self, entries: impl IntoIterator<Item = (K, V)>) {
        self.entries.set(entries.into_iter().collect());
    }

    pub fn watch(&self, f: impl Fn(&HashMap<K, V>) + 'static) -> Dispose {
        self.entries.watch(f)
    }
}

impl<K: Eq + Hash + 'static, V: 'static> Clone for MapState<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K: Eq + Hash + 'static, V: 'static> Default for MapState<K, V> {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}
