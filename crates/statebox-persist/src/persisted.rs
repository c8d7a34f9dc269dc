use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use statebox_core::{Dispose, Signal, signal};

use crate::error::PersistError;
use crate::store::FileStore;

/// A signal mirrored into a [`FileStore`] under a fixed key.
pub struct Persisted<T: 'static> {
    value: Signal<T>,
    store: Rc<FileStore>,
    key: String,
}

impl<T: Serialize + DeserializeOwned + Clone + 'static> Persisted<T> {
    /// Restores the stored value for `key` if present and well-formed;
    /// otherwise starts from `default`. A corrupt entry is discarded
    /// with a warning rather than propagated: local state must come up
    /// even when the mirror is damaged.
    pub fn load(store: Rc<FileStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let initial = match store.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(err) => {
                    log::warn!("persisted `{key}`: discarding corrupt entry: {err}");
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                log::warn!("persisted `{key}`: read failed: {err}");
                default
            }
        };
        Self {
            value: signal(initial),
            store,
            key,
        }
    }

    pub fn value(&self) -> T {
        self.value.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    /// Sets the value and mirrors it into the store, best effort.
    pub fn set(&self, v: T) {
        self.value.set(v);
        self.mirror();
    }

    /// In-place update, then mirror.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.value.update(f);
        self.mirror();
    }

    /// Writes the current value to the store, surfacing the error.
    pub fn flush(&self) -> Result<(), PersistError> {
        let raw = self.value.with(|v| serde_json::to_string(v))?;
        self.store.write(&self.key, &raw)
    }

    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        self.value.watch(f)
    }

    fn mirror(&self) {
        if let Err(err) = self.flush() {
            log::warn!("persisted `{}`: write failed: {err}", self.key);
        }
    }
}

impl<T: 'static> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            store: self.store.clone(),
            key: self.key.clone(),
        }
    }
}
