//! # Persisted state
//!
//! [`Persisted<T>`] is a signal whose every write is mirrored into a
//! [`FileStore`]: a directory holding one JSON file per key, the way a
//! browser's local storage holds one string per key. On construction
//! the stored value is restored if present and well-formed; otherwise
//! the supplied default is used.
//!
//! Mirroring is best effort: a failed write is logged, never surfaced
//! to the caller. Callers that need the error call `flush()`.
//!
//! ```rust
//! use std::rc::Rc;
//! use statebox_persist::{FileStore, Persisted};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Rc::new(FileStore::new(dir.path()).unwrap());
//!
//! let volume = Persisted::load(store.clone(), "volume", 50u32);
//! volume.set(80);
//!
//! // a fresh instance over the same store restores the mirrored value
//! let restored = Persisted::load(store, "volume", 50u32);
//! assert_eq!(restored.value(), 80);
//! ```

pub mod error;
pub mod persisted;
pub mod store;
pub mod tests;

pub use error::PersistError;
pub use persisted::Persisted;
pub use store::FileStore;
