//! # Signals and watchers
//!
//! Statebox keeps every piece of component-local state in a `Signal<T>`:
//! a cloneable handle to an observable cell. The hooks in
//! `statebox-hooks` are thin wrappers that own one signal each and add
//! named mutators on top.
//!
//! ```rust
//! use statebox_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Watching
//!
//! `watch` registers a callback that fires after every mutation and
//! returns a [`Dispose`] guard; running the guard detaches the watcher.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use statebox_core::*;
//!
//! let count = signal(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let guard = count.watch({
//!     let seen = seen.clone();
//!     move |v| seen.set(*v)
//! });
//!
//! count.set(7);
//! assert_eq!(seen.get(), 7);
//!
//! guard.run();
//! count.set(9);
//! assert_eq!(seen.get(), 7); // detached
//! ```
//!
//! Signals are single-threaded by design (`Rc<RefCell<..>>` inside):
//! mutators run to completion on the calling thread before any other
//! transition on the same cell can be observed, matching a UI
//! event-callback environment. Handles are `Clone` but not `Send`.

pub mod dispose;
pub mod error;
pub mod prelude;
pub mod signal;
pub mod tests;

pub use dispose::*;
pub use error::*;
pub use prelude::*;
pub use signal::*;
