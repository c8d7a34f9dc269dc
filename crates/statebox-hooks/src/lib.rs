//! # State hooks
//!
//! Each hook in this crate owns exactly one `Signal` and adds named
//! mutators on top of it. Hooks are independent of each other; there is
//! no shared machinery beyond the signal cell itself.
//!
//! - [`Counter`] — integer state with clamping/wraparound bounds. The
//!   only non-trivial algorithm in the crate; see the module docs.
//! - [`Toggle`] — boolean state: `toggle`, `set_on`, `set_off`.
//! - [`List`] — `Vec`-backed state: push/pop/shift/move/retain plus
//!   keyed removal and update via [`Keyed`].
//! - [`MapState`] / [`SetState`] — hash collections with
//!   change notification per mutation.
//! - [`MergedState`] — struct state with merge-style partial updates
//!   and `reset()` to the construction-time value.
//! - [`Input`] — string state for text fields, with an `on_change`
//!   adapter and a two-way [`InputBinding`].
//!
//! ```rust
//! use statebox_hooks::*;
//!
//! let count = counter(5);
//! count.increase();
//! assert_eq!(count.value(), 6);
//!
//! let open = toggle(false);
//! open.toggle();
//! assert!(open.value());
//! ```
//!
//! Every hook exposes `watch(f) -> Dispose` so the surrounding
//! re-render mechanism can observe transitions; mutators that end up
//! not changing anything (saturated counter, popping an empty list) do
//! not notify.

pub mod counter;
pub mod input;
pub mod list;
pub mod map;
pub mod merged;
pub mod set;
pub mod toggle;

pub use counter::{Counter, CounterOptions, counter};
pub use input::{Input, InputBinding, input};
pub use list::{Keyed, List, list};
pub use map::MapState;
pub use merged::MergedState;
pub use set::SetState;
pub use toggle::{Toggle, toggle};

pub use statebox_core::{ConfigError, Dispose, Signal, signal};
