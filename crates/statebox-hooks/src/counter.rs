//! Integer state with optional clamping or wraparound at configured
//! bounds.
//!
//! ```rust
//! use statebox_hooks::counter::{Counter, CounterOptions};
//!
//! let c = Counter::new(0, CounterOptions {
//!     lower_limit: Some(0),
//!     upper_limit: Some(4),
//!     looping: true,
//!     ..CounterOptions::default()
//! }).unwrap();
//!
//! c.decrease();
//! assert_eq!(c.value(), 4); // wrapped to the upper limit
//! ```
//!
//! The boundary check compares the *pre-delta* value against the limit,
//! not the candidate: a delta that would jump over a limit behaves the
//! same as one that lands exactly on it. A looping `increase` wraps back
//! to the construction-time initial value, not to `lower_limit`; a
//! looping `decrease` wraps to `upper_limit`. The asymmetry is
//! deliberate and callers rely on it.

use statebox_core::{ConfigError, Dispose, Signal, signal};

/// Static configuration for a [`Counter`]. `step` is the delta used when
/// `increase`/`decrease` are called without one; it must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterOptions {
    pub step: i64,
    pub lower_limit: Option<i64>,
    pub upper_limit: Option<i64>,
    pub looping: bool,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            step: 1,
            lower_limit: None,
            upper_limit: None,
            looping: false,
        }
    }
}

#[derive(Clone)]
pub struct Counter {
    value: Signal<i64>,
    initial: i64,
    opts: CounterOptions,
}

impl std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counter")
            .field("value", &self.value.get())
            .field("initial", &self.initial)
            .field("opts", &self.opts)
            .finish()
    }
}

impl Counter {
    /// Fails fast on a contract violation: non-positive `step`, or
    /// `lower_limit > upper_limit`.
    pub fn new(initial: i64, opts: CounterOptions) -> Result<Self, ConfigError> {
        if opts.step <= 0 {
            return Err(ConfigError::NonPositiveStep(opts.step));
        }
        if let (Some(lower), Some(upper)) = (opts.lower_limit, opts.upper_limit) {
            if lower > upper {
                return Err(ConfigError::LimitsOutOfOrder { lower, upper });
            }
        }
        Ok(Self {
            value: signal(initial),
            initial,
            opts,
        })
    }

    pub fn value(&self) -> i64 {
        self.value.get()
    }

    /// Direct write; not clamped against the limits.
    pub fn set(&self, v: i64) {
        self.value.set(v);
    }

    pub fn watch(&self, f: impl Fn(&i64) + 'static) -> Dispose {
        self.value.watch(f)
    }

    pub fn increase(&self) {
        self.increase_by(self.opts.step);
    }

    pub fn increase_by(&self, delta: i64) {
        let current = self.value.get();
        match self.opts.upper_limit {
            Some(upper) if current >= upper => {
                if self.opts.looping {
                    self.value.set(self.initial);
                }
                // else saturate: no write, no notification
            }
            _ => self.value.set(current.saturating_add(delta)),
        }
    }

    pub fn decrease(&self) {
        self.decrease_by(self.opts.step);
    }

    pub fn decrease_by(&self, delta: i64) {
        let current = self.value.get();
        match self.opts.lower_limit {
            Some(lower) if current <= lower => {
                // Looping downward needs somewhere to land.
                if self.opts.looping {
                    if let Some(upper) = self.opts.upper_limit {
                        self.value.set(upper);
                    }
                }
            }
            _ => self.value.set(current.saturating_sub(delta)),
        }
    }
}

/// Unbounded counter with `step = 1`.
pub fn counter(initial: i64) -> Counter {
    Counter {
        value: signal(initial),
        initial,
        opts: CounterOptions::default(),
    }
}
