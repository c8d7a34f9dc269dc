use statebox_core::{Dispose, Signal, signal};

/// Struct state with merge-style partial updates: `apply` mutates the
/// fields you touch and leaves the rest, `reset` restores the
/// construction-time value.
///
/// ```rust
/// use statebox_hooks::MergedState;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Form { name: String, age: u32 }
///
/// let form = MergedState::new(Form { name: "Ada".into(), age: 36 });
/// form.apply(|f| f.age = 37);
/// assert_eq!(form.value().name, "Ada");
/// assert_eq!(form.value().age, 37);
///
/// form.reset();
/// assert_eq!(form.value().age, 36);
/// ```
#[derive(Clone)]
pub struct MergedState<T: Clone + 'static> {
    value: Signal<T>,
    initial: T,
}

impl<T: Clone + 'static> MergedState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: signal(initial.clone()),
            initial,
        }
    }

    pub fn value(&self) -> T {
        self.value.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    /// Partial update: `f` receives the current value and mutates only
    /// the fields it cares about.
    pub fn apply(&self, f: impl FnOnce(&mut T)) {
        self.value.update(f);
    }

    pub fn replace(&self, v: T) {
        self.value.set(v);
    }

    /// Back to the construction-time value.
    pub fn reset(&self) {
        self.value.set(self.initial.clone());
    }

    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        self.value.watch(f)
    }
}
