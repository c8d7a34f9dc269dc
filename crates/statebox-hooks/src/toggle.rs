use statebox_core::{Dispose, Signal, signal};

/// Boolean state.
#[derive(Clone)]
pub struct Toggle {
    value: Signal<bool>,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self {
            value: signal(initial),
        }
    }

    pub fn value(&self) -> bool {
        self.value.get()
    }

    pub fn set(&self, v: bool) {
        self.value.set(v);
    }

    pub fn toggle(&self) {
        self.value.update(|v| *v = !*v);
    }

    pub fn set_on(&self) {
        self.value.set(true);
    }

    pub fn set_off(&self) {
        self.value.set(false);
    }

    pub fn watch(&self, f: impl Fn(&bool) + 'static) -> Dispose {
        self.value.watch(f)
    }
}

pub fn toggle(initial: bool) -> Toggle {
    Toggle::new(initial)
}
