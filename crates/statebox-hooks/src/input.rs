use std::rc::Rc;

use statebox_core::{Dispose, Signal, signal};

/// String state for a text field.
#[derive(Clone)]
pub struct Input {
    text: Signal<String>,
}

impl Input {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: signal(initial.into()),
        }
    }

    pub fn value(&self) -> String {
        self.text.get()
    }

    /// True iff the trimmed text is non-empty.
    pub fn has_value(&self) -> bool {
        self.text.with(|t| !t.trim().is_empty())
    }

    pub fn set(&self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    pub fn clear(&self) {
        self.text.set(String::new());
    }

    /// Adapter for raw change events from a text widget.
    pub fn on_change(&self, raw: &str) {
        self.text.set(raw.to_owned());
    }

    /// Two-way wiring for a text widget: current value plus a shared
    /// change callback.
    pub fn binding(&self) -> InputBinding {
        let text = self.text.clone();
        InputBinding {
            value: self.value(),
            on_change: Rc::new(move |next| text.set(next)),
        }
    }

    pub fn watch(&self, f: impl Fn(&str) + 'static) -> Dispose {
        self.text.watch(move |t| f(t))
    }
}

pub struct InputBinding {
    pub value: String,
    on_change: Rc<dyn Fn(String)>,
}

impl InputBinding {
    pub fn change(&self, next: impl Into<String>) {
        (self.on_change)(next.into())
    }
}

impl Clone for InputBinding {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

pub fn input(initial: impl Into<String>) -> Input {
    Input::new(initial)
}
