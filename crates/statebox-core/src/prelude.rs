pub use crate::dispose::Dispose;
pub use crate::error::ConfigError;
pub use crate::signal::{Signal, WatchKey, signal};
