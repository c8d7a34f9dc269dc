use thiserror::Error;

/// Rejected hook configuration. Raised at construction time only; every
/// runtime mutator is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("step must be positive, got {0}")]
    NonPositiveStep(i64),
    #[error("lower limit {lower} exceeds upper limit {upper}")]
    LimitsOutOfOrder { lower: i64, upper: i64 },
}
