//! Usage errors rejected before any simulation runs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("throttle notch {0} is outside [-1, 4]")]
    InvalidThrottle(i32),
    #[error("throttle sequence is empty")]
    EmptyThrottleSequence,
    #[error("invalid hull: {0}")]
    InvalidHull(&'static str),
    #[error("invalid shell: {0}")]
    InvalidShell(&'static str),
    #[error("sigma must be positive, got {0}")]
    InvalidSigma(f64),
}
