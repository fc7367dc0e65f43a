//! Error types for simulation setup

use thiserror::Error;

/// Precondition violations caught before any integration work begins.
///
/// Numerical degeneracy (vanishing denominators in the equations of motion)
/// is deliberately not represented here: it surfaces as NaN/Inf in the
/// output series instead of an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The integrator needs at least one step
    #[error("invalid step count: {n_steps} (must be >= 1)")]
    InvalidStepCount {
        /// Requested number of steps
        n_steps: usize,
    },

    /// The integration window must have positive extent
    #[error("invalid time span: t_start = {t_start}, t_end = {t_end} (t_end must be > t_start)")]
    InvalidTimeSpan {
        /// Requested start time
        t_start: f64,
        /// Requested end time
        t_end: f64,
    },

    /// Only chains of 1, 2 or 3 segments have closed-form equations of motion
    #[error("unsupported topology: {segments} segments (supported: 1, 2, 3)")]
    UnsupportedTopology {
        /// Number of segments in the configuration
        segments: usize,
    },
}
