//! Numerical and physical parameters for one simulation run
//!
//! `SimParameters` holds runtime settings:
//! - integration window (`t_start`, `t_end`) and step count,
//! - gravitational acceleration `g`
//!
//! Immutable for the duration of a run.

/// Standard gravitational acceleration, m/s².
pub const G_STANDARD: f64 = 9.81;

#[derive(Debug, Clone)]
pub struct SimParameters {
    pub t_start: f64,   // integration start time
    pub t_end: f64,     // integration end time
    pub n_steps: usize, // number of fixed RK4 steps
    pub g: f64,         // gravitational acceleration
}

impl SimParameters {
    /// Fixed step size h = (t_end - t_start) / n_steps.
    pub fn step_size(&self) -> f64 {
        (self.t_end - self.t_start) / self.n_steps as f64
    }
}
