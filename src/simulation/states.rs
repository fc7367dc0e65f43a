//! Core state types for the pendulum simulation.
//!
//! Defines the generalized-coordinate state vector and the integrated
//! trajectory:
//! - `StateVec<D>` packs (θ, ω) pairs, one per segment, as `[θ0, ω0, θ1, ω1, ..]`
//! - `Trajectory<D>` holds the state at every node of the uniform time grid
//!
//! Angles are measured from the downward vertical and left unwrapped, so
//! long integrations may wind far outside [-π, π].

use nalgebra::{SVector, Vector2};

pub type NVec2 = Vector2<f64>;

/// Generalized-coordinate state, `D = 2 * segment count`.
/// Even components are angles θᵢ, odd components angular velocities ωᵢ.
pub type StateVec<const D: usize> = SVector<f64, D>;

pub type StateVec1 = StateVec<2>; // single pendulum
pub type StateVec2 = StateVec<4>; // double pendulum
pub type StateVec3 = StateVec<6>; // triple pendulum

/// Integrated trajectory over a uniform time grid.
///
/// Invariant: `states.len() == times.len() == n_steps + 1`, `times[0] == t_start`,
/// `times[last] == t_end` (up to rounding), `h == (t_end - t_start) / n_steps`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const D: usize> {
    pub states: Vec<StateVec<D>>, // one state per time-grid node
    pub times: Vec<f64>,          // uniform time grid
    pub h: f64,                   // step size
}

impl<const D: usize> Trajectory<D> {
    /// Number of segments in the chain this trajectory describes.
    pub fn segments(&self) -> usize {
        D / 2
    }

    /// Angle θₖ at grid node `i`.
    pub fn theta(&self, i: usize, k: usize) -> f64 {
        self.states[i][2 * k]
    }

    /// Angular velocity ωₖ at grid node `i`.
    pub fn omega(&self, i: usize, k: usize) -> f64 {
        self.states[i][2 * k + 1]
    }

    /// True if every component of every state is finite, i.e. no NaN/Inf
    /// leaked in from a degenerate configuration.
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|q| q.iter().all(|x| x.is_finite()))
    }
}
