//! Generalized-coordinate to Cartesian transform
//!
//! Maps a trajectory of (θ, ω) states to absolute (x, y) positions of each
//! point mass. Pure function of the angle components; angular velocities are
//! never read.

use crate::simulation::states::{NVec2, Trajectory};

/// Absolute positions of every mass at every time node.
/// `positions[i][k]` is the position of mass `k` at grid node `i`; the pivot
/// sits at the origin and mass 0 hangs from it.
pub type CartesianSeries = Vec<Vec<NVec2>>;

/// Convert a trajectory to Cartesian positions by accumulating rotated rod
/// vectors down the chain:
///
/// `x_k = x_{k-1} + l_k sin θ_k`, `y_k = y_{k-1} - l_k cos θ_k`
///
/// with the pivot fixed at (0, 0). `lengths[k]` is the rod length of
/// segment `k`; one length per segment.
pub fn to_cartesian<const D: usize>(traj: &Trajectory<D>, lengths: &[f64]) -> CartesianSeries {
    traj.states
        .iter()
        .map(|q| {
            let mut tip = NVec2::zeros(); // fixed pivot
            lengths
                .iter()
                .enumerate()
                .map(|(k, &l)| {
                    let theta = q[2 * k];
                    tip += NVec2::new(l * theta.sin(), -l * theta.cos());
                    tip
                })
                .collect()
        })
        .collect()
}
