//! Fixed-step time integrator for the pendulum systems
//!
//! Provides a classical 4th-order Runge-Kutta stepper, topology-agnostic,
//! driven by any `EquationsOfMotion` implementation. No adaptive step
//! control and no stability check: instability near denominator-singular
//! configurations is a known, accepted limitation.

use crate::error::SimError;
use crate::simulation::eom::EquationsOfMotion;
use crate::simulation::params::SimParameters;
use crate::simulation::states::{StateVec, Trajectory};

/// Integrate dq/dt = f(q) from `params.t_start` to `params.t_end` with
/// `params.n_steps` fixed RK4 steps, starting from `q0`.
///
/// Preconditions are checked before any work: `n_steps >= 1` and
/// `t_end > t_start`. The result holds `n_steps + 1` states, one per node
/// of the uniform time grid.
///
/// Local truncation error is O(h^5) per step, global error O(h^4), assuming
/// f is smooth in the evaluated region. Deterministic: identical inputs
/// always produce the identical output sequence.
pub fn rk4_integrate<const D: usize, F>(
    eom: &F,
    q0: StateVec<D>,
    params: &SimParameters,
) -> Result<Trajectory<D>, SimError>
where
    F: EquationsOfMotion<D>,
{
    if params.n_steps < 1 {
        return Err(SimError::InvalidStepCount {
            n_steps: params.n_steps,
        });
    }
    if params.t_end <= params.t_start {
        return Err(SimError::InvalidTimeSpan {
            t_start: params.t_start,
            t_end: params.t_end,
        });
    }

    let n = params.n_steps;
    let h = params.step_size();

    let mut states = Vec::with_capacity(n + 1);
    let mut times = Vec::with_capacity(n + 1);
    states.push(q0);
    times.push(params.t_start);

    let mut q = q0;
    for i in 0..n {
        // Classical four-stage RK4. The systems are autonomous, so the
        // stage times never enter the right-hand side.
        let k1 = eom.derivative(&q) * h;
        let k2 = eom.derivative(&(q + k1 * 0.5)) * h;
        let k3 = eom.derivative(&(q + k2 * 0.5)) * h;
        let k4 = eom.derivative(&(q + k3)) * h;

        q += (k1 + (k2 + k3) * 2.0 + k4) / 6.0;

        states.push(q);
        times.push(params.t_start + (i + 1) as f64 * h);
    }

    Ok(Trajectory { states, times, h })
}
