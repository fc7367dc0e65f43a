//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`SimParameters`)
//! - the topology-specific system (`PendulumSystem` with its equations of
//!   motion and initial state, angles converted from degrees to radians)
//!
//! The topology is selected once, from the number of configured segments,
//! and is immutable for the rest of the run. `Scenario::run` drives the
//! whole pipeline: integrate, transform to Cartesian space, compute the
//! energy series, and flatten everything into a `SimulationResult` for the
//! presentation boundary.

use crate::analysis::coordinates::{to_cartesian, CartesianSeries};
use crate::analysis::energy::{double_energy, simple_energy, triple_energy, EnergySeries};
use crate::configuration::config::ScenarioConfig;
use crate::error::SimError;
use crate::simulation::eom::{DoublePendulum, SimplePendulum, TriplePendulum};
use crate::simulation::integrator::rk4_integrate;
use crate::simulation::params::SimParameters;
use crate::simulation::states::{StateVec1, StateVec2, StateVec3};

/// One pendulum topology with its equations of motion and initial state.
#[derive(Debug, Clone)]
pub enum PendulumSystem {
    Simple { eom: SimplePendulum, q0: StateVec1 },
    Double { eom: DoublePendulum, q0: StateVec2 },
    Triple { eom: TriplePendulum, q0: StateVec3 },
}

impl PendulumSystem {
    /// Number of chain segments.
    pub fn segments(&self) -> usize {
        match self {
            PendulumSystem::Simple { .. } => 1,
            PendulumSystem::Double { .. } => 2,
            PendulumSystem::Triple { .. } => 3,
        }
    }

    /// Rod lengths, pivot first.
    pub fn lengths(&self) -> Vec<f64> {
        match self {
            PendulumSystem::Simple { eom, .. } => vec![eom.l1],
            PendulumSystem::Double { eom, .. } => vec![eom.l1, eom.l2],
            PendulumSystem::Triple { eom, .. } => vec![eom.l1, eom.l2, eom.l3],
        }
    }
}

/// Fully-initialized simulation scenario: the runtime bundle constructed
/// from a [`ScenarioConfig`].
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: SimParameters,
    pub system: PendulumSystem,
}

/// Topology-erased output bundle handed to the presentation boundary.
///
/// All series share the same time grid; units are SI throughout (radians,
/// seconds, meters, kilograms, joules).
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub times: Vec<f64>,           // uniform time grid
    pub h: f64,                    // step size
    pub states: Vec<Vec<f64>>,     // per node: [θ0, ω0, θ1, ω1, ...]
    pub positions: CartesianSeries, // per node, per mass
    pub energy: EnergySeries,
}

impl Scenario {
    /// Map a `ScenarioConfig` to a runtime scenario.
    ///
    /// Initial angles and angular velocities are converted from degrees to
    /// radians here. Fails with `SimError::UnsupportedTopology` unless the
    /// configuration has exactly 1, 2 or 3 segments; masses and lengths are
    /// trusted to be positive.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        let parameters = SimParameters {
            t_start: p_cfg.t_start,
            t_end: p_cfg.t_end,
            n_steps: p_cfg.n_steps,
            g: p_cfg.g,
        };
        let g = parameters.g;

        let s = &cfg.segments;
        let th = |i: usize| s[i].theta0.to_radians();
        let om = |i: usize| s[i].omega0.to_radians();

        let system = match s.len() {
            1 => PendulumSystem::Simple {
                eom: SimplePendulum {
                    m1: s[0].m,
                    l1: s[0].l,
                    g,
                },
                q0: StateVec1::new(th(0), om(0)),
            },
            2 => PendulumSystem::Double {
                eom: DoublePendulum {
                    m1: s[0].m,
                    m2: s[1].m,
                    l1: s[0].l,
                    l2: s[1].l,
                    g,
                },
                q0: StateVec2::new(th(0), om(0), th(1), om(1)),
            },
            3 => PendulumSystem::Triple {
                eom: TriplePendulum {
                    m1: s[0].m,
                    m2: s[1].m,
                    m3: s[2].m,
                    l1: s[0].l,
                    l2: s[1].l,
                    l3: s[2].l,
                    g,
                },
                q0: StateVec3::new(th(0), om(0), th(1), om(1), th(2), om(2)),
            },
            n => return Err(SimError::UnsupportedTopology { segments: n }),
        };

        Ok(Self { parameters, system })
    }

    /// Run the full pipeline: integrate the equations of motion, derive
    /// Cartesian positions and the energy series, and flatten into a
    /// topology-erased [`SimulationResult`].
    pub fn run(&self) -> Result<SimulationResult, SimError> {
        let lengths = self.system.lengths();
        match &self.system {
            PendulumSystem::Simple { eom, q0 } => {
                let traj = rk4_integrate(eom, *q0, &self.parameters)?;
                let positions = to_cartesian(&traj, &lengths);
                let energy = simple_energy(&traj, eom);
                Ok(flatten(traj.times, traj.h, &traj.states, positions, energy))
            }
            PendulumSystem::Double { eom, q0 } => {
                let traj = rk4_integrate(eom, *q0, &self.parameters)?;
                let positions = to_cartesian(&traj, &lengths);
                let energy = double_energy(&traj, eom);
                Ok(flatten(traj.times, traj.h, &traj.states, positions, energy))
            }
            PendulumSystem::Triple { eom, q0 } => {
                let traj = rk4_integrate(eom, *q0, &self.parameters)?;
                let positions = to_cartesian(&traj, &lengths);
                let energy = triple_energy(&traj, eom);
                Ok(flatten(traj.times, traj.h, &traj.states, positions, energy))
            }
        }
    }
}

fn flatten<const D: usize>(
    times: Vec<f64>,
    h: f64,
    states: &[crate::simulation::states::StateVec<D>],
    positions: CartesianSeries,
    energy: EnergySeries,
) -> SimulationResult {
    let states = states.iter().map(|q| q.iter().copied().collect()).collect();
    SimulationResult {
        times,
        h,
        states,
        positions,
        energy,
    }
}
