//! Mechanical energy diagnostics
//!
//! Computes kinetic, potential and total energy along a trajectory, one
//! closed form per topology. For this undamped, unforced system the total
//! is a conserved quantity, so its drift along the trajectory bounds the
//! integrator's accumulated truncation error — the primary correctness
//! oracle, since no closed-form trajectory exists for 2 or 3 segments.
//!
//! Diagnostic only: nothing here feeds back into the integration.
//!
//! Kinetic terms follow the chain rule for the velocity of each mass: a
//! `½ (suffix mass sum) lᵢ² ωᵢ²` term per segment plus a cross term
//! `(suffix mass sum) lᵢ lⱼ ωᵢ ωⱼ cos(θᵢ - θⱼ)` for every pair i < j,
//! weighted by the total mass at or beyond the outer segment. Potential
//! energy weighs each rod's height by the total mass it supports, zero
//! reference at the pivot height.

use crate::simulation::eom::{DoublePendulum, SimplePendulum, TriplePendulum};
use crate::simulation::states::Trajectory;

/// Kinetic, potential and total mechanical energy at every time node.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySeries {
    pub kinetic: Vec<f64>,
    pub potential: Vec<f64>,
    pub total: Vec<f64>,
}

impl EnergySeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            kinetic: Vec::with_capacity(n),
            potential: Vec::with_capacity(n),
            total: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, e: f64, u: f64) {
        self.kinetic.push(e);
        self.potential.push(u);
        self.total.push(e + u);
    }

    /// Largest absolute deviation of the total energy from its initial
    /// value. Empty series report zero drift.
    pub fn max_drift(&self) -> f64 {
        match self.total.first() {
            Some(&t0) => self
                .total
                .iter()
                .map(|t| (t - t0).abs())
                .fold(0.0, f64::max),
            None => 0.0,
        }
    }
}

/// Energies of the single pendulum along `traj`.
pub fn simple_energy(traj: &Trajectory<2>, p: &SimplePendulum) -> EnergySeries {
    let mut out = EnergySeries::with_capacity(traj.states.len());
    for q in &traj.states {
        let (t1, w1) = (q[0], q[1]);
        let e = 0.5 * p.m1 * p.l1 * p.l1 * w1 * w1;
        let u = -p.m1 * p.g * p.l1 * t1.cos();
        out.push(e, u);
    }
    out
}

/// Energies of the double pendulum along `traj`.
pub fn double_energy(traj: &Trajectory<4>, p: &DoublePendulum) -> EnergySeries {
    let (m1, m2, l1, l2, g) = (p.m1, p.m2, p.l1, p.l2, p.g);
    let mut out = EnergySeries::with_capacity(traj.states.len());
    for q in &traj.states {
        let (t1, w1, t2, w2) = (q[0], q[1], q[2], q[3]);
        let e = 0.5 * (m1 + m2) * l1 * l1 * w1 * w1
            + 0.5 * m2 * l2 * l2 * w2 * w2
            + m2 * l1 * l2 * w1 * w2 * (t1 - t2).cos();
        let u = -m1 * g * l1 * t1.cos() - m2 * g * (l1 * t1.cos() + l2 * t2.cos());
        out.push(e, u);
    }
    out
}

/// Energies of the triple pendulum along `traj`.
pub fn triple_energy(traj: &Trajectory<6>, p: &TriplePendulum) -> EnergySeries {
    let (m1, m2, m3) = (p.m1, p.m2, p.m3);
    let (l1, l2, l3) = (p.l1, p.l2, p.l3);
    let g = p.g;
    let m23 = m2 + m3;
    let m123 = m1 + m2 + m3;

    let mut out = EnergySeries::with_capacity(traj.states.len());
    for q in &traj.states {
        let (t1, w1, t2, w2, t3, w3) = (q[0], q[1], q[2], q[3], q[4], q[5]);
        let e = 0.5 * m123 * l1 * l1 * w1 * w1
            + 0.5 * m23 * l2 * l2 * w2 * w2
            + 0.5 * m3 * l3 * l3 * w3 * w3
            + m23 * l1 * l2 * w1 * w2 * (t1 - t2).cos()
            + m3 * l1 * l3 * w1 * w3 * (t1 - t3).cos()
            + m3 * l2 * l3 * w2 * w3 * (t2 - t3).cos();
        let u = -g * (l1 * m123 * t1.cos() + l2 * m23 * t2.cos() + l3 * m3 * t3.cos());
        out.push(e, u);
    }
    out
}
