//! Equations of motion for the chained pendulum systems
//!
//! Defines the `EquationsOfMotion` trait and one closed-form implementation
//! per topology (1, 2, 3 segments). The expressions come from the Lagrangian
//! of each chain; they are hardcoded per topology rather than derived from a
//! general n-body formulation.
//!
//! All implementations are pure functions of the state: the systems are
//! autonomous, so time never appears in the right-hand side. Degenerate
//! configurations (vanishing denominators) are not special-cased; NaN/Inf
//! simply propagates through the rest of the trajectory.

use crate::simulation::states::StateVec;

/// Right-hand side of dq/dt = f(q) for one pendulum topology.
///
/// `D` is the state dimension, `2 * segment count`; the layout is
/// `[θ0, ω0, θ1, ω1, ...]`. Implementations own their physical parameters
/// (masses, lengths, gravity) and must be deterministic and side-effect free.
pub trait EquationsOfMotion<const D: usize> {
    fn derivative(&self, q: &StateVec<D>) -> StateVec<D>;
}

/// Single pendulum: one massless rod of length `l1` with point mass `m1`.
///
/// `m1` does not enter the equation of motion (it cancels out of the
/// Lagrangian) but is carried here for the energy diagnostics.
#[derive(Debug, Clone)]
pub struct SimplePendulum {
    pub m1: f64,
    pub l1: f64,
    pub g: f64,
}

impl EquationsOfMotion<2> for SimplePendulum {
    fn derivative(&self, q: &StateVec<2>) -> StateVec<2> {
        // α = -(g/l) sin θ
        StateVec::<2>::new(q[1], -(self.g / self.l1) * q[0].sin())
    }
}

/// Double pendulum: two chained rods, point masses at each rod tip.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub g: f64,
}

impl EquationsOfMotion<4> for DoublePendulum {
    fn derivative(&self, q: &StateVec<4>) -> StateVec<4> {
        let (m1, m2, l1, l2, g) = (self.m1, self.m2, self.l1, self.l2, self.g);
        let (t1, w1, t2, w2) = (q[0], q[1], q[2], q[3]);

        let sin12 = (t1 - t2).sin();
        let cos12 = (t1 - t2).cos();

        // Shared denominator factor 2m1 + m2 - m2 cos(2θ1 - 2θ2).
        // Never zero for physically sane mass ratios; not checked here.
        let den = 2.0 * m1 + m2 - m2 * (2.0 * t1 - 2.0 * t2).cos();

        let a1 = (-g * (2.0 * m1 + m2) * t1.sin()
            - m2 * g * (t1 - 2.0 * t2).sin()
            - 2.0 * sin12 * m2 * (l2 * w2 * w2 + l1 * w1 * w1 * cos12))
            / (l1 * den);

        let a2 = (2.0
            * sin12
            * (l1 * w1 * w1 * (m1 + m2) + g * (m1 + m2) * t1.cos() + m2 * l2 * w2 * w2 * cos12))
            / (l2 * den);

        StateVec::<4>::new(w1, a1, w2, a2)
    }
}

/// Triple pendulum: three chained rods, point masses at each rod tip.
///
/// The three angular accelerations are rational expressions sharing a set of
/// intermediates (suffix mass sums, pairwise cos/sin of angle differences,
/// the auxiliary terms r1/r2/r3 and the common determinant). They are
/// factored once per evaluation so the three formulas cannot drift apart.
#[derive(Debug, Clone)]
pub struct TriplePendulum {
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
    pub g: f64,
}

impl EquationsOfMotion<6> for TriplePendulum {
    fn derivative(&self, q: &StateVec<6>) -> StateVec<6> {
        let (m1, m2, m3) = (self.m1, self.m2, self.m3);
        let (l1, l2, l3) = (self.l1, self.l2, self.l3);
        let g = self.g;
        let (t1, w1, t2, w2, t3, w3) = (q[0], q[1], q[2], q[3], q[4], q[5]);

        // Suffix mass sums
        let m23 = m2 + m3;
        let m123 = m1 + m2 + m3;
        let mf = m123 / 4.0;

        let sin1 = t1.sin();
        let sin2 = t2.sin();
        let sin3 = t3.sin();

        // Pairwise angle differences
        let c12 = (t1 - t2).cos();
        let c13 = (t1 - t3).cos();
        let c23 = (t2 - t3).cos();
        let s12 = (t1 - t2).sin();
        let s13 = (t1 - t3).sin();
        let s23 = (t2 - t3).sin();

        // Auxiliary coupling terms
        let r1 = m23 * c12 * c13 - m123 * c23;
        let r2 = m123 - m23 * c12 * c12;
        let r3 = -m123 + m3 * c13 * c13;

        // Common determinant; vanishes only at degenerate alignments, in
        // which case the NaN/Inf propagates on purpose
        let det = m3 * r1 * r1 + m23 * r3 * r2;

        // Numerator terms shared across the three accelerations
        let b = r1 * c12 + r2 * c13;
        let f1 = g * m123 * sin1 + l2 * m23 * s12 * w2 * w2 + l3 * m3 * s13 * w3 * w3;
        let f2 = -g * m23 * sin2 + l1 * m23 * s12 * w1 * w1 - l3 * m3 * s23 * w3 * w3;
        let f3 = -g * sin3 + l1 * s13 * w1 * w1 + l2 * s23 * w2 * w2;

        // Extra squared-cosine term unique to the first acceleration
        let d13 = (t1 - 2.0 * t2 + t3).cos() - c13;
        let e1 = -m3 * m23 * m123 * d13 * d13;

        let a1 = mf
            * (4.0 * m3 * m23 * b * f3 * r2 - 4.0 * (det * c12 - m3 * b * r1) * f2
                - (e1 + 4.0 * det) * f1)
            / (l1 * det * m123 * r2);

        let a2 = (-m3 * r1 * m123 * f3 * r2 - (m3 * b * r1 - det * c12) * f1
            + m123 * r3 * r2 * f2)
            / (l2 * det * r2);

        let a3 = -(m23 * b * f1 + m23 * m123 * f3 * r2 + m123 * r1 * f2) / (l3 * det);

        StateVec::<6>::new(w1, a1, w2, a2, w3, a3)
    }
}
