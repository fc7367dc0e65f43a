use pendsim::simulation::eom::{DoublePendulum, EquationsOfMotion, SimplePendulum, TriplePendulum};
use pendsim::simulation::integrator::rk4_integrate;
use pendsim::simulation::params::{SimParameters, G_STANDARD};
use pendsim::simulation::scenario::Scenario;
use pendsim::simulation::states::{StateVec1, StateVec2, StateVec3, Trajectory};
use pendsim::analysis::coordinates::to_cartesian;
use pendsim::analysis::energy::{double_energy, simple_energy, triple_energy};
use pendsim::configuration::config::ScenarioConfig;
use pendsim::error::SimError;

use std::f64::consts::PI;

/// Default physics parameters for tests: t in [0, 10], 1000 steps
pub fn test_params() -> SimParameters {
    SimParameters {
        t_start: 0.0,
        t_end: 10.0,
        n_steps: 1000,
        g: G_STANDARD,
    }
}

/// Unit single pendulum (m = l = 1)
pub fn unit_simple() -> SimplePendulum {
    SimplePendulum {
        m1: 1.0,
        l1: 1.0,
        g: G_STANDARD,
    }
}

/// Unit double pendulum (all m = l = 1)
pub fn unit_double() -> DoublePendulum {
    DoublePendulum {
        m1: 1.0,
        m2: 1.0,
        l1: 1.0,
        l2: 1.0,
        g: G_STANDARD,
    }
}

/// Unit triple pendulum (all m = l = 1)
pub fn unit_triple() -> TriplePendulum {
    TriplePendulum {
        m1: 1.0,
        m2: 1.0,
        m3: 1.0,
        l1: 1.0,
        l2: 1.0,
        l3: 1.0,
        g: G_STANDARD,
    }
}

/// Parse a YAML scenario and build the runtime bundle
pub fn scenario_from_yaml(yaml: &str) -> Result<Scenario, SimError> {
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("test YAML parses");
    Scenario::build_scenario(cfg)
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn trajectory_matches_time_grid_invariants() {
    let p = test_params();
    let traj = rk4_integrate(&unit_simple(), StateVec1::new(0.3, 0.0), &p).unwrap();

    assert_eq!(traj.states.len(), p.n_steps + 1);
    assert_eq!(traj.times.len(), p.n_steps + 1);
    assert_eq!(traj.times[0], p.t_start);
    assert!((traj.times[p.n_steps] - p.t_end).abs() < 1e-9);
    assert!((traj.h - (p.t_end - p.t_start) / p.n_steps as f64).abs() < 1e-15);
}

#[test]
fn integrator_rejects_zero_steps() {
    let mut p = test_params();
    p.n_steps = 0;
    let err = rk4_integrate(&unit_simple(), StateVec1::new(0.3, 0.0), &p).unwrap_err();
    assert_eq!(err, SimError::InvalidStepCount { n_steps: 0 });
}

#[test]
fn integrator_rejects_empty_time_span() {
    let mut p = test_params();
    p.t_end = p.t_start;
    let err = rk4_integrate(&unit_simple(), StateVec1::new(0.3, 0.0), &p).unwrap_err();
    assert!(matches!(err, SimError::InvalidTimeSpan { .. }));
}

#[test]
fn integrator_is_deterministic() {
    let p = test_params();
    let q0 = StateVec3::new(2.0, 0.1, -1.0, 0.0, 0.5, -0.3);
    let a = rk4_integrate(&unit_triple(), q0, &p).unwrap();
    let b = rk4_integrate(&unit_triple(), q0, &p).unwrap();
    assert_eq!(a, b, "identical inputs must give bit-identical trajectories");
}

#[test]
fn rk4_fourth_order_convergence() {
    // Halving h must shrink the global error by roughly 2^4 = 16. The error
    // is measured at t_end against a much finer reference run.
    let eom = unit_simple();
    let q0 = StateVec1::new(2.0, 0.0);
    let run = |n_steps| {
        let p = SimParameters {
            t_start: 0.0,
            t_end: 2.0,
            n_steps,
            g: G_STANDARD,
        };
        *rk4_integrate(&eom, q0, &p).unwrap().states.last().unwrap()
    };

    let reference = run(8192);
    let err_h = (run(64) - reference).norm();
    let err_h2 = (run(128) - reference).norm();

    let ratio = err_h / err_h2;
    assert!(
        ratio > 10.0 && ratio < 24.0,
        "expected ~16x error reduction on halving h, got {ratio}"
    );
}

// ==================================================================================
// Equations of motion tests
// ==================================================================================

#[test]
fn all_topologies_rest_at_stable_equilibrium() {
    let d1 = unit_simple().derivative(&StateVec1::zeros());
    let d2 = unit_double().derivative(&StateVec2::zeros());
    let d3 = unit_triple().derivative(&StateVec3::zeros());
    assert!(d1.norm() == 0.0 && d2.norm() == 0.0 && d3.norm() == 0.0);
}

#[test]
fn small_amplitude_matches_simple_harmonic_motion() {
    // θ(t) ≈ θ0 cos(sqrt(g/l) t) for small θ0
    let theta0 = 5.0_f64.to_radians();
    let p = SimParameters {
        t_start: 0.0,
        t_end: 2.0,
        n_steps: 2000,
        g: G_STANDARD,
    };
    let traj = rk4_integrate(&unit_simple(), StateVec1::new(theta0, 0.0), &p).unwrap();

    let w = G_STANDARD.sqrt(); // sqrt(g/l), l = 1
    let max_err = traj
        .times
        .iter()
        .zip(&traj.states)
        .map(|(t, q)| (q[0] - theta0 * (w * t).cos()).abs())
        .fold(0.0, f64::max);

    assert!(max_err < 1e-3, "SHM deviation too large: {max_err}");
}

#[test]
fn double_reduces_to_simple_as_m2_vanishes() {
    // With m2 -> 0 the inner segment must obey the single-pendulum equation
    let eom2 = DoublePendulum {
        m2: 1e-12,
        ..unit_double()
    };
    let eom1 = unit_simple();

    for (t1, w1, t2, w2) in [
        (0.5, 0.0, -0.3, 0.2),
        (2.356, 1.0, 1.0, -2.0),
        (-1.2, -0.4, 0.9, 0.0),
    ] {
        let d2 = eom2.derivative(&StateVec2::new(t1, w1, t2, w2));
        let d1 = eom1.derivative(&StateVec1::new(t1, w1));
        assert!(
            (d2[1] - d1[1]).abs() < 1e-6,
            "inner acceleration {} should reduce to {}",
            d2[1],
            d1[1]
        );
    }
}

#[test]
fn triple_reduces_to_double_as_m3_vanishes() {
    let eom3 = TriplePendulum {
        m3: 1e-12,
        ..unit_triple()
    };
    let eom2 = unit_double();

    for (t1, w1, t2, w2) in [(0.5, 0.0, -0.3, 0.2), (2.0, 1.0, 1.0, -2.0)] {
        let d3 = eom3.derivative(&StateVec3::new(t1, w1, t2, w2, 0.7, 0.1));
        let d2 = eom2.derivative(&StateVec2::new(t1, w1, t2, w2));
        assert!(
            (d3[1] - d2[1]).abs() < 1e-5 && (d3[3] - d2[3]).abs() < 1e-5,
            "inner accelerations ({}, {}) should reduce to ({}, {})",
            d3[1],
            d3[3],
            d2[1],
            d2[3]
        );
    }
}

// ==================================================================================
// Energy conservation tests
// ==================================================================================

#[test]
fn simple_pendulum_135_degrees_conserves_energy() {
    // Release from 135 degrees at rest: E0 = 0, U0 = -g cos(135°) ≈ 6.936 J.
    let theta0 = 135.0_f64.to_radians();
    let p = test_params();
    let eom = unit_simple();
    let traj = rk4_integrate(&eom, StateVec1::new(theta0, 0.0), &p).unwrap();
    let energy = simple_energy(&traj, &eom);

    let t0 = energy.total[0];
    assert!((t0 - 6.936).abs() < 1e-2, "unexpected initial energy {t0}");
    assert!(
        energy.max_drift() < 0.01 * t0.abs(),
        "energy drift {} exceeds 1% of {t0}",
        energy.max_drift()
    );

    // The swing must never exceed the release amplitude and its period is
    // longer than the small-angle period (~2.006 s): the first crossing of
    // the vertical happens later than a small-angle quarter period.
    let max_theta = traj.states.iter().map(|q| q[0].abs()).fold(0.0, f64::max);
    assert!(max_theta <= theta0 + 1e-3, "amplitude grew to {max_theta}");

    let first_crossing = traj
        .times
        .iter()
        .zip(&traj.states)
        .find(|(_, q)| q[0] <= 0.0)
        .map(|(t, _)| *t)
        .expect("pendulum never crossed the vertical");
    assert!(
        first_crossing > 0.55,
        "quarter period {first_crossing} too short for a 135° swing"
    );
}

#[test]
fn double_pendulum_conserves_energy_at_small_step() {
    let p = SimParameters {
        t_start: 0.0,
        t_end: 10.0,
        n_steps: 10_000,
        g: G_STANDARD,
    };
    let eom = unit_double();
    let q0 = StateVec2::new(0.5 * PI, 0.0, 0.0, 0.0);
    let traj = rk4_integrate(&eom, q0, &p).unwrap();
    let energy = double_energy(&traj, &eom);

    assert!(traj.is_finite());
    assert!(
        energy.max_drift() < 0.01,
        "energy drift {} J too large at h = 0.001",
        energy.max_drift()
    );
}

#[test]
fn triple_pendulum_default_run_stays_finite() {
    // All m = l = 1, all angles released from 135° at rest: chaotic, but the
    // full 10 s trajectory must stay finite at h = 0.01.
    let theta0 = 135.0_f64.to_radians();
    let p = test_params();
    let eom = unit_triple();
    let q0 = StateVec3::new(theta0, 0.0, theta0, 0.0, theta0, 0.0);
    let traj = rk4_integrate(&eom, q0, &p).unwrap();

    assert!(traj.is_finite(), "trajectory picked up NaN/Inf");
    let energy = triple_energy(&traj, &eom);
    assert!(energy.total.iter().all(|t| t.is_finite()));
}

// ==================================================================================
// Coordinate transform and diagnostics tests
// ==================================================================================

#[test]
fn cartesian_chain_accumulates_rod_vectors() {
    // One hand-built node: all three rods horizontal (θ = 90°) puts the
    // masses at x = 1, 2, 3 on the pivot height; all rods down (θ = 0)
    // stacks them at y = -1, -2, -3.
    let horizontal = Trajectory::<6> {
        states: vec![StateVec3::new(0.5 * PI, 0.0, 0.5 * PI, 0.0, 0.5 * PI, 0.0)],
        times: vec![0.0],
        h: 1.0,
    };
    let hanging = Trajectory::<6> {
        states: vec![StateVec3::zeros()],
        times: vec![0.0],
        h: 1.0,
    };
    let lengths = [1.0, 1.0, 1.0];

    let pos = to_cartesian(&horizontal, &lengths);
    for (k, p) in pos[0].iter().enumerate() {
        assert!((p.x - (k + 1) as f64).abs() < 1e-12 && p.y.abs() < 1e-12);
    }

    let pos = to_cartesian(&hanging, &lengths);
    for (k, p) in pos[0].iter().enumerate() {
        assert!(p.x.abs() < 1e-12 && (p.y + (k + 1) as f64).abs() < 1e-12);
    }
}

#[test]
fn transforms_are_pure_and_repeatable() {
    let p = test_params();
    let eom = unit_double();
    let q0 = StateVec2::new(2.0, 0.0, -1.0, 0.5);
    let traj = rk4_integrate(&eom, q0, &p).unwrap();

    let lengths = [eom.l1, eom.l2];
    assert_eq!(to_cartesian(&traj, &lengths), to_cartesian(&traj, &lengths));
    assert_eq!(double_energy(&traj, &eom), double_energy(&traj, &eom));
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_runs_end_to_end_from_yaml() {
    let scenario = scenario_from_yaml(
        "parameters:\n  t_start: 0.0\n  t_end: 1.0\n  n_steps: 100\nsegments:\n  - { m: 1.0, l: 1.0, theta0: 135.0, omega0: 0.0 }\n  - { m: 1.0, l: 1.0, theta0: 135.0, omega0: 0.0 }\n",
    )
    .unwrap();

    // g defaulted, degrees converted
    assert_eq!(scenario.parameters.g, G_STANDARD);
    assert_eq!(scenario.system.segments(), 2);

    let result = scenario.run().unwrap();
    assert_eq!(result.times.len(), 101);
    assert_eq!(result.states.len(), 101);
    assert_eq!(result.positions.len(), 101);
    assert_eq!(result.energy.total.len(), 101);
    assert_eq!(result.states[0].len(), 4);
    assert!((result.states[0][0] - 135.0_f64.to_radians()).abs() < 1e-12);
}

#[test]
fn scenario_rejects_unsupported_topologies() {
    let seg = "  - { m: 1.0, l: 1.0, theta0: 10.0, omega0: 0.0 }\n";
    let header = "parameters:\n  t_start: 0.0\n  t_end: 1.0\n  n_steps: 10\nsegments:\n";

    let none = scenario_from_yaml(
        "parameters:\n  t_start: 0.0\n  t_end: 1.0\n  n_steps: 10\nsegments: []\n",
    );
    assert!(matches!(
        none,
        Err(SimError::UnsupportedTopology { segments: 0 })
    ));

    let four = scenario_from_yaml(&format!("{header}{}", seg.repeat(4)));
    assert!(matches!(
        four,
        Err(SimError::UnsupportedTopology { segments: 4 })
    ));
}
