use std::time::Instant;

use crate::simulation::eom::{DoublePendulum, EquationsOfMotion, SimplePendulum, TriplePendulum};
use crate::simulation::integrator::rk4_integrate;
use crate::simulation::params::{SimParameters, G_STANDARD};
use crate::simulation::states::{StateVec1, StateVec2, StateVec3};

fn bench_params(n_steps: usize) -> SimParameters {
    SimParameters {
        t_start: 0.0,
        t_end: 10.0,
        n_steps,
        g: G_STANDARD,
    }
}

/// Time a single derivative evaluation per topology, averaged over many
/// repetitions.
pub fn bench_eom() {
    let reps = 1_000_000usize;

    let simple = SimplePendulum {
        m1: 1.0,
        l1: 1.0,
        g: G_STANDARD,
    };
    let double = DoublePendulum {
        m1: 1.0,
        m2: 1.0,
        l1: 1.0,
        l2: 1.0,
        g: G_STANDARD,
    };
    let triple = TriplePendulum {
        m1: 1.0,
        m2: 1.0,
        m3: 1.0,
        l1: 1.0,
        l2: 1.0,
        l3: 1.0,
        g: G_STANDARD,
    };

    let q1 = StateVec1::new(2.0, 0.3);
    let q2 = StateVec2::new(2.0, 0.3, -1.0, 0.1);
    let q3 = StateVec3::new(2.0, 0.3, -1.0, 0.1, 0.5, -0.2);

    // Accumulate into a sink so the calls cannot be optimized away
    let mut sink = 0.0;

    let t0 = Instant::now();
    for _ in 0..reps {
        sink += simple.derivative(&q1)[1];
    }
    let dt1 = t0.elapsed().as_secs_f64();

    let t0 = Instant::now();
    for _ in 0..reps {
        sink += double.derivative(&q2)[1];
    }
    let dt2 = t0.elapsed().as_secs_f64();

    let t0 = Instant::now();
    for _ in 0..reps {
        sink += triple.derivative(&q3)[1];
    }
    let dt3 = t0.elapsed().as_secs_f64();

    println!(
        "eom eval ({reps} reps): simple = {:.1} ns, double = {:.1} ns, triple = {:.1} ns (sink {sink:.3})",
        dt1 / reps as f64 * 1e9,
        dt2 / reps as f64 * 1e9,
        dt3 / reps as f64 * 1e9,
    );
}

/// Time full RK4 runs of the triple pendulum for increasing step counts.
pub fn bench_rk4() {
    let ns = [1_000usize, 10_000, 100_000, 1_000_000];

    let triple = TriplePendulum {
        m1: 1.0,
        m2: 1.0,
        m3: 1.0,
        l1: 1.0,
        l2: 1.0,
        l3: 1.0,
        g: G_STANDARD,
    };
    let q0 = StateVec3::new(2.356, 0.0, 2.356, 0.0, 2.356, 0.0);

    for n in ns {
        let params = bench_params(n);

        // Warm up
        let _ = rk4_integrate(&triple, q0, &params);

        let t0 = Instant::now();
        let traj = rk4_integrate(&triple, q0, &params).expect("bench preconditions hold");
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "n_steps = {n:8}, run = {dt:9.6} s, {:10.0} steps/s, finite = {}",
            n as f64 / dt,
            traj.is_finite(),
        );
    }
}
