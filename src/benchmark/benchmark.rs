use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceAccum, ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a deterministic System of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e11,
            (i_f * 0.13).cos() * 5.0e11,
            (i_f * 0.07).sin() * 5.0e11,
        );

        bodies.push(Body {
            x,
            v: NVec3::zeros(),
            m: 2.0e27,
        });
    }

    System::new(bodies)
}

fn make_params(n: usize, steps: usize) -> Parameters {
    Parameters {
        n,
        dt: 1.0,
        steps,
        g: 6.67e-11,
        eps: 1.0e9,
        stride: 1,
        size: 1.0e12,
        scale_factor: 0.0,
    }
}

/// Time a single direct-gravity force pass for a range of system sizes.
pub fn bench_forces() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = make_params(n, 1);
        let sys = make_system(n);
        let gravity = ForceSet::new().with(NewtonianGravity {
            g: params.g,
            eps: params.eps,
        });

        let mut out = vec![ForceAccum::zero(); n];

        // Warm up
        gravity.accumulate_forces(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.accumulate_forces(0.0, &sys, &mut out);
        let dt_pass = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {:8.6} s", dt_pass);
    }
}

/// Benchmark full engine steps (force pass + integrate + record + commit)
/// for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,ms_per_step");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: fewer steps to keep the curve quick
        let steps = if n <= 800 { 5 } else { 2 };

        let params = make_params(n, steps);
        let forces = ForceSet::new().with(NewtonianGravity {
            g: params.g,
            eps: params.eps,
        });
        let scenario = Scenario {
            parameters: params,
            system: make_system(n),
            forces,
        };

        let mut engine = Engine::new(scenario).expect("benchmark log allocation failed");

        let t0 = Instant::now();
        engine.run();
        let ms_per_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms_per_step);
    }
}
