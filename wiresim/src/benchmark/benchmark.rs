use std::time::Instant;

use crate::simulation::error::Result;
use crate::simulation::forces::WireForce;
use crate::simulation::integrator::{t_final, traverse};
use crate::simulation::params::Parameters;
use crate::simulation::shape::Shape;

/// Parameters of the reference scenario with step size `dt`
fn make_params(dt: f64) -> Parameters {
    Parameters {
        dt,
        ..Parameters::default()
    }
}

/// Wall-clock time of a full traversal for a few shapes and step sizes
pub fn bench_t_final() -> Result<()> {
    // Step sizes to test
    let dts = [1.0e-4, 1.0e-5, 1.0e-6, 1.0e-7];

    for dt in dts {
        let params = make_params(dt);
        let forces = WireForce::new(&params);

        let shapes = [
            Shape::straight(&params)?,
            Shape::cosine(1, 0.05, &params)?,
            Shape::cosine(3, 0.01, &params)?,
        ];

        for shape in &shapes {
            // Warm up
            t_final(shape, &forces, &params)?;

            let t0 = Instant::now();
            let run = traverse(shape, &forces, &params, None)?;
            let elapsed = t0.elapsed().as_secs_f64();
            let ns_per_step = elapsed * 1.0e9 / run.steps as f64;

            println!(
                "dt = {dt:8.1e}, {:<28} t_final = {:.6} s, steps = {:9}, wall = {elapsed:8.4} s, {ns_per_step:6.1} ns/step",
                shape.to_string(), run.time, run.steps
            );
        }
    }

    Ok(())
}

/// Error of the straight-line time against the analytic L / vI.x
/// Paste output directly into a spreadsheet to graph
pub fn bench_dt_convergence() -> Result<()> {
    println!("dt,t_final,abs_err,wall_ms");

    // Half a decade per row
    for k in 6..=14 {
        let dt = 10f64.powf(-(k as f64) / 2.0);
        let params = make_params(dt);
        let forces = WireForce::new(&params);
        let shape = Shape::straight(&params)?;
        let exact = params.length / params.v_i.x;

        let t0 = Instant::now();
        let t = t_final(&shape, &forces, &params)?;
        let wall_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{:e},{:.9},{:e},{:.3}", dt, t, (t - exact).abs(), wall_ms);
    }

    Ok(())
}
