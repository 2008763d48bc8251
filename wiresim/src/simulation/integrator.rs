//! Fixed-step time integrator for the ball on the wire
//!
//! Explicit Euler, driven by any [`Force`] and `Parameters`. The run starts
//! at A and stops as soon as the horizontal position reaches L

use tracing::debug;

use super::error::{Result, SimError};
use super::forces::Force;
use super::params::Parameters;
use super::shape::Shape;
use super::states::BallState;

/// Outcome of a completed traversal
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    pub time: f64, // elapsed time when x reached L
    pub steps: u64, // number of Euler steps taken
    pub final_state: BallState,
}

/// Advance the ball by one step of `params.dt`.
///
/// Position moves with the old velocity, then the force is evaluated at the
/// new position and the velocity is updated with it. Fails with
/// [`SimError::BackwardMotion`] if the horizontal velocity turns negative
pub fn euler_step<F>(state: &mut BallState, shape: &Shape, forces: &F, params: &Parameters) -> Result<()>
where
    F: Force + ?Sized,
{
    let dt = params.dt;

    // x_n+1 = x_n + v_n dt
    state.x += state.v.scale(dt);

    // a_n+1 = F(x_n+1) / m
    let a = forces.force(shape, state.x.x) / params.mass;

    // v_n+1 = v_n + a_n+1 dt
    state.v += a.scale(dt);
    state.t += dt;

    if state.v.x < 0.0 {
        return Err(SimError::BackwardMotion {
            time: state.t,
            x: state.x.x,
            vx: state.v.x,
        });
    }

    Ok(())
}

/// Run from A until the ball reaches the far endpoint.
///
/// `params` must be valid and carry the same `length` and `dx` the shape was
/// checked with, otherwise [`SimError::InvalidParameter`] is returned before
/// any step. With `max_steps = None` there is no iteration limit: a shape
/// that never lets the ball reach L keeps the loop running
pub fn traverse<F>(shape: &Shape, forces: &F, params: &Parameters, max_steps: Option<u64>) -> Result<Traversal>
where
    F: Force + ?Sized,
{
    params.validate()?;
    if shape.length() != params.length || shape.dx() != params.dx {
        return Err(SimError::InvalidParameter(format!(
            "shape {shape} was checked with length {} and dx {}, run uses length {} and dx {}",
            shape.length(),
            shape.dx(),
            params.length,
            params.dx
        )));
    }

    let mut state = BallState::at_start(params.v_i);
    let mut steps: u64 = 0;

    while state.x.x < params.length {
        if max_steps.is_some_and(|max| steps >= max) {
            return Err(SimError::StepLimitExceeded {
                steps,
                x: state.x.x,
            });
        }
        euler_step(&mut state, shape, forces, params)?;
        steps += 1;
    }

    debug!(
        shape = %shape,
        steps,
        time = state.t,
        vx = state.v.x,
        vz = state.v.y,
        "traversal finished"
    );

    Ok(Traversal {
        time: state.t,
        steps,
        final_state: state,
    })
}

/// Time for the ball to get from A to B along `shape`
pub fn t_final<F>(shape: &Shape, forces: &F, params: &Parameters) -> Result<f64>
where
    F: Force + ?Sized,
{
    traverse(shape, forces, params, None).map(|t| t.time)
}
