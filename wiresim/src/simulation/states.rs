//! Core state types for the wire simulation.
//!
//! Defines the planar vector type and the per-run ball state:
//! - `NVec2` is an `(x, z)` pair, `z` being the vertical axis of the plane
//! - `PlaneVector` adds the in-plane operations nalgebra does not name
//! - `BallState` holds position, velocity and elapsed time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Planar helpers on top of nalgebra's vector algebra.
///
/// Addition, subtraction, negation, division by a scalar, `dot`, `norm` and
/// `normalize` come from nalgebra directly
pub trait PlaneVector {
    /// Multiply every component by `s`
    fn scale(&self, s: f64) -> Self;

    /// Rotate 90 degrees counter-clockwise: `(x, z) -> (-z, x)`
    fn rotate_left_90(&self) -> Self;

    /// Second (vertical) component
    fn vertical(&self) -> f64;
}

impl PlaneVector for NVec2 {
    fn scale(&self, s: f64) -> Self {
        self * s
    }

    fn rotate_left_90(&self) -> Self {
        NVec2::new(-self.y, self.x)
    }

    fn vertical(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BallState {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub t: f64, // elapsed time
}

impl BallState {
    /// Ball at the first endpoint A = (0, 0), moving with `v_i`
    pub fn at_start(v_i: NVec2) -> Self {
        Self {
            x: NVec2::zeros(),
            v: v_i,
            t: 0.0,
        }
    }
}
