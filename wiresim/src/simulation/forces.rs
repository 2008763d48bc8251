//! Force contributors for the wire engine
//!
//! Defines the [`Force`] trait the integrator is driven by, and the
//! [`WireForce`] model: gravity, the constraint reaction of the wire and
//! kinetic friction

use super::params::Parameters;
use super::shape::Shape;
use super::states::{NVec2, PlaneVector};

/// Trait for net force sources acting on the ball.
/// Implementations return the total force at horizontal position `x` on `shape`
pub trait Force {
    fn force(&self, shape: &Shape, x: f64) -> NVec2;
}

/// The three components that make up the force on the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: NVec2,
    pub normal: NVec2, // reaction of the wire
    pub friction: NVec2,
}

impl ForceBreakdown {
    pub fn total(&self) -> NVec2 {
        self.gravity + self.normal + self.friction
    }
}

/// Gravity plus wire reaction plus kinetic friction.
///
/// Friction points along the normal rotated left by 90 degrees, which for a
/// left-pointing normal is backward along the wire. It does not look at the
/// velocity, so a ball that has stopped keeps being pushed toward A
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireForce {
    pub mass: f64, // ball mass
    pub g: f64, // gravitational acceleration
    pub mu: f64, // friction coefficient
}

impl WireForce {
    pub fn new(params: &Parameters) -> Self {
        Self {
            mass: params.mass,
            g: params.g,
            mu: params.mu,
        }
    }

    /// Compute each component of the force at `x`
    pub fn breakdown(&self, shape: &Shape, x: f64) -> ForceBreakdown {
        // Weight, straight down
        let gravity = NVec2::new(0.0, -self.mass * self.g);

        // Unit normal of the wire at x
        let n = shape.normal(x);

        // Reaction cancels the normal component of gravity:
        // fNormal = -n (gravity . n)
        let normal = -n.scale(gravity.dot(&n));

        // Coulomb magnitude mu |fNormal| along the tangent n rotated left
        let tangent = n.rotate_left_90();
        let friction = tangent.scale(self.mu * normal.norm());

        ForceBreakdown {
            gravity,
            normal,
            friction,
        }
    }
}

impl Force for WireForce {
    fn force(&self, shape: &Shape, x: f64) -> NVec2 {
        self.breakdown(shape, x).total()
    }
}

/// Net force on the ball at `x` for the given parameters
pub fn force(params: &Parameters, shape: &Shape, x: f64) -> NVec2 {
    WireForce::new(params).force(shape, x)
}
