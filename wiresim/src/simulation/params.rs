//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - mass, friction coefficient and gravitational acceleration,
//! - distance `length` between the endpoints A and B,
//! - initial velocity `v_i`,
//! - negligible distance `dx` and integration step `dt`

use super::error::{Result, SimError};
use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub mass: f64, // ball mass
    pub mu: f64, // kinetic friction coefficient
    pub length: f64, // horizontal distance from A to B
    pub g: f64, // gravitational acceleration
    pub v_i: NVec2, // initial velocity
    pub dx: f64, // negligible distance (boundary tolerance and secant width)
    pub dt: f64, // fixed time step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 0.1,
            mu: 0.0,
            length: 1.0,
            g: 9.81,
            v_i: NVec2::new(1.0, 0.0),
            dx: 1.0e-6,
            dt: 1.0e-7,
        }
    }
}

impl Parameters {
    /// Reject values the integrator cannot make progress with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("mass", self.mass),
            ("length", self.length),
            ("dx", self.dx),
            ("dt", self.dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let finite = [
            ("mu", self.mu),
            ("g", self.g),
            ("v_i.x", self.v_i.x),
            ("v_i.z", self.v_i.y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}
