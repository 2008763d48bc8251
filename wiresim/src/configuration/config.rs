//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run options (step cap, failure isolation)
//! - [`ParametersConfig`] – physical constants and numerical tolerances
//! - [`ShapeConfig`]      – the shapes to race, or sweeps over shape families
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! ```yaml
//! engine:
//!   max_steps: ~            # optional cap on Euler steps per shape
//!   isolate_failures: true  # keep going when one shape fails
//!
//! parameters:
//!   mass: 0.1               # ball mass
//!   mu: 0.0                 # friction coefficient
//!   length: 1.0             # distance from A to B
//!   g: 9.81                 # gravitational acceleration
//!   v_i: [ 1.0, 0.0 ]       # initial velocity (x, z)
//!   dx: 1.0e-6              # negligible distance
//!   dt: 1.0e-7              # time step
//!
//! shapes:
//!   - kind: straight
//!   - kind: cosine
//!     n: 1
//!     a: 0.05
//!   - kind: cosine_sweep    # every (n, a) pair
//!     n: [ 1, 2 ]
//!     a: [ 0.01, 0.05 ]
//! ```
//!
//! The scenario builder maps this into the runtime `Scenario`, validating the
//! parameters and every shape on the way.

use serde::Deserialize;

/// Run options
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub max_steps: Option<u64>, // None = no limit
    #[serde(default = "default_isolate")]
    pub isolate_failures: bool, // `true` - report a failing shape and move on, `false` - abort the sweep
}

fn default_isolate() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            isolate_failures: default_isolate(),
        }
    }
}

/// Physical constants and numerical tolerances
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub mass: f64,   // ball mass
    pub mu: f64,     // kinetic friction coefficient
    pub length: f64, // horizontal distance between A and B
    pub g: f64,      // gravitational acceleration
    pub v_i: Vec<f64>, // initial velocity, `[x, z]`
    pub dx: f64,     // boundary tolerance and secant width
    pub dt: f64,     // integration time step
}

/// One entry of the shape catalog
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum ShapeConfig {
    #[serde(rename = "straight")] // h(x) = 0
    Straight,

    #[serde(rename = "cosine")] // h(x) = a (cos(2 pi n x / L) - 1)
    Cosine { n: u32, a: f64 },

    #[serde(rename = "cosine_sweep")] // one cosine shape per (n, a) pair, n-major
    CosineSweep { n: Vec<u32>, a: Vec<f64> },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Run options
    pub parameters: ParametersConfig, // Physical and numerical parameters
    pub shapes: Vec<ShapeConfig>, // Shapes to traverse, in report order
}
