//! Error types for the wire simulation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("shape {shape} does not connect A and B: h(0) = {start}, h(L) = {end}, tolerance {tolerance}")]
    InvalidShape {
        shape: String,
        start: f64,
        end: f64,
        tolerance: f64,
    },

    #[error("ball moved backward at t = {time} s (x = {x}, vx = {vx})")]
    BackwardMotion { time: f64, x: f64, vx: f64 },

    #[error("step limit of {steps} reached at x = {x} before the far endpoint")]
    StepLimitExceeded { steps: u64, x: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
