pub mod states;
pub mod params;
pub mod error;
pub mod shape;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod sweep;
