pub mod simulation;
pub mod configuration;
pub mod reporting;
pub mod benchmark;

pub use simulation::states::{BallState, NVec2, PlaneVector};
pub use simulation::params::Parameters;
pub use simulation::error::{Result, SimError};
pub use simulation::shape::{HeightFn, Shape, ShapeKind};
pub use simulation::forces::{force, Force, ForceBreakdown, WireForce};
pub use simulation::integrator::{euler_step, t_final, traverse, Traversal};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;
pub use simulation::sweep::{run_sweep, ShapeOutcome};

pub use configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig, ShapeConfig};

pub use reporting::report::{header_line, outcome_line, render};

pub use benchmark::benchmark::{bench_dt_convergence, bench_t_final};
