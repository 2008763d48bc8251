//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - engine settings (`Engine`)
//! - physical and numerical parameters (`Parameters`)
//! - the validated shape catalog, in report order
//! - the force model (`WireForce`)

use crate::configuration::config::{ParametersConfig, ScenarioConfig, ShapeConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::{Result, SimError};
use crate::simulation::forces::WireForce;
use crate::simulation::params::Parameters;
use crate::simulation::shape::Shape;
use crate::simulation::states::NVec2;

/// Everything needed to run and report one experiment
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub shapes: Vec<Shape>,
    pub forces: WireForce,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let parameters = build_parameters(&cfg.parameters)?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            max_steps: cfg.engine.max_steps,
            isolate_failures: cfg.engine.isolate_failures,
        };

        // Shapes: expand sweeps, validate every curve against the endpoints
        let mut shapes = Vec::new();
        for shape_cfg in &cfg.shapes {
            shapes.extend(build_shapes(shape_cfg, &parameters)?);
        }

        let forces = WireForce::new(&parameters);

        Ok(Self {
            engine,
            parameters,
            shapes,
            forces,
        })
    }

    /// Scenario over the given shapes with default engine settings.
    ///
    /// Fails if the parameters are invalid or differ in `length`/`dx` from
    /// the ones a shape was checked with
    pub fn from_shapes(parameters: Parameters, shapes: Vec<Shape>) -> Result<Self> {
        parameters.validate()?;
        if let Some(shape) = shapes
            .iter()
            .find(|s| s.length() != parameters.length || s.dx() != parameters.dx)
        {
            return Err(SimError::InvalidParameter(format!(
                "shape {shape} was checked with length {} and dx {}, scenario uses length {} and dx {}",
                shape.length(),
                shape.dx(),
                parameters.length,
                parameters.dx
            )));
        }

        let forces = WireForce::new(&parameters);
        Ok(Self {
            engine: Engine::default(),
            parameters,
            shapes,
            forces,
        })
    }
}

fn build_parameters(p_cfg: &ParametersConfig) -> Result<Parameters> {
    let v_i = match p_cfg.v_i.as_slice() {
        [x, z] => NVec2::new(*x, *z),
        other => {
            return Err(SimError::InvalidParameter(format!(
                "v_i must have 2 components, got {}",
                other.len()
            )))
        }
    };

    let parameters = Parameters {
        mass: p_cfg.mass,
        mu: p_cfg.mu,
        length: p_cfg.length,
        g: p_cfg.g,
        v_i,
        dx: p_cfg.dx,
        dt: p_cfg.dt,
    };
    parameters.validate()?;

    Ok(parameters)
}

fn build_shapes(shape_cfg: &ShapeConfig, params: &Parameters) -> Result<Vec<Shape>> {
    match shape_cfg {
        ShapeConfig::Straight => Ok(vec![Shape::straight(params)?]),
        ShapeConfig::Cosine { n, a } => Ok(vec![Shape::cosine(*n, *a, params)?]),
        ShapeConfig::CosineSweep { n, a } => n
            .iter()
            .flat_map(|n| a.iter().map(move |a| (*n, *a)))
            .map(|(n, a)| Shape::cosine(n, a, params))
            .collect(),
    }
}
