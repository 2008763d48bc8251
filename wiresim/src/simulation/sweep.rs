//! Run every shape of a scenario and collect the traversal times

use tracing::{info, warn};

use super::error::Result;
use super::integrator::traverse;
use super::scenario::Scenario;

/// Result of one shape of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutcome {
    pub description: String,
    pub result: Result<f64>, // time to traverse, in seconds
}

/// Traverse each shape in catalog order.
///
/// With `engine.isolate_failures` a failing shape is recorded and the sweep
/// continues; otherwise the first error is returned
pub fn run_sweep(scenario: &Scenario) -> Result<Vec<ShapeOutcome>> {
    let mut outcomes = Vec::with_capacity(scenario.shapes.len());

    for shape in &scenario.shapes {
        let result = traverse(
            shape,
            &scenario.forces,
            &scenario.parameters,
            scenario.engine.max_steps,
        )
        .map(|t| t.time);

        match &result {
            Ok(time) => info!(shape = %shape, time, "shape traversed"),
            Err(e) if scenario.engine.isolate_failures => warn!(shape = %shape, error = %e, "shape failed"),
            Err(e) => return Err(e.clone()),
        }

        outcomes.push(ShapeOutcome {
            description: shape.to_string(),
            result,
        });
    }

    Ok(outcomes)
}
