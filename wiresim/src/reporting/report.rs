//! Plain-text report of a sweep
//!
//! One header line with the constants, then one line per shape with its
//! traversal time in seconds (6 fractional digits) or the reason it failed

use crate::simulation::params::Parameters;
use crate::simulation::sweep::ShapeOutcome;

pub fn header_line(p: &Parameters) -> String {
    format!(
        "m = {} kg, mu = {}, L = {} m, g = {} m/s^2, vI = ({}, {}) m/s, dx = {:e} m, dt = {:e} s",
        p.mass, p.mu, p.length, p.g, p.v_i.x, p.v_i.y, p.dx, p.dt
    )
}

pub fn outcome_line(outcome: &ShapeOutcome) -> String {
    match &outcome.result {
        Ok(time) => format!("{}: {:.6} s", outcome.description, time),
        Err(e) => format!("{}: failed ({e})", outcome.description),
    }
}

/// Header followed by every outcome, newline terminated
pub fn render(p: &Parameters, outcomes: &[ShapeOutcome]) -> String {
    let mut out = header_line(p);
    out.push('\n');
    for outcome in outcomes {
        out.push_str(&outcome_line(outcome));
        out.push('\n');
    }
    out
}
