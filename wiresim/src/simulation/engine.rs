//! High-level runtime engine settings
//!
//! Options that shape how a `Scenario` is run, as opposed to the physics in
//! `Parameters`

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub max_steps: Option<u64>, // None = run until the ball reaches B
    pub isolate_failures: bool, // true = a failing shape does not stop the sweep
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            max_steps: None,
            isolate_failures: true,
        }
    }
}
