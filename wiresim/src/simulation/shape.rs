//! Wire shapes: a height function h(x) over [0, L]
//!
//! A [`Shape`] can only be obtained through a validating constructor, so every
//! shape handed to the force model is known to start at A = (0, 0) and end at
//! B = (L, 0) within the negligible distance `dx`

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use super::error::{Result, SimError};
use super::params::Parameters;
use super::states::{NVec2, PlaneVector};

/// Height function of a custom shape
pub type HeightFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Which curve the wire follows
#[derive(Clone)]
pub enum ShapeKind {
    /// h(x) = 0
    Straight,

    /// h(x) = a (cos(2 pi n x / L) - 1)
    Cosine { n: u32, a: f64 },

    /// Any user supplied height function
    Custom { name: String, h: HeightFn },
}

impl fmt::Debug for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Straight => f.write_str("Straight"),
            ShapeKind::Cosine { n, a } => f
                .debug_struct("Cosine")
                .field("n", n)
                .field("a", a)
                .finish(),
            ShapeKind::Custom { name, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Straight => write!(f, "Straight"),
            ShapeKind::Cosine { n, a } => write!(f, "Cosine(n = {n}, a = {a})"),
            ShapeKind::Custom { name, .. } => write!(f, "{name}"),
        }
    }
}

/// Validated, immutable wire shape
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    length: f64, // L, horizontal distance between the endpoints
    dx: f64, // boundary tolerance and secant width
}

impl Shape {
    /// Build a shape and check that it connects A and B.
    ///
    /// Fails with [`SimError::InvalidShape`] if |h(0)| > dx or |h(L)| > dx.
    /// NaN heights fail the check too
    pub fn new(kind: ShapeKind, params: &Parameters) -> Result<Self> {
        let shape = Self {
            kind,
            length: params.length,
            dx: params.dx,
        };

        let start = shape.evaluate(0.0);
        let end = shape.evaluate(shape.length);
        let within = |h: f64| h.abs() <= shape.dx;
        if !(within(start) && within(end)) {
            return Err(SimError::InvalidShape {
                shape: shape.kind.to_string(),
                start,
                end,
                tolerance: shape.dx,
            });
        }

        Ok(shape)
    }

    pub fn straight(params: &Parameters) -> Result<Self> {
        Self::new(ShapeKind::Straight, params)
    }

    pub fn cosine(n: u32, a: f64, params: &Parameters) -> Result<Self> {
        Self::new(ShapeKind::Cosine { n, a }, params)
    }

    pub fn custom<F>(name: impl Into<String>, h: F, params: &Parameters) -> Result<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(
            ShapeKind::Custom {
                name: name.into(),
                h: Arc::new(h),
            },
            params,
        )
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Height of the wire at horizontal position `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match &self.kind {
            ShapeKind::Straight => 0.0,
            ShapeKind::Cosine { n, a } => {
                a * ((2.0 * PI * f64::from(*n) * x / self.length).cos() - 1.0)
            }
            ShapeKind::Custom { h, .. } => h(x),
        }
    }

    /// Unit normal to the wire at `x`, pointing to the left of the direction of travel.
    ///
    /// Uses the central secant of width `dx`. `x` is not clamped to [0, L],
    /// so near the endpoints h is sampled slightly outside its validated range
    pub fn normal(&self, x: f64) -> NVec2 {
        let half = 0.5 * self.dx;
        let secant = NVec2::new(self.dx, self.evaluate(x + half) - self.evaluate(x - half));
        secant.normalize().rotate_left_90()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
