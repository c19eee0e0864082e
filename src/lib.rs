//! # gradfield
//!
//! Sample a 3-D vector field on a uniform grid and draw it as a quiver plot.
//!
//! ## The Problem
//!
//! Given the scalar function `f(x, y, z) = exp(x·y)`, lay a regular grid over
//! `[-2, 2]³` and attach one arrow to every grid point. The arrows use
//!
//! ```text
//! U = Y·Z·exp(X·Y)
//! V = X·Z·exp(X·Y)
//! W = exp(X·Y)
//! ```
//!
//! and are drawn normalized to unit length, then scaled by `0.3`.
//!
//! ## Key Types
//!
//! | Item | Use Case |
//! |------|----------|
//! | [`linspace`] | Evenly spaced axis samples (endpoint included) |
//! | [`Grid`] | `X`, `Y`, `Z` meshgrid arrays |
//! | [`FieldSampler`] | Constants in, six `(8,8,8)` arrays out |
//! | [`Quiver`] | Arrow shafts and heads in data space |
//! | [`OrbitCamera`] | View direction for the figure |
//! | [`render_svg`] | 3-D quiver figure as an SVG document |
//!
//! ## Quick Start
//!
//! ```rust
//! use gradfield::{FieldSampler, Quiver, QuiverConfig};
//!
//! let config = QuiverConfig::default();
//! let samples = FieldSampler::new(config.clone()).sample()?;
//! assert_eq!(samples.shape(), [8, 8, 8]);
//!
//! let quiver = Quiver::build(&samples, &config);
//! assert_eq!(quiver.arrows().len(), 512);
//! # Ok::<(), gradfield::Error>(())
//! ```
//!
//! ## What Can Go Wrong
//!
//! 1. **Degenerate axis**: `axis_min >= axis_max` or fewer than two samples is
//!    rejected by [`QuiverConfig::validate`].
//! 2. **Zero vectors**: with `normalize = true` a zero vector has no direction;
//!    it is skipped rather than drawn (see [`Quiver::skipped`]).
//! 3. **Not a gradient**: the default field is *not* `∇ exp(x·y)`. Use
//!    [`ExpXyGradient`] if that is what you need.
//!
//! ## References
//!
//! - NumPy `linspace` / `meshgrid` (default `indexing="xy"`)
//! - Matplotlib `Axes3D.quiver` (tail pivot, 15° arrow-head barbs)

use ndarray::Array1;
use thiserror::Error;

pub mod camera;
pub mod config;
pub mod field;
pub mod grid;
pub mod quiver;
pub mod render;
pub mod vec3;

pub use camera::{CameraBasis, OrbitCamera};
pub use config::{parse_color, QuiverConfig};
pub use field::{
    sample_field, scalar_exp_xy, ExpXyField, ExpXyGradient, FieldSampler, FieldSamples,
    VectorField,
};
pub use grid::Grid;
pub use quiver::{Arrow, Quiver};
pub use render::render_svg;
pub use vec3::Vec3;

/// Error variants for sampling and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Axis bounds are not finite or not strictly increasing.
    #[error("axis range must be finite with min < max, got [{0}, {1}]")]
    InvalidAxisRange(f64, f64),

    /// Too few samples to span an axis.
    #[error("need at least 2 samples per axis, got {0}")]
    TooFewSamples(usize),

    /// Arrow length factor is not positive and finite.
    #[error("arrow length must be positive and finite, got {0}")]
    InvalidArrowLength(f64),

    /// Arrow head ratio is not positive and finite.
    #[error("arrow head ratio must be positive and finite, got {0}")]
    InvalidHeadRatio(f64),

    /// Color string is neither a known name nor `#rrggbb`.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    /// Figure has a zero dimension.
    #[error("figure size must be non-zero, got {0}x{1}")]
    InvalidFigureSize(u32, u32),

    /// Operation needs a direction but the vector has (near) zero length.
    #[error("{0}")]
    ZeroVector(&'static str),

    /// The plotting backend failed.
    #[error("render failed: {0}")]
    Render(String),
}

/// Result type for sampling and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Evenly spaced samples over `[start, stop]`, endpoint included.
///
/// Matches NumPy's `linspace(start, stop, n)`: `v[i] = start + i·step` with
/// `step = (stop - start) / (n - 1)`, and the last element is exactly `stop`.
///
/// `n == 0` yields an empty array, `n == 1` yields `[start]`.
///
/// # Example
///
/// ```rust
/// use gradfield::linspace;
///
/// let axis = linspace(-2.0, 2.0, 8);
/// assert_eq!(axis.len(), 8);
/// assert_eq!(axis[0], -2.0);
/// assert_eq!(axis[7], 2.0);
/// assert!((axis[1] - axis[0] - 4.0 / 7.0).abs() < 1e-12);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out = Array1::from_shape_fn(n, |i| start + i as f64 * step);
            out[n - 1] = stop;
            out
        }
    }
}
