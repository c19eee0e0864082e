//! Uniform 3-D sample grid.
//!
//! Layout follows NumPy's `meshgrid(x, y, z)` with the default
//! `indexing="xy"`: arrays have shape `(len(y), len(x), len(z))` and
//!
//! ```text
//! X[i, j, k] = x[j]
//! Y[i, j, k] = y[i]
//! Z[i, j, k] = z[k]
//! ```

use crate::{linspace, QuiverConfig, Result, Vec3};
use ndarray::{Array1, Array3};
use tracing::debug;

/// Axis samples and their meshgrid expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    axis_x: Array1<f64>,
    axis_y: Array1<f64>,
    axis_z: Array1<f64>,
    x: Array3<f64>,
    y: Array3<f64>,
    z: Array3<f64>,
}

impl Grid {
    /// Expand three axis samples into coordinate arrays.
    pub fn meshgrid(axis_x: Array1<f64>, axis_y: Array1<f64>, axis_z: Array1<f64>) -> Self {
        let shape = (axis_y.len(), axis_x.len(), axis_z.len());
        let x = Array3::from_shape_fn(shape, |(_, j, _)| axis_x[j]);
        let y = Array3::from_shape_fn(shape, |(i, _, _)| axis_y[i]);
        let z = Array3::from_shape_fn(shape, |(_, _, k)| axis_z[k]);
        Self {
            axis_x,
            axis_y,
            axis_z,
            x,
            y,
            z,
        }
    }

    /// Cube grid: the same `linspace(axis_min, axis_max, samples_per_axis)` on every axis.
    pub fn from_config(config: &QuiverConfig) -> Result<Self> {
        config.validate()?;
        let axis = linspace(config.axis_min, config.axis_max, config.samples_per_axis);
        let grid = Self::meshgrid(axis.clone(), axis.clone(), axis);
        debug!(
            shape = ?grid.shape(),
            min = config.axis_min,
            max = config.axis_max,
            "grid built"
        );
        Ok(grid)
    }

    pub fn axis_x(&self) -> &Array1<f64> {
        &self.axis_x
    }

    pub fn axis_y(&self) -> &Array1<f64> {
        &self.axis_y
    }

    pub fn axis_z(&self) -> &Array1<f64> {
        &self.axis_z
    }

    pub fn x(&self) -> &Array3<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array3<f64> {
        &self.y
    }

    pub fn z(&self) -> &Array3<f64> {
        &self.z
    }

    /// Shape shared by `X`, `Y` and `Z`.
    pub fn shape(&self) -> [usize; 3] {
        let s = self.x.shape();
        [s[0], s[1], s[2]]
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates at index `(i, j, k)`. Panics when out of bounds.
    pub fn point(&self, i: usize, j: usize, k: usize) -> Vec3 {
        Vec3::new(self.x[[i, j, k]], self.y[[i, j, k]], self.z[[i, j, k]])
    }
}
