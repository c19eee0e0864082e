//! Vector fields and the grid sampler.
//!
//! A [`VectorField`] maps a point to a vector. [`sample_field`] evaluates one
//! at every point of a [`Grid`], producing the six co-shaped arrays
//! `X, Y, Z, U, V, W` a quiver plot consumes.
//!
//! The default field is [`ExpXyField`]:
//!
//! \[
//! (U, V, W) = (yz\,e^{xy},\; xz\,e^{xy},\; e^{xy})
//! \]
//!
//! Note this is *not* \(\nabla e^{xy} = (y e^{xy}, x e^{xy}, 0)\); that one is
//! [`ExpXyGradient`].

use crate::{Grid, QuiverConfig, Result, Vec3};
use ndarray::{Array3, Zip};
use tracing::debug;

/// A static vector field in 3-D.
pub trait VectorField {
    /// Evaluate the field at `p`.
    fn evaluate(&self, p: Vec3) -> Vec3;
}

impl<F: Fn(Vec3) -> Vec3> VectorField for F {
    fn evaluate(&self, p: Vec3) -> Vec3 {
        self(p)
    }
}

/// `f(x, y, z) = exp(x·y)`.
#[inline]
pub fn scalar_exp_xy(p: Vec3) -> f64 {
    (p.x * p.y).exp()
}

/// `(y·z·e, x·z·e, e)` with `e = exp(x·y)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpXyField;

impl VectorField for ExpXyField {
    #[inline]
    fn evaluate(&self, p: Vec3) -> Vec3 {
        let e = (p.x * p.y).exp();
        Vec3::new(p.y * p.z * e, p.x * p.z * e, e)
    }
}

/// The analytic gradient of `exp(x·y)`: `(y·e, x·e, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpXyGradient;

impl VectorField for ExpXyGradient {
    #[inline]
    fn evaluate(&self, p: Vec3) -> Vec3 {
        let e = (p.x * p.y).exp();
        Vec3::new(p.y * e, p.x * e, 0.0)
    }
}

/// Grid coordinates plus the field sampled on them. All arrays share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSamples {
    grid: Grid,
    u: Array3<f64>,
    v: Array3<f64>,
    w: Array3<f64>,
}

impl FieldSamples {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn x(&self) -> &Array3<f64> {
        self.grid.x()
    }

    pub fn y(&self) -> &Array3<f64> {
        self.grid.y()
    }

    pub fn z(&self) -> &Array3<f64> {
        self.grid.z()
    }

    pub fn u(&self) -> &Array3<f64> {
        &self.u
    }

    pub fn v(&self) -> &Array3<f64> {
        &self.v
    }

    pub fn w(&self) -> &Array3<f64> {
        &self.w
    }

    pub fn shape(&self) -> [usize; 3] {
        self.grid.shape()
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Grid point at `(i, j, k)`.
    pub fn position(&self, i: usize, j: usize, k: usize) -> Vec3 {
        self.grid.point(i, j, k)
    }

    /// Field vector at `(i, j, k)`.
    pub fn vector(&self, i: usize, j: usize, k: usize) -> Vec3 {
        Vec3::new(self.u[[i, j, k]], self.v[[i, j, k]], self.w[[i, j, k]])
    }

    /// `(position, vector)` pairs in logical (row-major) index order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.grid
            .x()
            .iter()
            .zip(self.grid.y().iter())
            .zip(self.grid.z().iter())
            .zip(self.u.iter().zip(self.v.iter()).zip(self.w.iter()))
            .map(|(((&x, &y), &z), ((&u, &v), &w))| (Vec3::new(x, y, z), Vec3::new(u, v, w)))
    }
}

/// Evaluate `field` at every point of `grid`.
pub fn sample_field<F: VectorField + ?Sized>(grid: &Grid, field: &F) -> FieldSamples {
    let shape = grid.x().raw_dim();
    let mut u = Array3::zeros(shape);
    let mut v = Array3::zeros(shape);
    let mut w = Array3::zeros(shape);

    Zip::from(&mut u)
        .and(&mut v)
        .and(&mut w)
        .and(grid.x())
        .and(grid.y())
        .and(grid.z())
        .for_each(|u, v, w, &x, &y, &z| {
            let d = field.evaluate(Vec3::new(x, y, z));
            *u = d.x;
            *v = d.y;
            *w = d.z;
        });

    debug!(points = grid.len(), "field sampled");
    FieldSamples {
        grid: grid.clone(),
        u,
        v,
        w,
    }
}

/// Samples [`ExpXyField`] on the grid a [`QuiverConfig`] describes.
#[derive(Debug, Clone, Default)]
pub struct FieldSampler {
    config: QuiverConfig,
}

impl FieldSampler {
    pub fn new(config: QuiverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuiverConfig {
        &self.config
    }

    /// Build the grid and evaluate the field on it.
    pub fn sample(&self) -> Result<FieldSamples> {
        let grid = Grid::from_config(&self.config)?;
        Ok(sample_field(&grid, &ExpXyField))
    }
}
