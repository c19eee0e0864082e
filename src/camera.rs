//! Target-locked orbit camera.
//!
//! The camera sits on a sphere of `radius` around `target`, addressed by an
//! azimuth `theta` and a polar angle `phi` (degrees, measured from the
//! vertical). Display space is y-up.
//!
//! ```text
//! position = target + r·(sin φ cos θ, cos φ, sin φ sin θ)
//! ```

use crate::{Result, Vec3};

const PHI_MIN: f64 = 1.0;
const PHI_MAX: f64 = 179.0;
const RADIUS_MIN: f64 = 1.0;
const RADIUS_MAX: f64 = 20.0;
/// Radius change per scroll step.
const ZOOM_STEP: f64 = 0.25;
/// Radius at which [`OrbitCamera::scale`] is 1.
const REFERENCE_RADIUS: f64 = 10.0;
/// Below this magnitude a basis cross product is treated as degenerate.
const BASIS_EPS: f64 = 1e-3;

/// Orthonormal view basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// A camera orbiting a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f64,
    /// Azimuth in degrees, kept in `[0, 360]`.
    pub theta: f64,
    /// Polar angle in degrees, kept in `[1, 179]`.
    pub phi: f64,
    /// Degrees per unit of orbit input.
    pub sensitivity: f64,
}

impl Default for OrbitCamera {
    /// Matplotlib's default 3-D view: elevation 30°, azimuth -60°.
    fn default() -> Self {
        Self::new(Vec3::ZERO, REFERENCE_RADIUS, 300.0, 60.0)
    }
}

impl OrbitCamera {
    pub fn new(target: Vec3, radius: f64, theta: f64, phi: f64) -> Self {
        let mut cam = Self {
            target,
            radius,
            theta,
            phi,
            sensitivity: 0.3,
        };
        cam.update();
        cam
    }

    /// Clamp `phi` and wrap `theta` back into range.
    pub fn update(&mut self) {
        self.phi = self.phi.clamp(PHI_MIN, PHI_MAX);
        if self.theta > 360.0 {
            self.theta -= 360.0;
        }
        if self.theta < 0.0 {
            self.theta += 360.0;
        }
    }

    /// Orbit by a pointer offset, scaled by `sensitivity`.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.theta += dx * self.sensitivity;
        self.phi += dy * self.sensitivity;
        self.update();
    }

    /// Move towards (positive `scroll`) or away from the target.
    pub fn zoom(&mut self, scroll: f64) {
        self.radius = (self.radius - scroll * ZOOM_STEP).clamp(RADIUS_MIN, RADIUS_MAX);
    }

    pub fn position(&self) -> Vec3 {
        let (theta, phi) = (self.theta.to_radians(), self.phi.to_radians());
        self.target
            + Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ) * self.radius
    }

    /// View basis looking from [`position`](Self::position) at the target.
    ///
    /// Fails only when the camera sits on its target (`radius == 0`).
    pub fn basis(&self) -> Result<CameraBasis> {
        let front = (self.target - self.position()).normalize()?;

        let right = front.cross(Vec3::Y);
        let right = if right.magnitude() < BASIS_EPS {
            Vec3::X
        } else {
            right.normalize()?
        };

        let up = right.cross(front);
        let up = if up.magnitude() < BASIS_EPS {
            Vec3::Y
        } else {
            up.normalize()?
        };

        Ok(CameraBasis { front, right, up })
    }

    /// Rotation about the vertical axis, radians.
    pub fn yaw(&self) -> f64 {
        self.theta.to_radians()
    }

    /// Elevation above the horizontal plane, radians.
    pub fn pitch(&self) -> f64 {
        (90.0 - self.phi).to_radians()
    }

    /// Magnification relative to the reference distance.
    pub fn scale(&self) -> f64 {
        REFERENCE_RADIUS / self.radius
    }
}
