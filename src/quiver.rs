//! Quiver arrow geometry.
//!
//! Mirrors Matplotlib's `Axes3D.quiver` with `pivot="tail"`: each arrow starts
//! at its grid point, points along the (optionally normalized) field vector and
//! ends in two head strokes rotated ±15° away from the shaft.

use crate::{FieldSamples, QuiverConfig, Vec3};
use tracing::debug;

/// Half-angle between the shaft and each head stroke.
const HEAD_ANGLE_DEG: f64 = 15.0;

/// One arrow: shaft `tail → tip`, plus head strokes `tip → barbs[0|1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub tail: Vec3,
    pub tip: Vec3,
    pub barbs: [Vec3; 2],
}

impl Arrow {
    /// The three strokes that draw this arrow.
    pub fn strokes(&self) -> [[Vec3; 2]; 3] {
        [
            [self.tail, self.tip],
            [self.tip, self.barbs[0]],
            [self.tip, self.barbs[1]],
        ]
    }
}

/// Arrows for a whole sampled field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quiver {
    arrows: Vec<Arrow>,
    skipped: usize,
}

impl Quiver {
    /// Build one arrow per sample.
    ///
    /// With `normalize`, vectors that have no direction (zero length, NaN or
    /// infinite) are skipped, as Matplotlib leaves them undrawn. Without it,
    /// only non-finite vectors are skipped.
    pub fn build(samples: &FieldSamples, config: &QuiverConfig) -> Self {
        let length = config.arrow_length;
        let head = length * config.arrow_head_ratio;

        let mut arrows = Vec::with_capacity(samples.len());
        let mut skipped = 0;
        for (tail, vector) in samples.iter() {
            let dir = if config.normalize {
                match vector.normalize() {
                    Ok(d) => d,
                    Err(_) => {
                        skipped += 1;
                        continue;
                    }
                }
            } else if vector.is_finite() {
                vector
            } else {
                skipped += 1;
                continue;
            };
            arrows.push(arrow_at(tail, dir, length, head));
        }

        if skipped > 0 {
            debug!(skipped, "vectors without a direction were not drawn");
        }
        debug!(arrows = arrows.len(), "quiver built");
        Self { arrows, skipped }
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Samples that produced no arrow.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Component-wise `(min, max)` over every arrow vertex.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self
            .arrows
            .iter()
            .flat_map(|a| [a.tail, a.tip, a.barbs[0], a.barbs[1]]);
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

fn arrow_at(tail: Vec3, dir: Vec3, length: f64, head: f64) -> Arrow {
    let tip = tail + dir * length;
    let [pos, neg] = head_directions(dir);
    Arrow {
        tail,
        tip,
        barbs: [tip - pos * head, tip - neg * head],
    }
}

/// `dir` rotated by ±15° about the horizontal axis perpendicular to it.
fn head_directions(dir: Vec3) -> [Vec3; 2] {
    let planar = (dir.x * dir.x + dir.y * dir.y).sqrt();
    let axis = if planar > 0.0 {
        Vec3::new(dir.y / planar, -dir.x / planar, 0.0)
    } else {
        Vec3::Y
    };
    let angle = HEAD_ANGLE_DEG.to_radians();
    [dir.rotate_about(axis, angle), dir.rotate_about(axis, -angle)]
}
