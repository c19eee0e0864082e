//! Plot configuration.
//!
//! Every literal of the quiver figure lives here: axis range, sample count,
//! arrow styling and labels. The sampler only reads the axis fields, so it can
//! be exercised without ever touching a rendering backend.

use crate::{Error, Result};
use plotters::style::RGBColor;

/// Configuration for sampling and drawing the quiver plot.
#[derive(Debug, Clone, PartialEq)]
pub struct QuiverConfig {
    /// Lower bound of every axis.
    pub axis_min: f64,
    /// Upper bound of every axis.
    pub axis_max: f64,
    /// Samples per axis (grid is `n × n × n`).
    pub samples_per_axis: usize,
    /// Arrow length factor.
    pub arrow_length: f64,
    /// Normalize vectors to unit length before scaling by `arrow_length`.
    pub normalize: bool,
    /// Arrow-head stroke length as a fraction of the arrow length.
    pub arrow_head_ratio: f64,
    /// Arrow color: a named color or `#rrggbb`.
    pub color: String,
    /// Figure title.
    pub title: String,
    /// Labels for the x, y and z axes.
    pub axis_labels: [String; 3],
    /// Figure size in pixels.
    pub figure_size: (u32, u32),
}

impl Default for QuiverConfig {
    fn default() -> Self {
        Self {
            axis_min: -2.0,
            axis_max: 2.0,
            samples_per_axis: 8,
            arrow_length: 0.3,
            normalize: true,
            arrow_head_ratio: 0.3,
            color: "blue".to_string(),
            title: "Gradient Vector Field of f(x,y,z)".to_string(),
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            // figsize=(10, 8) at 100 dpi
            figure_size: (1000, 800),
        }
    }
}

impl QuiverConfig {
    /// Check every field; the first violation wins.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = (self.axis_min, self.axis_max);
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(Error::InvalidAxisRange(lo, hi));
        }
        if self.samples_per_axis < 2 {
            return Err(Error::TooFewSamples(self.samples_per_axis));
        }
        if !(self.arrow_length.is_finite() && self.arrow_length > 0.0) {
            return Err(Error::InvalidArrowLength(self.arrow_length));
        }
        if !(self.arrow_head_ratio.is_finite() && self.arrow_head_ratio > 0.0) {
            return Err(Error::InvalidHeadRatio(self.arrow_head_ratio));
        }
        parse_color(&self.color)?;
        let (w, h) = self.figure_size;
        if w == 0 || h == 0 {
            return Err(Error::InvalidFigureSize(w, h));
        }
        Ok(())
    }

    /// The arrow color as an RGB triple.
    pub fn rgb(&self) -> Result<RGBColor> {
        parse_color(&self.color)
    }
}

/// Parse a Matplotlib-style base color name (case-insensitive) or `#rrggbb`.
pub fn parse_color(s: &str) -> Result<RGBColor> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::UnknownColor(s.to_string()));
    }
    let rgb = match s.to_ascii_lowercase().as_str() {
        "blue" | "b" => RGBColor(0, 0, 255),
        "red" | "r" => RGBColor(255, 0, 0),
        "green" | "g" => RGBColor(0, 128, 0),
        "black" | "k" => RGBColor(0, 0, 0),
        "white" | "w" => RGBColor(255, 255, 255),
        "cyan" | "c" => RGBColor(0, 255, 255),
        "magenta" | "m" => RGBColor(255, 0, 255),
        "yellow" | "y" => RGBColor(255, 255, 0),
        "orange" => RGBColor(255, 165, 0),
        "gray" | "grey" => RGBColor(128, 128, 128),
        _ => return Err(Error::UnknownColor(s.to_string())),
    };
    Ok(rgb)
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
