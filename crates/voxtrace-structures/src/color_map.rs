//! Density-to-color gradient mapping.

use glam::Vec3;
use voxtrace_core::{ColorSample, GradientSpec};

/// Componentwise linear interpolation between two colors at `p`.
#[must_use]
pub fn interpolate(begin: Vec3, end: Vec3, p: f32) -> Vec3 {
    begin * (1.0 - p) + end * p
}

/// Maps every dataset byte to a color sample, one entry per input byte.
///
/// A byte `v` is normalized to `p = v / 255` and interpolated through the
/// gradient; no gamma correction is applied. The raw density rides along
/// unconverted for the trace-time cutoff comparison. Pure and deterministic.
#[must_use]
pub fn map_colors(bytes: &[u8], gradient: &GradientSpec) -> Vec<ColorSample> {
    bytes
        .iter()
        .map(|&v| {
            let p = f32::from(v) / 255.0;
            ColorSample::new(interpolate(gradient.begin, gradient.end, p), f32::from(v))
        })
        .collect()
}
