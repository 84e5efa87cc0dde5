//! Typed scene configuration.
//!
//! The excluded CLI/display glue parses argv and hands the core typed
//! parameters; this module defines those parameter types along with parsers
//! for the textual forms the glue forwards verbatim (`XxYxZ` dimension
//! triples, 24-bit hex RGB literals) and a JSON config loader.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxtraceError};

/// Extents of the regular density grid, in voxels per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeDimensions {
    /// Voxel count along X.
    pub x: u32,
    /// Voxel count along Y.
    pub y: u32,
    /// Voxel count along Z.
    pub z: u32,
}

impl VolumeDimensions {
    /// Creates new dimensions.
    #[must_use]
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Total voxel count `x * y * z`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Checks that all three extents are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return Err(VoxtraceError::Config(format!(
                "volume dimensions must be non-zero, got {self}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for VolumeDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

impl FromStr for VolumeDimensions {
    type Err = VoxtraceError;

    /// Parses the `XxYxZ` form, e.g. `200x200x200`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 3 {
            return Err(VoxtraceError::Config(format!(
                "expected volume dimensions as XxYxZ, got '{s}'"
            )));
        }
        let mut extents = [0u32; 3];
        for (extent, part) in extents.iter_mut().zip(&parts) {
            *extent = part.trim().parse().map_err(|_| {
                VoxtraceError::Config(format!("invalid dimension '{part}' in '{s}'"))
            })?;
        }
        Ok(Self::new(extents[0], extents[1], extents[2]))
    }
}

/// Parses a 24-bit hex RGB literal into a color with components in `[0, 1]`.
///
/// Accepts an optional `0x` or `#` prefix. Only the low 24 bits are used:
/// red is bits 16–23, green 8–15, blue 0–7, each divided by 255.
pub fn parse_hex_color(s: &str) -> Result<Vec3> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);
    if digits.is_empty() || digits.len() > 8 {
        return Err(VoxtraceError::Config(format!("invalid hex color '{s}'")));
    }
    let hex = u32::from_str_radix(digits, 16)
        .map_err(|_| VoxtraceError::Config(format!("invalid hex color '{s}'")))?;
    Ok(Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ))
}

/// The two-color linear gradient used to derive voxel colors from density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Color at density 0.
    pub begin: Vec3,
    /// Color at density 255.
    pub end: Vec3,
}

impl GradientSpec {
    /// Creates a new gradient.
    #[must_use]
    pub fn new(begin: Vec3, end: Vec3) -> Self {
        Self { begin, end }
    }

    /// Parses both endpoints from 24-bit hex RGB literals.
    pub fn from_hex(begin: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_hex_color(begin)?, parse_hex_color(end)?))
    }
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::new(Vec3::new(0.9, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.9))
    }
}

/// The density range treated as visible during shading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffWindow {
    /// Lower bound, inclusive.
    pub from: f32,
    /// Upper bound, inclusive.
    pub to: f32,
}

impl CutoffWindow {
    /// Creates a window with both bounds clamped to `[0, 255]`.
    #[must_use]
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from: from.clamp(0.0, 255.0),
            to: to.clamp(0.0, 255.0),
        }
    }

    /// The full density range.
    #[must_use]
    pub fn full() -> Self {
        Self {
            from: 0.0,
            to: 255.0,
        }
    }
}

impl Default for CutoffWindow {
    fn default() -> Self {
        Self::full()
    }
}

/// Primitive shape used for every voxel in the grid.
///
/// A build-time choice, uniform across the whole grid; the backend maps it to
/// the matching bounds/intersection routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoxelShape {
    /// Axis-aligned unit box per cell.
    #[default]
    Box,
    /// Unit sphere per cell.
    Sphere,
}

/// Complete configuration handed to the scene orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Grid extents.
    pub dimensions: VolumeDimensions,
    /// Path to the raw binary density dataset.
    pub dataset_path: PathBuf,
    /// Density-to-color gradient endpoints.
    pub gradient: GradientSpec,
    /// Initial visibility window.
    pub cutoff: CutoffWindow,
    /// Voxel primitive shape.
    pub shape: VoxelShape,
}

impl SceneConfig {
    /// Creates a configuration for the given dataset.
    #[must_use]
    pub fn new(dimensions: VolumeDimensions, dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dimensions,
            dataset_path: dataset_path.into(),
            gradient: GradientSpec::default(),
            cutoff: CutoffWindow::full(),
            shape: VoxelShape::default(),
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            VoxtraceError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            VoxtraceError::Config(format!("cannot parse config '{}': {e}", path.display()))
        })
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(VolumeDimensions::new(200, 200, 200), PathBuf::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_parse() {
        let dims: VolumeDimensions = "200x100x50".parse().unwrap();
        assert_eq!(dims, VolumeDimensions::new(200, 100, 50));
        assert_eq!(dims.total(), 200 * 100 * 50);
    }

    #[test]
    fn test_dimensions_parse_rejects_malformed() {
        assert!("200x100".parse::<VolumeDimensions>().is_err());
        assert!("axbxc".parse::<VolumeDimensions>().is_err());
        assert!("".parse::<VolumeDimensions>().is_err());
    }

    #[test]
    fn test_dimensions_validate() {
        assert!(VolumeDimensions::new(1, 1, 1).validate().is_ok());
        assert!(VolumeDimensions::new(0, 1, 1).validate().is_err());
    }

    #[test]
    fn test_hex_color_channels() {
        assert_eq!(parse_hex_color("0xff0000").unwrap(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(parse_hex_color("#00ff00").unwrap(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(parse_hex_color("0000ff").unwrap(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hex_color_uses_low_24_bits() {
        // An 8-digit literal keeps only the RGB bits, like the original parser.
        let c = parse_hex_color("0xff0000ff").unwrap();
        assert_eq!(c, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hex_color_rejects_malformed() {
        assert!(parse_hex_color("").is_err());
        assert!(parse_hex_color("0x").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
        assert!(parse_hex_color("0x1ff0000ff").is_err());
    }

    #[test]
    fn test_cutoff_window_clamps() {
        let w = CutoffWindow::new(-10.0, 300.0);
        assert_eq!(w.from, 0.0);
        assert_eq!(w.to, 255.0);
    }

    #[test]
    fn test_scene_config_json_roundtrip() {
        let mut config = SceneConfig::new(VolumeDimensions::new(2, 3, 4), "data/head.bin");
        config.cutoff = CutoffWindow::new(10.0, 200.0);
        config.shape = VoxelShape::Sphere;

        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimensions, config.dimensions);
        assert_eq!(back.cutoff, config.cutoff);
        assert_eq!(back.shape, VoxelShape::Sphere);
    }

    proptest::proptest! {
        #[test]
        fn prop_hex_color_in_unit_range(v in 0u32..=0x00ff_ffff) {
            let c = parse_hex_color(&format!("{v:06x}")).unwrap();
            proptest::prop_assert!((0.0..=1.0).contains(&c.x));
            proptest::prop_assert!((0.0..=1.0).contains(&c.y));
            proptest::prop_assert!((0.0..=1.0).contains(&c.z));
        }
    }
}
