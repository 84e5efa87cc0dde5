//! Shared data records crossing the backend boundary.
//!
//! Everything here is either plain-old-data destined for a GPU buffer
//! (`VoxelInstance`, `ColorSample`, `LightRecord`) or a small host-side value
//! handed across the camera contract.

use glam::Vec3;

/// One voxel primitive: centered grid position plus implicit unit size.
///
/// Instances are written once at grid-build time, in nested x→y→z enumeration
/// order, and never mutated afterwards.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VoxelInstance {
    /// Grid coordinate offset to center the volume at the origin.
    pub position: [f32; 3],
    /// Half-extent (box) or radius (sphere); one world unit per cell.
    pub half_extent: f32,
}

impl VoxelInstance {
    /// Creates a unit-sized voxel at the given centered position.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            half_extent: 1.0,
        }
    }

    /// The centered position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// One density sample mapped through the gradient.
///
/// The raw density rides along unconverted (0–255 range) for comparison
/// against the cutoff window at trace time.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorSample {
    /// Interpolated RGB, each component in `[0, 1]`.
    pub rgb: [f32; 3],
    /// Raw density value from the dataset byte, in `[0, 255]`.
    pub density: f32,
}

impl ColorSample {
    /// Creates a sample from an interpolated color and its source density.
    #[must_use]
    pub fn new(rgb: Vec3, density: f32) -> Self {
        Self {
            rgb: rgb.to_array(),
            density,
        }
    }

    /// The mapped color as a vector.
    #[must_use]
    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.rgb)
    }
}

/// One point light in the backend's light list.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct LightRecord {
    /// World-space light position.
    pub position: [f32; 3],
    pub _padding: f32,
    /// Light color.
    pub color: [f32; 3],
    /// 1 if the light casts shadows, 0 otherwise.
    pub casts_shadow: u32,
}

impl LightRecord {
    /// Creates a light record.
    #[must_use]
    pub fn new(position: Vec3, color: Vec3, casts_shadow: bool) -> Self {
        Self {
            position: position.to_array(),
            _padding: 0.0,
            color: color.to_array(),
            casts_shadow: u32::from(casts_shadow),
        }
    }
}

/// Per-frame camera basis produced by the excluded camera-ray math.
///
/// `u`, `v`, `w` span the image plane and view direction; the core forwards
/// the basis into the shading context verbatim before each launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Eye position.
    pub eye: Vec3,
    /// Image-plane horizontal axis.
    pub u: Vec3,
    /// Image-plane vertical axis.
    pub v: Vec3,
    /// View direction axis.
    pub w: Vec3,
}

impl CameraBasis {
    /// Creates a camera basis.
    #[must_use]
    pub fn new(eye: Vec3, u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self { eye, u, v, w }
    }
}

/// Initial camera placement suggested by the scene after initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPlacement {
    /// Eye position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub vfov_degrees: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_gpu_sized() {
        assert_eq!(std::mem::size_of::<VoxelInstance>(), 16);
        assert_eq!(std::mem::size_of::<ColorSample>(), 16);
        assert_eq!(std::mem::size_of::<LightRecord>(), 32);
    }

    #[test]
    fn test_voxel_instance_unit_extent() {
        let v = VoxelInstance::new(Vec3::new(-1.0, 2.0, 3.0));
        assert_eq!(v.half_extent, 1.0);
        assert_eq!(v.position(), Vec3::new(-1.0, 2.0, 3.0));
    }

    #[test]
    fn test_cast_slice_layout() {
        let samples = [
            ColorSample::new(Vec3::new(1.0, 0.0, 0.0), 0.0),
            ColorSample::new(Vec3::new(0.0, 0.0, 1.0), 255.0),
        ];
        let raw: &[f32] = bytemuck::cast_slice(&samples);
        assert_eq!(raw.len(), 8);
        assert_eq!(raw[3], 0.0);
        assert_eq!(raw[7], 255.0);
    }
}
