//! The tracing-backend contract.
//!
//! The ray-tracing execution engine is an external collaborator: it owns the
//! shading programs, the per-pixel parallel launch, and the output image. The
//! core only talks to it through [`TraceBackend`], the typed equivalent of
//! the original engine's named-variable and buffer bindings.

use glam::Vec3;
use voxtrace_core::{ColorSample, Result, ShadingContext, VoxelInstance, VoxelShape};

use crate::accel::GeometryGroup;

/// One-time engine context setup, applied before any geometry is bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackendSettings {
    /// Number of ray types (radiance + shadow).
    pub ray_type_count: u32,
    /// Number of launch entry points.
    pub entry_point_count: u32,
    /// Per-thread stack size hint.
    pub stack_size: u32,
    /// Self-intersection offset applied by the backend.
    pub scene_epsilon: f32,
    /// Attenuation applied by shadow rays.
    pub shadow_attenuation: Vec3,
    /// Ambient light color.
    pub ambient_light: Vec3,
    /// Miss-program background color.
    pub background_color: Vec3,
    /// Color written by the exception program.
    pub bad_color: Vec3,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            ray_type_count: 2,
            entry_point_count: 1,
            stack_size: 1200,
            scene_epsilon: 1.0e-4,
            shadow_attenuation: Vec3::splat(0.3),
            ambient_light: Vec3::splat(0.3),
            background_color: Vec3::splat(100.0 / 255.0),
            bad_color: Vec3::new(1.0, 1.0, 0.0),
        }
    }
}

/// Handle to the backend-owned output pixel buffer.
///
/// Four 8-bit channels per pixel (RGBA), rows top to bottom, suitable for
/// direct display. The core never writes pixels itself; the backend fills
/// the buffer during a launch.
#[derive(Debug, Clone)]
pub struct OutputImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl OutputImage {
    /// Creates a zeroed image of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable pixel access for the backend's launch.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// The full backend binding surface.
///
/// Extends [`ShadingContext`] with the one-time configuration, buffer and
/// geometry bindings, validation, and the synchronous launch. Backend
/// failures carry the engine's message as
/// [`VoxtraceError::Backend`](voxtrace_core::VoxtraceError::Backend).
pub trait TraceBackend: ShadingContext {
    /// Applies the one-time context setup.
    fn configure(&mut self, settings: &BackendSettings) -> Result<()>;

    /// Binds the voxel primitive buffer and the shape every voxel shares.
    ///
    /// The shape selects the backend's bounds/intersection routines once for
    /// the whole grid.
    fn bind_voxels(&mut self, voxels: &[VoxelInstance], shape: VoxelShape) -> Result<()>;

    /// Binds the per-voxel color buffer.
    fn bind_colors(&mut self, colors: &[ColorSample]) -> Result<()>;

    /// Publishes the geometry group as the primary traceable object.
    fn set_trace_root(&mut self, group: &GeometryGroup) -> Result<()>;

    /// Publishes the geometry group as the shadow-occlusion object.
    fn set_shadow_root(&mut self, group: &GeometryGroup) -> Result<()>;

    /// Validates and compiles the assembled scene.
    fn validate(&mut self) -> Result<()>;

    /// Current output image dimensions `(width, height)`.
    fn output_size(&self) -> (u32, u32);

    /// Issues one synchronous trace launch of the given size.
    ///
    /// Returns only after the launch completes; there is no mid-frame
    /// cancellation.
    fn launch(&mut self, width: u32, height: u32) -> Result<()>;

    /// The backend-owned output buffer.
    fn output_image(&self) -> &OutputImage;
}
