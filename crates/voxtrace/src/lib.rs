//! voxtrace-rs: a volumetric ray-traced scene core.
//!
//! Voxtrace turns a raw binary density volume into a field of discrete
//! primitives traced by an external ray-tracing backend, with interactive
//! density-window filtering and gradient color mapping.
//!
//! # Quick Start
//!
//! ```no_run
//! use voxtrace::*;
//!
//! fn main() {
//!     init_logging();
//!
//!     let mut config = SceneConfig::new("200x200x200".parse().unwrap(), "data/head.bin");
//!     config.gradient = GradientSpec::from_hex("0x990000", "0x000099").unwrap();
//!
//!     // The display glue supplies a TraceBackend implementation.
//!     let backend: Box<dyn TraceBackend> = unimplemented!();
//!     let mut scene = VolumetricScene::new(config, backend);
//!     let camera = scene.initialize_or_exit();
//!
//!     // Per frame: derive a CameraBasis from `camera`, then
//!     // scene.render_frame(&basis) and display scene.output_image().
//! }
//! ```
//!
//! # Architecture
//!
//! The pipeline is: dataset loader → color mapper → voxel grid →
//! acceleration structure → per-frame trace, with [`FilterState`] mutations
//! pushed into the backend's shading context between launches:
//!
//! - [`VolumetricScene`] owns the lifecycle and the backend
//! - [`VoxelGrid`] enumerates every cell as one primitive
//! - [`GeometryGroup`] wraps the primitives and their median-split BVH
//! - [`TraceBackend`] is the contract the external engine implements

mod interaction;
mod scene;

// Re-export core types
pub use voxtrace_core::{
    parse_hex_color, CameraBasis, CameraPlacement, ColorSample, CutoffWindow, FilterState,
    GradientSpec, LightRecord, Result, SceneConfig, SceneState, ShadingContext, VolumeDimensions,
    VoxelInstance, VoxelShape, VoxtraceError,
};

// Re-export render types
pub use voxtrace_render::{
    Aabb, BackendSettings, Bvh, GeometryGroup, MaterialBinding, OutputImage, TraceBackend,
};

// Re-export structures
pub use voxtrace_structures::{interpolate, load_dataset, map_colors, VoxelGrid};

pub use interaction::Key;
pub use scene::VolumetricScene;

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};

/// Initializes diagnostic logging for embedding applications.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
