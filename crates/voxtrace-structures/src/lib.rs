//! Data pipeline for voxtrace-rs.
//!
//! Turns a raw binary density dataset into the buffers the tracing backend
//! consumes:
//! - [`dataset`] reads and validates the sample bytes
//! - [`color_map`] maps each sample through the configured gradient
//! - [`voxel_grid`] enumerates every grid cell as a renderable primitive

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color_map;
pub mod dataset;
pub mod voxel_grid;

pub use color_map::{interpolate, map_colors};
pub use dataset::load_dataset;
pub use voxel_grid::VoxelGrid;
