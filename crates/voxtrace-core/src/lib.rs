//! Core abstractions for voxtrace-rs.
//!
//! This crate provides the fundamental types used throughout voxtrace-rs:
//! - The error taxonomy and [`Result`] alias
//! - Typed scene configuration and its textual parsers
//! - Plain-old-data records shared with the tracing backend
//! - The [`ShadingContext`] contract and interactive [`FilterState`]
//! - The scene lifecycle state machine

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod filter;
pub mod scene_state;
pub mod shading;
pub mod types;

pub use config::{
    parse_hex_color, CutoffWindow, GradientSpec, SceneConfig, VolumeDimensions, VoxelShape,
};
pub use error::{Result, VoxtraceError};
pub use filter::FilterState;
pub use scene_state::SceneState;
pub use shading::ShadingContext;
pub use types::{CameraBasis, CameraPlacement, ColorSample, LightRecord, VoxelInstance};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
