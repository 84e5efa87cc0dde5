//! Backend-facing layer for voxtrace-rs.
//!
//! This crate provides everything that crosses the tracing-backend boundary:
//! - The [`TraceBackend`] contract and its one-time [`BackendSettings`]
//! - AABB and median-split [`Bvh`] construction
//! - The [`GeometryGroup`] published under the trace and shadow roles
//! - GPU-ready layouts and wgpu buffer bindings
//! - The backend-owned [`OutputImage`] handle

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod aabb;
pub mod accel;
pub mod backend;
pub mod buffer;
pub mod bvh;
pub mod gpu;

pub use aabb::Aabb;
pub use accel::{GeometryGroup, MaterialBinding};
pub use backend::{BackendSettings, OutputImage, TraceBackend};
pub use bvh::{Bvh, BvhNode};
pub use gpu::{flatten_bvh, CameraUniforms, FilterUniforms, GpuBvhNode, GpuSceneBindings};
