//! Shading-context contract.
//!
//! The tracing backend exposes a bag of shading parameters that the host
//! mutates between launches. The original design addressed them by string
//! name; here the surface is a trait with typed setters so every component's
//! dependency on the context is explicit.

use crate::types::{CameraBasis, LightRecord};

/// Named parameter surface of the tracing backend's shading state.
///
/// Every setter takes effect immediately: there is no batching and no dirty
/// flag, and the next launch observes the new values with no intermediate
/// frame using stale ones.
pub trait ShadingContext {
    /// Sets the visible density window bounds.
    fn set_cutoff(&mut self, from: f32, to: f32);

    /// Sets the shadow-ray flag, carried to the backend as a 0/1 integer.
    fn set_show_shadows(&mut self, show: bool);

    /// Sets the camera eye and basis vectors for the next launch.
    fn set_camera(&mut self, basis: &CameraBasis);

    /// Sets the light list.
    fn set_lights(&mut self, lights: &[LightRecord]);
}
