//! Geometry group assembly.
//!
//! Wraps the voxel primitive set, its material binding, and the BVH into the
//! single traceable unit the backend consumes. Built exactly once per scene
//! lifetime; a dynamic primitive set would have to invalidate and rebuild the
//! whole group, since no partial update contract exists.

use voxtrace_core::{Result, VoxelInstance, VoxelShape, VoxtraceError};

use crate::aabb::Aabb;
use crate::backend::TraceBackend;
use crate::bvh::Bvh;

/// Shading entry points attached to the voxel material.
///
/// The callbacks themselves are owned by the backend; the group only names
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialBinding {
    /// Radiance closest-hit entry point.
    pub closest_hit: String,
    /// Shadow any-hit entry point.
    pub any_hit_shadow: String,
}

impl Default for MaterialBinding {
    fn default() -> Self {
        Self {
            closest_hit: "closest_hit_radiance".to_string(),
            any_hit_shadow: "any_hit_shadow".to_string(),
        }
    }
}

/// The primitive set, material binding, and spatial index as one unit.
#[derive(Debug)]
pub struct GeometryGroup {
    primitive_count: u32,
    shape: VoxelShape,
    material: MaterialBinding,
    bvh: Bvh,
}

impl GeometryGroup {
    /// Builds the group and its median-split BVH over the primitive set.
    pub fn build(voxels: &[VoxelInstance], shape: VoxelShape) -> Result<Self> {
        if voxels.is_empty() {
            return Err(VoxtraceError::Config(
                "geometry group requires at least one primitive".to_string(),
            ));
        }
        let prim_bounds: Vec<Aabb> = voxels.iter().map(Aabb::from_voxel).collect();
        let bvh = Bvh::build(&prim_bounds);
        log::info!(
            "acceleration structure built over {} primitives ({} nodes)",
            voxels.len(),
            bvh.nodes().len()
        );
        Ok(Self {
            primitive_count: voxels.len() as u32,
            shape,
            material: MaterialBinding::default(),
            bvh,
        })
    }

    /// Publishes the group under both of its backend roles: primary
    /// traceable object and shadow occluder.
    pub fn publish(&self, backend: &mut dyn TraceBackend) -> Result<()> {
        backend.set_trace_root(self)?;
        backend.set_shadow_root(self)
    }

    /// Number of primitives in the group.
    #[must_use]
    pub fn primitive_count(&self) -> u32 {
        self.primitive_count
    }

    /// The shape shared by every primitive.
    #[must_use]
    pub fn shape(&self) -> VoxelShape {
        self.shape
    }

    /// The material binding.
    #[must_use]
    pub fn material(&self) -> &MaterialBinding {
        &self.material
    }

    /// The spatial index.
    #[must_use]
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// World bounds of the whole group.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.bvh.root_bounds()
    }
}
