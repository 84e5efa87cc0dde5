//! Voxel grid construction.
//!
//! Every cell of the density grid becomes one renderable primitive,
//! regardless of its eventual visibility; the cutoff window filters at trace
//! time, never at build time.

use glam::Vec3;
use voxtrace_core::{Result, VolumeDimensions, VoxelInstance, VoxelShape};

/// The full primitive set for a regular grid, centered at the origin.
///
/// Primitives are enumerated in nested x→y→z order (x outermost, z
/// innermost), so primitive `i` covers the unique `(x, y, z)` with
/// `i = (x*Y + y)*Z + z`. The buffer is written once here and immutable
/// afterwards; geometry is never rebuilt after initial scene construction.
pub struct VoxelGrid {
    dims: VolumeDimensions,
    shape: VoxelShape,
    instances: Vec<VoxelInstance>,
}

impl VoxelGrid {
    /// Enumerates every cell as a primitive with centered coordinates.
    ///
    /// Cell `(x, y, z)` lands at `(x - X/2, y - Y/2, z - Z/2)` using integer
    /// halving, which centers the volume on the origin.
    pub fn build(dims: VolumeDimensions, shape: VoxelShape) -> Result<Self> {
        dims.validate()?;

        let half_x = (dims.x / 2) as f32;
        let half_y = (dims.y / 2) as f32;
        let half_z = (dims.z / 2) as f32;

        let mut instances = Vec::with_capacity(dims.total());
        for x in 0..dims.x {
            for y in 0..dims.y {
                for z in 0..dims.z {
                    instances.push(VoxelInstance::new(Vec3::new(
                        x as f32 - half_x,
                        y as f32 - half_y,
                        z as f32 - half_z,
                    )));
                }
            }
        }

        log::info!("voxel grid built: {} primitives ({dims})", instances.len());
        Ok(Self {
            dims,
            shape,
            instances,
        })
    }

    /// Grid extents.
    #[must_use]
    pub fn dimensions(&self) -> VolumeDimensions {
        self.dims
    }

    /// The shape shared by every primitive.
    #[must_use]
    pub fn shape(&self) -> VoxelShape {
        self.shape
    }

    /// The primitive buffer, in enumeration order.
    #[must_use]
    pub fn instances(&self) -> &[VoxelInstance] {
        &self.instances
    }

    /// Total primitive count, always `x * y * z`.
    #[must_use]
    pub fn primitive_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Linear index of cell `(x, y, z)` in the primitive buffer.
    #[must_use]
    pub fn linear_index(&self, x: u32, y: u32, z: u32) -> usize {
        ((x as usize * self.dims.y as usize) + y as usize) * self.dims.z as usize + z as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_dimensions() {
        let grid = VoxelGrid::build(VolumeDimensions::new(3, 4, 5), VoxelShape::Box).unwrap();
        assert_eq!(grid.primitive_count(), 60);
        assert_eq!(grid.instances().len(), 60);
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(VoxelGrid::build(VolumeDimensions::new(0, 4, 5), VoxelShape::Box).is_err());
    }

    #[test]
    fn test_2x2x2_first_primitive_is_centered() {
        let grid = VoxelGrid::build(VolumeDimensions::new(2, 2, 2), VoxelShape::Sphere).unwrap();
        assert_eq!(grid.instances()[0].position(), Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(grid.instances()[7].position(), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(grid.shape(), VoxelShape::Sphere);
    }

    #[test]
    fn test_enumeration_order_is_x_outer_z_inner() {
        let dims = VolumeDimensions::new(2, 3, 4);
        let grid = VoxelGrid::build(dims, VoxelShape::Box).unwrap();
        let mut i = 0;
        for x in 0..dims.x {
            for y in 0..dims.y {
                for z in 0..dims.z {
                    assert_eq!(grid.linear_index(x, y, z), i);
                    let expected = Vec3::new(
                        x as f32 - (dims.x / 2) as f32,
                        y as f32 - (dims.y / 2) as f32,
                        z as f32 - (dims.z / 2) as f32,
                    );
                    assert_eq!(grid.instances()[i].position(), expected);
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn test_unit_half_extent() {
        let grid = VoxelGrid::build(VolumeDimensions::new(2, 2, 2), VoxelShape::Box).unwrap();
        assert!(grid.instances().iter().all(|v| v.half_extent == 1.0));
    }

    proptest::proptest! {
        #[test]
        fn prop_every_cell_becomes_one_primitive(x in 1u32..8, y in 1u32..8, z in 1u32..8) {
            let dims = VolumeDimensions::new(x, y, z);
            let grid = VoxelGrid::build(dims, VoxelShape::Box).unwrap();
            proptest::prop_assert_eq!(grid.primitive_count() as usize, dims.total());
            // Positions are unique: enumeration never revisits a cell.
            let mut seen: Vec<[i64; 3]> = grid
                .instances()
                .iter()
                .map(|v| {
                    let p = v.position();
                    [p.x as i64, p.y as i64, p.z as i64]
                })
                .collect();
            seen.sort_unstable();
            seen.dedup();
            proptest::prop_assert_eq!(seen.len(), dims.total());
        }
    }
}
