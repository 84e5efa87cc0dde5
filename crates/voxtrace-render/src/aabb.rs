//! Axis-aligned bounding boxes.

use glam::Vec3;
use voxtrace_core::VoxelInstance;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// The empty box: grows to any point or box merged into it.
    pub const EMPTY: Self = Self {
        min: Vec3::new(f32::MAX, f32::MAX, f32::MAX),
        max: Vec3::new(f32::MIN, f32::MIN, f32::MIN),
    };

    /// Creates a box from explicit corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The bounds of one voxel primitive: position ± half-extent.
    #[must_use]
    pub fn from_voxel(voxel: &VoxelInstance) -> Self {
        let center = voxel.position();
        let half = Vec3::splat(voxel.half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Whether no point has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Expands to cover another box.
    pub fn grow(&mut self, other: &Aabb) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Expands to cover a point.
    pub fn grow_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Center of the box.
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Index (0 = x, 1 = y, 2 = z) of the widest axis.
    #[must_use]
    pub fn longest_axis(&self) -> usize {
        let e = self.extent();
        if e.x >= e.y && e.x >= e.z {
            0
        } else if e.y >= e.z {
            1
        } else {
            2
        }
    }

    /// Whether `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grows_to_first_box() {
        let mut b = Aabb::EMPTY;
        assert!(b.is_empty());
        b.grow(&Aabb::new(Vec3::ZERO, Vec3::ONE));
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ONE);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_voxel_bounds_are_unit_cube() {
        let v = VoxelInstance::new(Vec3::new(2.0, -3.0, 0.0));
        let b = Aabb::from_voxel(&v);
        assert_eq!(b.min, Vec3::new(1.0, -4.0, -1.0));
        assert_eq!(b.max, Vec3::new(3.0, -2.0, 1.0));
        assert_eq!(b.centroid(), v.position());
    }

    #[test]
    fn test_longest_axis() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 5.0, 2.0));
        assert_eq!(b.longest_axis(), 1);
        let b = Aabb::new(Vec3::ZERO, Vec3::splat(1.0));
        assert_eq!(b.longest_axis(), 0);
    }

    #[test]
    fn test_containment() {
        let outer = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
        let inner = Aabb::new(Vec3::ONE, Vec3::splat(2.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }
}
