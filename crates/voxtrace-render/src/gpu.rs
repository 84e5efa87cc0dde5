//! GPU-side scene bindings.
//!
//! Holds the labeled device buffers a wgpu-based trace engine binds into its
//! pipeline: the voxel and color storage buffers, the flattened BVH, the
//! light list, and the filter/camera uniforms with their per-frame update
//! paths.

use glam::Vec3;
use voxtrace_core::{CameraBasis, ColorSample, LightRecord, VoxelInstance};

use crate::accel::GeometryGroup;
use crate::buffer::{create_storage_buffer, create_uniform_buffer, update_buffer};
use crate::bvh::Bvh;

/// Filter scalars as the shading programs read them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct FilterUniforms {
    /// Lower visible-density bound.
    pub cutoff_from: f32,
    /// Upper visible-density bound.
    pub cutoff_to: f32,
    /// Shadow flag as a 0/1 integer.
    pub show_shadows: u32,
    pub _padding: u32,
}

impl FilterUniforms {
    /// Packs host-side filter values.
    #[must_use]
    pub fn new(cutoff_from: f32, cutoff_to: f32, show_shadows: bool) -> Self {
        Self {
            cutoff_from,
            cutoff_to,
            show_shadows: u32::from(show_shadows),
            _padding: 0,
        }
    }
}

/// Camera eye and basis vectors as the ray-generation program reads them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[allow(clippy::pub_underscore_fields)]
pub struct CameraUniforms {
    pub eye: [f32; 3],
    pub _pad0: f32,
    pub u: [f32; 3],
    pub _pad1: f32,
    pub v: [f32; 3],
    pub _pad2: f32,
    pub w: [f32; 3],
    pub _pad3: f32,
}

impl From<&CameraBasis> for CameraUniforms {
    fn from(basis: &CameraBasis) -> Self {
        Self {
            eye: basis.eye.to_array(),
            _pad0: 0.0,
            u: basis.u.to_array(),
            _pad1: 0.0,
            v: basis.v.to_array(),
            _pad2: 0.0,
            w: basis.w.to_array(),
            _pad3: 0.0,
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::from(&CameraBasis::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO))
    }
}

/// One flattened BVH node in the layout the traversal shader consumes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuBvhNode {
    /// Minimum corner of the node bounds.
    pub min: [f32; 3],
    /// Right-child index for interior nodes, primitive-range start for leaves.
    pub offset: u32,
    /// Maximum corner of the node bounds.
    pub max: [f32; 3],
    /// Leaf primitive count; 0 marks an interior node.
    pub count: u32,
}

/// Flattens the host tree into GPU nodes, preserving depth-first order.
#[must_use]
pub fn flatten_bvh(bvh: &Bvh) -> Vec<GpuBvhNode> {
    bvh.nodes()
        .iter()
        .map(|node| GpuBvhNode {
            min: node.bounds.min.to_array(),
            offset: node.offset,
            max: node.bounds.max.to_array(),
            count: node.count,
        })
        .collect()
}

/// The labeled device buffers a wgpu trace engine binds.
pub struct GpuSceneBindings {
    /// Voxel primitive storage buffer.
    pub voxel_buffer: wgpu::Buffer,
    /// Per-voxel color storage buffer.
    pub color_buffer: wgpu::Buffer,
    /// Flattened BVH node storage buffer.
    pub bvh_buffer: wgpu::Buffer,
    /// BVH leaf primitive-order storage buffer.
    pub prim_order_buffer: wgpu::Buffer,
    /// Light list storage buffer.
    pub light_buffer: wgpu::Buffer,
    /// Filter scalar uniform buffer.
    pub filter_buffer: wgpu::Buffer,
    /// Camera basis uniform buffer.
    pub camera_buffer: wgpu::Buffer,
}

impl GpuSceneBindings {
    /// Uploads the whole scene to the device.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        voxels: &[VoxelInstance],
        colors: &[ColorSample],
        group: &GeometryGroup,
        lights: &[LightRecord],
    ) -> Self {
        let nodes = flatten_bvh(group.bvh());
        Self {
            voxel_buffer: create_storage_buffer(device, voxels, Some("voxel_buffer")),
            color_buffer: create_storage_buffer(device, colors, Some("color_buffer")),
            bvh_buffer: create_storage_buffer(device, &nodes, Some("bvh_buffer")),
            prim_order_buffer: create_storage_buffer(
                device,
                group.bvh().primitive_order(),
                Some("prim_order_buffer"),
            ),
            light_buffer: create_storage_buffer(device, lights, Some("light_buffer")),
            filter_buffer: create_uniform_buffer(
                device,
                &FilterUniforms::new(0.0, 255.0, true),
                Some("filter_uniforms"),
            ),
            camera_buffer: create_uniform_buffer(
                device,
                &CameraUniforms::default(),
                Some("camera_uniforms"),
            ),
        }
    }

    /// Rewrites the filter uniforms.
    pub fn update_filter(&self, queue: &wgpu::Queue, uniforms: &FilterUniforms) {
        update_buffer(queue, &self.filter_buffer, &[*uniforms]);
    }

    /// Rewrites the camera uniforms.
    pub fn update_camera(&self, queue: &wgpu::Queue, uniforms: &CameraUniforms) {
        update_buffer(queue, &self.camera_buffer, &[*uniforms]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtrace_core::VoxelShape;

    fn test_scene() -> (Vec<VoxelInstance>, Vec<ColorSample>, GeometryGroup) {
        let voxels: Vec<VoxelInstance> = (0..8)
            .map(|i| VoxelInstance::new(Vec3::new(i as f32, 0.0, 0.0)))
            .collect();
        let colors: Vec<ColorSample> = (0..8)
            .map(|i| ColorSample::new(Vec3::splat(i as f32 / 8.0), i as f32))
            .collect();
        let group = GeometryGroup::build(&voxels, VoxelShape::Box).unwrap();
        (voxels, colors, group)
    }

    #[test]
    fn test_flatten_preserves_nodes() {
        let (_, _, group) = test_scene();
        let nodes = flatten_bvh(group.bvh());
        assert_eq!(nodes.len(), group.bvh().nodes().len());
        let root = group.bvh().root_bounds().unwrap();
        assert_eq!(nodes[0].min, root.min.to_array());
        assert_eq!(nodes[0].max, root.max.to_array());
    }

    #[test]
    fn test_uniform_layouts() {
        assert_eq!(std::mem::size_of::<FilterUniforms>(), 16);
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 64);
        assert_eq!(std::mem::size_of::<GpuBvhNode>(), 32);
    }

    /// Exercises the real upload path when a GPU (or software adapter) is
    /// available; environments without one skip silently.
    #[test]
    fn test_gpu_upload_when_adapter_available() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let Some(adapter) = pollster::block_on(
            instance.request_adapter(&wgpu::RequestAdapterOptions::default()),
        ) else {
            log::warn!("no wgpu adapter available, skipping GPU upload test");
            return;
        };
        let Ok((device, queue)) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("voxtrace test device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )) else {
            return;
        };

        let (voxels, colors, group) = test_scene();
        let lights = [LightRecord::new(Vec3::splat(10.0), Vec3::ONE, true)];
        let bindings = GpuSceneBindings::new(&device, &voxels, &colors, &group, &lights);

        bindings.update_filter(&queue, &FilterUniforms::new(10.0, 200.0, false));
        bindings.update_camera(
            &queue,
            &CameraUniforms::from(&CameraBasis::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z)),
        );
        queue.submit(std::iter::empty());
        let _ = device.poll(wgpu::Maintain::Wait);
    }
}
