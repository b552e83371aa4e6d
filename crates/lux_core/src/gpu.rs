//! Fixed-layout sphere records for upload to a compute kernel.
//!
//! The layout follows std140 rules: every `vec3` is padded to 16 bytes, so a
//! record is 48 bytes and arrays of records need no extra stride padding.
//! The kernel side must declare the same field order.

use crate::Scene;
use bytemuck::{Pod, Zeroable};

/// One sphere as seen by the GPU path tracer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuSphere {
    pub center: [f32; 3],
    _pad0: f32,
    pub color: [f32; 3],
    _pad1: f32,
    pub radius: f32,
    _pad2: [f32; 3],
}

impl GpuSphere {
    pub fn new(center: [f32; 3], color: [f32; 3], radius: f32) -> Self {
        Self {
            center,
            color,
            radius,
            ..Zeroable::zeroed()
        }
    }
}

impl Scene {
    /// Every sphere primitive in scene order, followed by the light.
    ///
    /// Surfaces export their albedo. The light exports its emission
    /// normalized to a peak of 1, the kernel scales it by its own intensity.
    pub fn gpu_spheres(&self) -> Vec<GpuSphere> {
        let light = self.light();
        let peak = light.material.emission.max_element();

        self.primitives()
            .iter()
            .filter_map(|p| p.as_sphere())
            .map(|s| {
                GpuSphere::new(
                    s.center.as_vec3().into(),
                    s.material.albedo.as_vec3().into(),
                    s.radius as f32,
                )
            })
            .chain(std::iter::once(GpuSphere::new(
                light.center.as_vec3().into(),
                (light.material.emission / peak).as_vec3().into(),
                light.radius as f32,
            )))
            .collect()
    }
}

/// View records as the raw bytes to upload.
pub fn as_bytes(spheres: &[GpuSphere]) -> &[u8] {
    bytemuck::cast_slice(spheres)
}
