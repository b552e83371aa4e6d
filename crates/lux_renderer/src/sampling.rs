//! Random sampling helpers shared by the camera and the estimator.
//!
//! Every helper draws its uniform variates from the caller's generator in a
//! fixed order, so a seeded generator reproduces the same path.

use std::f64::consts::PI;

use lux_core::Sphere;
use lux_math::DVec3;
use rand::{Rng, RngCore};

/// Uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Two unit vectors completing `w` to a right-handed orthonormal frame.
///
/// `w` must be unit length.
pub fn orthonormal_basis(w: DVec3) -> (DVec3, DVec3) {
    // Any axis not nearly parallel to w
    let axis = if w.x.abs() > 0.1 { DVec3::Y } else { DVec3::X };
    let u = axis.cross(w).normalize();
    let v = w.cross(u);
    (u, v)
}

/// Cosine-weighted direction on the hemisphere around `w`.
pub fn cosine_hemisphere(w: DVec3, rng: &mut dyn RngCore) -> DVec3 {
    let r1 = 2.0 * PI * gen_f64(rng);
    let r2 = gen_f64(rng);
    let r2s = r2.sqrt();

    let (u, v) = orthonormal_basis(w);
    (u * r1.cos() * r2s + v * r1.sin() * r2s + w * (1.0 - r2).sqrt()).normalize()
}

/// A direction toward a spherical light and the cone it was drawn from.
#[derive(Debug, Clone, Copy)]
pub struct LightSample {
    pub direction: DVec3,
    /// Cosine of the cone half-angle subtended by the light
    pub cos_a_max: f64,
    /// Solid angle of the cone, 2pi(1 - cos_a_max)
    pub solid_angle: f64,
}

/// Uniformly sample the cone of directions from `p` that hit `light`.
///
/// Returns `None` when `p` lies inside the light.
pub fn sample_sphere_light(p: DVec3, light: &Sphere, rng: &mut dyn RngCore) -> Option<LightSample> {
    let to_light = light.center - p;
    let dist2 = to_light.length_squared();
    let r2 = light.radius * light.radius;
    if dist2 <= r2 {
        return None;
    }

    let sw = to_light / dist2.sqrt();
    let (su, sv) = orthonormal_basis(sw);

    let cos_a_max = (1.0 - r2 / dist2).sqrt();
    let eps1 = gen_f64(rng);
    let eps2 = gen_f64(rng);
    let cos_a = 1.0 - eps1 + eps1 * cos_a_max;
    let sin_a = (1.0 - cos_a * cos_a).max(0.0).sqrt();
    let phi = 2.0 * PI * eps2;

    let direction = (su * phi.cos() * sin_a + sv * phi.sin() * sin_a + sw * cos_a).normalize();

    Some(LightSample {
        direction,
        cos_a_max,
        solid_angle: 2.0 * PI * (1.0 - cos_a_max),
    })
}

/// Tent-filtered offset in [-1, 1], peaked at 0.
pub fn tent(rng: &mut dyn RngCore) -> f64 {
    let r = 2.0 * gen_f64(rng);
    if r < 1.0 {
        r.sqrt() - 1.0
    } else {
        1.0 - (2.0 - r).sqrt()
    }
}

/// Point on the unit disk from a uniform angle and radius.
///
/// With `uniform_area` false the radius is used as drawn, which crowds
/// samples toward the center; true applies the sqrt warp.
pub fn lens_disk(rng: &mut dyn RngCore, uniform_area: bool) -> (f64, f64) {
    let angle = gen_f64(rng) * 2.0 * PI;
    let radius = gen_f64(rng);
    let radius = if uniform_area { radius.sqrt() } else { radius };
    (angle.cos() * radius, angle.sin() * radius)
}
