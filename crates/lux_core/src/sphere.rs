//! Sphere primitive.

use crate::Material;
use lux_math::{DVec3, Interval, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Nearest root of |o + t*d - c|^2 = r^2 strictly inside `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, far root when the origin is inside the sphere
        let root = (h - sqrtd) / a;
        if ray_t.surrounds(root) {
            return Some(root);
        }
        let root = (h + sqrtd) / a;
        ray_t.surrounds(root).then_some(root)
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, p: DVec3) -> DVec3 {
        (p - self.center).normalize()
    }
}
