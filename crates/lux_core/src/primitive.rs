//! Tagged primitive variant and the hit record returned by scene queries.

use crate::{Material, Sphere, Triangle};
use lux_math::{DVec3, Interval, Ray};

/// Any shape the scene can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Hit distance within `ray_t`, if any.
    #[inline]
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray, ray_t),
            Primitive::Triangle(triangle) => triangle.intersect(ray, ray_t),
        }
    }

    /// Geometric normal at `p`. Not flipped toward the viewer.
    #[inline]
    pub fn normal_at(&self, p: DVec3) -> DVec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(p),
            Primitive::Triangle(triangle) => triangle.normal(),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Triangle(triangle) => &triangle.material,
        }
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Primitive::Sphere(sphere) => Some(sphere),
            Primitive::Triangle(_) => None,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

/// Nearest intersection found by a scene query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the hit
    pub t: f64,
    /// Index of the primitive in the scene
    pub index: usize,
    pub primitive: &'a Primitive,
}

impl<'a> Hit<'a> {
    #[inline]
    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}
