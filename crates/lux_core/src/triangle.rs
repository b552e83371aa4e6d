//! Triangle primitive.
//!
//! Intersection is a plane hit followed by a barycentric containment test.
//! The 2x2 barycentric system is solved in the coordinate plane that drops
//! the dominant axis of the normal, so axis-aligned triangles (whose
//! projection onto one of the other planes collapses to a segment) stay
//! solvable.

use crate::Material;
use lux_math::{DVec3, Interval, Ray};

/// Below this |d . n| the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A triangle given by a corner and two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    p0: DVec3,
    edge_a: DVec3,
    edge_b: DVec3,
    /// p0 + edge_a
    p1: DVec3,
    /// p0 + edge_b
    p2: DVec3,
    /// Unit face normal, zero for degenerate triangles
    normal: DVec3,
    /// Coordinate axes used for the barycentric solve
    axes: (usize, usize),
    pub material: Material,
}

impl Triangle {
    /// Create a triangle from a corner and the two edges leaving it.
    pub fn new(p0: DVec3, edge_a: DVec3, edge_b: DVec3, material: Material) -> Self {
        let normal = edge_a.cross(edge_b).normalize_or_zero();

        Self {
            p0,
            edge_a,
            edge_b,
            p1: p0 + edge_a,
            p2: p0 + edge_b,
            normal,
            axes: projection_axes(normal),
            material,
        }
    }

    /// Create a triangle from three vertices.
    pub fn from_vertices(v0: DVec3, v1: DVec3, v2: DVec3, material: Material) -> Self {
        Self::new(v0, v1 - v0, v2 - v0, material)
    }

    pub fn vertices(&self) -> [DVec3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Unit normal following the winding edge_a x edge_b.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn centroid(&self) -> DVec3 {
        (self.p0 + self.p1 + self.p2) / 3.0
    }

    /// True when the edges are parallel and no unit normal exists.
    pub fn is_degenerate(&self) -> bool {
        self.normal == DVec3::ZERO
    }

    /// Distance to the plane hit if it lies inside the triangle and `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.p0 - ray.origin).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let (l0, l1) = self.barycentric(ray.at(t))?;
        let l2 = 1.0 - l0 - l1;
        [l0, l1, l2]
            .iter()
            .all(|l| Interval::UNIT.contains(*l))
            .then_some(t)
    }

    /// Solve q = l0*p0 + l1*p1 + (1 - l0 - l1)*p2 for (l0, l1).
    fn barycentric(&self, q: DVec3) -> Option<(f64, f64)> {
        let (i, j) = self.axes;
        let (p0, p1, p2) = (self.p0, self.p1, self.p2);

        let det = (p0[i] - p2[i]) * (p1[j] - p2[j]) - (p0[j] - p2[j]) * (p1[i] - p2[i]);
        if det == 0.0 {
            return None;
        }

        let qi = q[i] - p2[i];
        let qj = q[j] - p2[j];
        let l0 = ((p1[j] - p2[j]) * qi + (p2[i] - p1[i]) * qj) / det;
        let l1 = ((p2[j] - p0[j]) * qi + (p0[i] - p2[i]) * qj) / det;
        Some((l0, l1))
    }
}

/// The two axes left after dropping the normal's largest component.
fn projection_axes(normal: DVec3) -> (usize, usize) {
    let n = normal.abs();
    if n.x >= n.y && n.x >= n.z {
        (1, 2)
    } else if n.y >= n.z {
        (0, 2)
    } else {
        (0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HIT_EPSILON;

    fn forward() -> Interval {
        Interval::new(HIT_EPSILON, f64::INFINITY)
    }

    fn grey() -> Material {
        Material::diffuse(DVec3::splat(0.75))
    }

    /// One triangle per axis-aligned plane plus a tilted one.
    fn triangles() -> Vec<Triangle> {
        vec![
            // Back wall (z = 0)
            Triangle::new(DVec3::ZERO, DVec3::new(100.0, 0.0, 0.0), DVec3::new(0.0, 80.0, 0.0), grey()),
            // Floor (y = 0)
            Triangle::new(
                DVec3::new(0.0, 0.0, 170.0),
                DVec3::new(100.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, -170.0),
                grey(),
            ),
            // Left wall (x = 0)
            Triangle::new(
                DVec3::new(0.0, 0.0, 170.0),
                DVec3::new(0.0, 0.0, -170.0),
                DVec3::new(0.0, 80.0, 0.0),
                grey(),
            ),
            // Tilted plane x = y
            Triangle::from_vertices(
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(5.0, 5.0, 0.0),
                DVec3::new(0.0, 0.0, 5.0),
                grey(),
            ),
        ]
    }

    #[test]
    fn test_normal_is_unit() {
        for tri in triangles() {
            assert!((tri.normal().length() - 1.0).abs() < 1e-12);
            assert!(!tri.is_degenerate());
        }
    }

    #[test]
    fn test_derived_vertices() {
        let tri = &triangles()[0];
        let [p0, p1, p2] = tri.vertices();
        assert_eq!(p0, DVec3::ZERO);
        assert_eq!(p1, DVec3::new(100.0, 0.0, 0.0));
        assert_eq!(p2, DVec3::new(0.0, 80.0, 0.0));
        assert_eq!(tri.normal(), DVec3::Z);
    }

    #[test]
    fn test_ray_through_centroid_hits() {
        for tri in triangles() {
            let c = tri.centroid();
            for side in [1.0, -1.0] {
                let origin = c + tri.normal() * 10.0 * side + DVec3::new(0.3, -0.2, 0.1);
                let ray = Ray::new(origin, (c - origin).normalize());
                let t = tri.intersect(&ray, forward()).expect("centroid hit");
                assert!((ray.at(t) - c).length() < 1e-9);
            }
        }
    }

    #[test]
    fn test_ray_outside_bounds_misses() {
        for tri in triangles() {
            let [p0, p1, p2] = tri.vertices();
            // Beyond the p1-p2 edge, opposite p0
            let outside = (p1 + p2) * 0.5 + ((p1 + p2) * 0.5 - p0) * 0.25;
            let origin = outside + tri.normal() * 10.0;
            let ray = Ray::new(origin, -tri.normal());
            assert!(tri.intersect(&ray, forward()).is_none());
        }
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = &triangles()[0];
        let ray = Ray::new(DVec3::new(10.0, 10.0, 0.0), DVec3::X);
        assert!(tri.intersect(&ray, forward()).is_none());

        let ray = Ray::new(DVec3::new(10.0, 10.0, 5.0), DVec3::Y);
        assert!(tri.intersect(&ray, forward()).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let tri = &triangles()[0];
        let ray = Ray::new(DVec3::new(10.0, 10.0, 5.0), DVec3::Z);
        assert!(tri.intersect(&ray, forward()).is_none());
    }

    #[test]
    fn test_degenerate_triangle() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0, grey());
        assert!(tri.is_degenerate());

        let ray = Ray::new(DVec3::new(0.5, 0.0, 1.0), -DVec3::Z);
        assert!(tri.intersect(&ray, forward()).is_none());
    }
}
