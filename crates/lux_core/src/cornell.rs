//! Cornell box presets.
//!
//! The box spans x in [0, 100], y in [0, ~80], z in [0, 170] with the camera
//! looking down -z from outside the front wall. Both representations share
//! the same light sphere just below the ceiling.

use crate::{Material, Primitive, Scene, SceneGeometry, SceneResult, Sphere, Triangle};
use lux_math::{Color, DVec3};

/// Radius of the spheres standing in for walls.
const WALL_RADIUS: f64 = 1e5;

fn red() -> Material {
    Material::diffuse(Color::new(0.75, 0.25, 0.25))
}

fn blue() -> Material {
    Material::diffuse(Color::new(0.25, 0.25, 0.75))
}

fn white() -> Material {
    Material::diffuse(Color::splat(0.75))
}

/// The spherical area light used by both representations.
pub fn light() -> Sphere {
    Sphere::new(
        DVec3::new(50.0, 81.6 - 16.5, 81.6),
        1.5,
        Material::emissive(Color::splat(4.0) * 100.0),
    )
}

/// Six walls made of very large spheres.
pub fn sphere_walls() -> Vec<Primitive> {
    let wall = |center: DVec3, material: Material| -> Primitive {
        Sphere::new(center, WALL_RADIUS, material).into()
    };

    vec![
        wall(DVec3::new(WALL_RADIUS + 1.0, 40.8, 81.6), red()),    // Left
        wall(DVec3::new(-WALL_RADIUS + 99.0, 40.8, 81.6), blue()), // Right
        wall(DVec3::new(50.0, 40.8, WALL_RADIUS), white()),        // Back
        wall(DVec3::new(50.0, 40.8, -WALL_RADIUS + 170.0), Material::diffuse(Color::ZERO)), // Front
        wall(DVec3::new(50.0, WALL_RADIUS, 81.6), white()),        // Floor
        wall(DVec3::new(50.0, -WALL_RADIUS + 81.6, 81.6), white()), // Ceiling
    ]
}

/// Mirror and glass balls standing on the floor.
pub fn sphere_interior() -> Vec<Primitive> {
    vec![
        Sphere::new(DVec3::new(27.0, 16.5, 47.0), 16.5, Material::specular(Color::splat(0.999))).into(),
        Sphere::new(DVec3::new(73.0, 16.5, 78.0), 16.5, Material::refractive(Color::splat(0.999))).into(),
    ]
}

/// Six walls, two triangles each.
pub fn triangle_walls() -> Vec<Primitive> {
    let tri = |p0: [f64; 3], a: [f64; 3], b: [f64; 3], material: Material| -> Primitive {
        Triangle::new(DVec3::from(p0), DVec3::from(a), DVec3::from(b), material).into()
    };
    let green = Material::diffuse(Color::new(0.0, 1.0, 0.0));

    vec![
        // Back
        tri([0.0, 0.0, 0.0], [100.0, 0.0, 0.0], [0.0, 80.0, 0.0], white()),
        tri([100.0, 80.0, 0.0], [-100.0, 0.0, 0.0], [0.0, -80.0, 0.0], white()),
        // Bottom
        tri([0.0, 0.0, 170.0], [100.0, 0.0, 0.0], [0.0, 0.0, -170.0], white()),
        tri([100.0, 0.0, 0.0], [-100.0, 0.0, 0.0], [0.0, 0.0, 170.0], white()),
        // Top
        tri([0.0, 80.0, 0.0], [100.0, 0.0, 0.0], [0.0, 0.0, 170.0], white()),
        tri([100.0, 80.0, 170.0], [-100.0, 0.0, 0.0], [0.0, 0.0, -170.0], white()),
        // Left
        tri([0.0, 0.0, 170.0], [0.0, 0.0, -170.0], [0.0, 80.0, 0.0], red()),
        tri([0.0, 80.0, 0.0], [0.0, 0.0, 170.0], [0.0, -80.0, 0.0], red()),
        // Right
        tri([100.0, 0.0, 0.0], [0.0, 0.0, 170.0], [0.0, 80.0, 0.0], blue()),
        tri([100.0, 80.0, 170.0], [0.0, 0.0, -170.0], [0.0, -80.0, 0.0], blue()),
        // Front, behind the camera's start point
        tri([100.0, 0.0, 170.0], [-100.0, 0.0, 0.0], [0.0, 80.0, 0.0], green),
        tri([0.0, 80.0, 170.0], [100.0, 0.0, 0.0], [0.0, -80.0, 0.0], green),
    ]
}

/// A 20 x 40 x 20 cuboid standing on the floor.
pub fn triangle_interior() -> Vec<Primitive> {
    let tri = |p0: [f64; 3], a: [f64; 3], b: [f64; 3]| -> Primitive {
        Triangle::new(DVec3::from(p0), DVec3::from(a), DVec3::from(b), white()).into()
    };

    vec![
        // Right
        tri([30.0, 0.0, 100.0], [0.0, 0.0, -20.0], [0.0, 40.0, 0.0]),
        tri([30.0, 40.0, 80.0], [0.0, 0.0, 20.0], [0.0, -40.0, 0.0]),
        // Left
        tri([10.0, 0.0, 80.0], [0.0, 0.0, 20.0], [0.0, 40.0, 0.0]),
        tri([10.0, 40.0, 100.0], [0.0, 0.0, -20.0], [0.0, -40.0, 0.0]),
        // Front
        tri([10.0, 0.0, 100.0], [20.0, 0.0, 0.0], [0.0, 40.0, 0.0]),
        tri([30.0, 40.0, 100.0], [-20.0, 0.0, 0.0], [0.0, -40.0, 0.0]),
        // Back
        tri([30.0, 0.0, 80.0], [-20.0, 0.0, 0.0], [0.0, 40.0, 0.0]),
        tri([10.0, 40.0, 80.0], [20.0, 0.0, 0.0], [0.0, -40.0, 0.0]),
        // Top
        tri([10.0, 40.0, 100.0], [20.0, 0.0, 0.0], [0.0, 0.0, -20.0]),
        tri([30.0, 40.0, 80.0], [-20.0, 0.0, 0.0], [0.0, 0.0, 20.0]),
    ]
}

/// Build the Cornell box in the requested representation.
pub fn scene(geometry: SceneGeometry, interior: bool) -> SceneResult<Scene> {
    let mut primitives = match geometry {
        SceneGeometry::Spheres => sphere_walls(),
        SceneGeometry::Triangles => triangle_walls(),
    };
    if interior {
        primitives.extend(match geometry {
            SceneGeometry::Spheres => sphere_interior(),
            SceneGeometry::Triangles => triangle_interior(),
        });
    }
    Scene::new(primitives, light())
}
