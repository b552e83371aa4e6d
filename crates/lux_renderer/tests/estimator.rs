//! Statistical properties of the radiance estimator.

use lux_renderer::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A square of two triangles in the plane y = `height`, facing up.
fn plane(height: f64, half: f64, material: Material) -> Vec<Primitive> {
    let corner = |x: f64, z: f64| DVec3::new(x, height, z);
    vec![
        Triangle::from_vertices(corner(-half, -half), corner(-half, half), corner(half, half), material).into(),
        Triangle::from_vertices(corner(-half, -half), corner(half, half), corner(half, -half), material).into(),
    ]
}

fn mean_radiance(ray: &Ray, scene: &Scene, config: &RenderConfig, samples: u32, seed: u64) -> Color {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sum = Color::ZERO;
    for _ in 0..samples {
        sum += radiance(ray, scene, 0, true, config, &mut rng);
    }
    sum / samples as f64
}

#[test]
fn test_single_bounce_is_bounded_by_light() {
    let albedo = 0.5;
    let emission = 50.0;
    let light = Sphere::new(DVec3::new(0.0, 10.0, 0.0), 1.0, Material::emissive(Color::splat(emission)));
    let scene = Scene::new(plane(0.0, 100.0, Material::diffuse(Color::splat(albedo))), light).unwrap();
    let config = RenderConfig::default();
    let mut rng = StdRng::seed_from_u64(21);

    for x in [0.0, 3.0, 12.0, 40.0] {
        let ray = Ray::new(DVec3::new(x, 5.0, 0.0), -DVec3::Y);
        let hit = DVec3::new(x, 0.0, 0.0);

        // Solid angle of the light seen from the hit point
        let d = (light.center - hit).length();
        let cos_a_max = (1.0 - (light.radius / d).powi(2)).sqrt();
        let omega = 2.0 * std::f64::consts::PI * (1.0 - cos_a_max);
        let bound = albedo * emission * omega / std::f64::consts::PI;

        for _ in 0..200 {
            let c = radiance(&ray, &scene, 0, true, &config, &mut rng);
            assert!(c.min_element() > 0.0);
            assert!(c.max_element() <= bound * (1.0 + 1e-9), "x = {x}: {c:?} > {bound}");
        }
    }
}

#[test]
fn test_roulette_keeps_estimate_unbiased() {
    // Light between two facing planes so paths bounce many times
    let material = Material::diffuse(Color::splat(0.5));
    let mut primitives = plane(0.0, 1e4, material);
    let mut ceiling = plane(20.0, 1e4, material);
    primitives.append(&mut ceiling);
    let light = Sphere::new(DVec3::new(0.0, 10.0, 0.0), 1.0, Material::emissive(Color::splat(50.0)));
    let scene = Scene::new(primitives, light).unwrap();

    let ray = Ray::new(DVec3::new(0.0, 5.0, 0.0), -DVec3::Y);
    let samples = 40_000;

    let eager = RenderConfig {
        max_bounces: 0,
        ..RenderConfig::default()
    };
    let patient = RenderConfig {
        max_bounces: 20,
        ..RenderConfig::default()
    };

    let a = mean_radiance(&ray, &scene, &eager, samples, 1);
    let b = mean_radiance(&ray, &scene, &patient, samples, 2);

    assert!(b.x > 0.0);
    assert!(((a.x - b.x) / b.x).abs() < 0.05, "roulette {a:?} vs full {b:?}");
}

#[test]
fn test_mirror_sees_what_it_reflects() {
    // A mirror floor shows the lit diffuse ceiling
    let white = Material::diffuse(Color::splat(0.75));
    let mut primitives = plane(0.0, 100.0, Material::specular(Color::ONE));
    primitives.extend(plane(20.0, 100.0, white));
    let light = Sphere::new(DVec3::new(0.0, 10.0, 0.0), 1.0, Material::emissive(Color::splat(50.0)));
    let scene = Scene::new(primitives, light).unwrap();
    let config = RenderConfig::default();

    let down = Ray::new(DVec3::new(30.0, 5.0, 0.0), -DVec3::Y);
    let mirrored = mean_radiance(&down, &scene, &config, 20_000, 3);
    assert!(mirrored.x > 0.0);

    // Same ceiling point seen directly
    let up = Ray::new(DVec3::new(30.0, 5.0, 0.0), DVec3::Y);
    let direct = mean_radiance(&up, &scene, &config, 20_000, 4);
    assert!(((mirrored.x - direct.x) / direct.x).abs() < 0.1, "{mirrored:?} vs {direct:?}");
}

#[test]
fn test_total_internal_reflection_matches_mirror() {
    // Inside a glass ball every grazing ray is totally reflected, so the
    // glass behaves like a mirror of the same albedo
    let light = Sphere::new(DVec3::new(0.0, 100.0, 0.0), 1.0, Material::emissive(Color::ONE));
    let config = RenderConfig::default();

    let ball = |reflectance| -> Scene {
        let material = Material::new(Color::splat(0.3), Color::splat(0.5), reflectance);
        Scene::new(vec![Sphere::new(DVec3::ZERO, 10.0, material).into()], light).unwrap()
    };
    let glass = ball(Reflectance::Refractive);
    let mirror = ball(Reflectance::Specular);

    // Chord close to the surface, about 82 degrees from the normal
    let origin = DVec3::new(0.0, 9.9, 0.0);
    let ray = Ray::new(origin, DVec3::new(1.0, 0.01, 0.0).normalize());

    let mut rng_glass = StdRng::seed_from_u64(4);
    let mut rng_mirror = StdRng::seed_from_u64(4);
    let a = radiance(&ray, &glass, 0, true, &config, &mut rng_glass);
    let b = radiance(&ray, &mirror, 0, true, &config, &mut rng_mirror);
    assert_eq!(a, b);
}

#[test]
fn test_glass_roulette_matches_split() {
    // Glass ball over a lit floor. Entering at depth 3 picks one sub-path
    // by roulette, entering at depth 0 traces both
    let mut primitives = plane(0.0, 100.0, Material::diffuse(Color::splat(0.5)));
    primitives.push(Sphere::new(DVec3::new(0.0, 10.0, 0.0), 5.0, Material::refractive(Color::ONE)).into());
    let light = Sphere::new(DVec3::new(0.0, 30.0, 0.0), 2.0, Material::emissive(Color::splat(50.0)));
    let scene = Scene::new(primitives, light).unwrap();
    let config = RenderConfig {
        max_bounces: 50,
        ..RenderConfig::default()
    };

    let ray = Ray::new(DVec3::new(2.0, 25.0, 0.0), -DVec3::Y);
    let samples = 50_000;

    let mut rng = StdRng::seed_from_u64(6);
    let mut split = Color::ZERO;
    for _ in 0..samples {
        split += radiance(&ray, &scene, 0, true, &config, &mut rng);
    }
    let split = split / samples as f64;

    let mut rng = StdRng::seed_from_u64(7);
    let mut roulette = Color::ZERO;
    for _ in 0..samples {
        roulette += radiance(&ray, &scene, 3, true, &config, &mut rng);
    }
    let roulette = roulette / samples as f64;

    assert!(split.x > 0.0);
    assert!(((roulette.x - split.x) / split.x).abs() < 0.03, "roulette {roulette:?} vs split {split:?}");
}
