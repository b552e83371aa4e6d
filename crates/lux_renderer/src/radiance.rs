//! Recursive Monte Carlo radiance estimator.
//!
//! Each call traces one bounce:
//! - diffuse surfaces add explicitly sampled direct light and recurse along
//!   a cosine-weighted direction with emission disabled
//! - mirrors recurse along the reflected direction with emission enabled
//! - glass splits into reflected and transmitted sub-paths weighted by
//!   Schlick's Fresnel term for the first bounces, and picks one of them by
//!   Russian roulette afterwards
//!
//! Past `max_bounces`, or on black surfaces, paths survive with probability
//! equal to the max albedo channel and are rescaled to stay unbiased.

use std::f64::consts::FRAC_1_PI;

use crate::sampling::{cosine_hemisphere, gen_f64, sample_sphere_light};
use crate::RenderConfig;
use lux_core::{Reflectance, Scene};
use lux_math::{Color, DVec3, Ray};
use rand::RngCore;

/// Radiance of rays that leave the scene.
pub const BACKGROUND: Color = Color::ZERO;

/// Index of refraction outside dielectrics.
const IOR_AIR: f64 = 1.0;
/// Index of refraction inside dielectrics.
const IOR_GLASS: f64 = 1.5;

/// Glass evaluates both sub-paths while depth is below this.
const SPLIT_DEPTH: u32 = 3;

/// Estimate the radiance arriving along `ray`.
///
/// `depth` is the number of bounces already taken. `include_emission`
/// is false after diffuse bounces, whose light was already counted by
/// explicit sampling.
pub fn radiance(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    include_emission: bool,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let depth = depth + 1;

    let Some(hit) = scene.intersect(ray) else {
        return BACKGROUND;
    };

    let material = hit.material();
    let point = ray.at(hit.t);
    let normal = hit.primitive.normal_at(point);

    // Shading normal faces the incoming ray
    let nl = if normal.dot(ray.direction) > 0.0 {
        -normal
    } else {
        normal
    };

    let emission = if include_emission {
        material.emission
    } else {
        Color::ZERO
    };

    let mut albedo = material.albedo;
    if depth > config.max_bounces || albedo.max_element() == 0.0 {
        match russian_roulette(albedo, rng) {
            Some(scaled) => albedo = scaled,
            None => return emission,
        }
    }

    match material.reflectance {
        Reflectance::Diffuse => {
            let bounce = Ray::new(point, cosine_hemisphere(nl, rng));
            let direct = direct_light(point, nl, albedo, scene, rng);

            emission + direct + albedo * radiance(&bounce, scene, depth, false, config, rng)
        }
        Reflectance::Specular => {
            let reflected = Ray::new(point, reflect(ray.direction, normal));

            material.emission + albedo * radiance(&reflected, scene, depth, true, config, rng)
        }
        Reflectance::Refractive => {
            let reflected = Ray::new(point, reflect(ray.direction, normal));

            let (direction, re) = match refract(ray.direction, normal, nl) {
                Refraction::TotalInternalReflection => {
                    return material.emission
                        + albedo * radiance(&reflected, scene, depth, true, config, rng);
                }
                Refraction::Transmitted {
                    direction,
                    reflectance,
                } => (direction, reflectance),
            };
            let tr = 1.0 - re;
            let transmitted = Ray::new(point, direction);

            if depth < SPLIT_DEPTH {
                let r = radiance(&reflected, scene, depth, true, config, rng);
                let t = radiance(&transmitted, scene, depth, true, config, rng);
                return material.emission + albedo * (r * re + t * tr);
            }

            let p = 0.25 + 0.5 * re;
            if gen_f64(rng) < p {
                let r = radiance(&reflected, scene, depth, true, config, rng);
                material.emission + albedo * r * (re / p)
            } else {
                let t = radiance(&transmitted, scene, depth, true, config, rng);
                material.emission + albedo * t * (tr / (1.0 - p))
            }
        }
    }
}

/// Survive with probability max(albedo) and return the compensated albedo.
fn russian_roulette(albedo: Color, rng: &mut dyn RngCore) -> Option<Color> {
    let p = albedo.max_element();
    (gen_f64(rng) < p).then(|| albedo / p)
}

/// Light reaching a diffuse point directly from the light sphere.
fn direct_light(
    point: DVec3,
    nl: DVec3,
    albedo: Color,
    scene: &Scene,
    rng: &mut dyn RngCore,
) -> Color {
    let light = scene.light();
    let Some(sample) = sample_sphere_light(point, light, rng) else {
        return Color::ZERO;
    };

    let cos_theta = sample.direction.dot(nl);
    if cos_theta <= 0.0 || !scene.hits_light(&Ray::new(point, sample.direction)) {
        return Color::ZERO;
    }

    // Lambertian BRDF is albedo / pi
    albedo * (light.material.emission * cos_theta * sample.solid_angle) * FRAC_1_PI
}

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect(direction: DVec3, normal: DVec3) -> DVec3 {
    direction - normal * 2.0 * normal.dot(direction)
}

/// Outcome of a ray meeting an air/glass boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// No transmitted ray exists
    TotalInternalReflection,
    /// Transmitted direction and Schlick reflectance Re (Tr = 1 - Re)
    Transmitted { direction: DVec3, reflectance: f64 },
}

/// Refract `direction` through a surface with outward `normal`, where `nl`
/// is the normal flipped to face the incoming ray.
pub fn refract(direction: DVec3, normal: DVec3, nl: DVec3) -> Refraction {
    let into = normal.dot(nl) > 0.0;
    let nnt = if into {
        IOR_AIR / IOR_GLASS
    } else {
        IOR_GLASS / IOR_AIR
    };

    let ddn = direction.dot(nl);
    let cos2t = 1.0 - nnt * nnt * (1.0 - ddn * ddn);
    if cos2t <= 0.0 {
        return Refraction::TotalInternalReflection;
    }

    let side = if into { 1.0 } else { -1.0 };
    let tdir = (direction * nnt - normal * (side * (ddn * nnt + cos2t.sqrt()))).normalize();

    let a = IOR_GLASS - IOR_AIR;
    let b = IOR_GLASS + IOR_AIR;
    let r0 = a * a / (b * b);

    // Cosine on the air side of the boundary
    let c = if into { 1.0 + ddn } else { 1.0 - tdir.dot(normal) };
    let reflectance = r0 + (1.0 - r0) * c.powi(5);

    Refraction::Transmitted {
        direction: tdir,
        reflectance,
    }
}
