//! Surface material record shared by every primitive.

use lux_math::Color;
use serde::{Deserialize, Serialize};

/// How a surface scatters light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reflectance {
    /// Lambertian bounce with explicit light sampling
    #[default]
    Diffuse,
    /// Perfect mirror
    Specular,
    /// Glass-like dielectric with Fresnel blending
    Refractive,
}

/// Material properties of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Emitted radiance (zero for everything but lights)
    pub emission: Color,
    /// Per-channel reflectivity; components above 1 bias Russian roulette
    pub albedo: Color,
    /// Scattering behaviour
    pub reflectance: Reflectance,
}

impl Material {
    pub fn new(emission: Color, albedo: Color, reflectance: Reflectance) -> Self {
        Self {
            emission,
            albedo,
            reflectance,
        }
    }

    /// Non-emissive Lambertian surface.
    pub fn diffuse(albedo: Color) -> Self {
        Self::new(Color::ZERO, albedo, Reflectance::Diffuse)
    }

    /// Non-emissive mirror.
    pub fn specular(albedo: Color) -> Self {
        Self::new(Color::ZERO, albedo, Reflectance::Specular)
    }

    /// Non-emissive dielectric.
    pub fn refractive(albedo: Color) -> Self {
        Self::new(Color::ZERO, albedo, Reflectance::Refractive)
    }

    /// Pure emitter with a black diffuse surface.
    pub fn emissive(emission: Color) -> Self {
        Self::new(emission, Color::ZERO, Reflectance::Diffuse)
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission.max_element() > 0.0
    }
}
