//! Immutable scene: primitives plus one spherical light source.
//!
//! The light is kept apart from the primitive list. Camera and bounce rays
//! never see it directly; it is reached only by the explicit light sampling
//! on diffuse surfaces through [`Scene::hits_light`].

use crate::{Hit, Primitive, Sphere, HIT_EPSILON};
use lux_math::{Color, Interval, Ray};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while assembling a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Light source has no positive emission: {emission:?}")]
    InvalidLight { emission: Color },

    #[error("Light source radius must be positive, got {radius}")]
    InvalidLightRadius { radius: f64 },

    #[error("Triangle at index {index} is degenerate")]
    DegenerateTriangle { index: usize },

    #[error("Scene has no primitives")]
    EmptyScene,
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Which representation of the Cornell box to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneGeometry {
    /// Walls are huge spheres
    Spheres,
    /// Walls are triangle pairs
    #[default]
    Triangles,
}

/// A static collection of primitives and the light used for explicit sampling.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    light: Sphere,
}

impl Scene {
    /// Build a scene, failing fast on an unusable light or degenerate geometry.
    pub fn new(primitives: Vec<Primitive>, light: Sphere) -> SceneResult<Self> {
        if primitives.is_empty() {
            return Err(SceneError::EmptyScene);
        }
        if !light.material.is_emissive() {
            return Err(SceneError::InvalidLight {
                emission: light.material.emission,
            });
        }
        if light.radius <= 0.0 {
            return Err(SceneError::InvalidLightRadius {
                radius: light.radius,
            });
        }
        if let Some(index) = primitives.iter().position(|p| match p {
            Primitive::Triangle(tri) => tri.is_degenerate(),
            Primitive::Sphere(_) => false,
        }) {
            return Err(SceneError::DegenerateTriangle { index });
        }

        log::debug!(
            "Scene built with {} primitives, light at {:?} (r = {})",
            primitives.len(),
            light.center,
            light.radius
        );

        Ok(Self { primitives, light })
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn light(&self) -> &Sphere {
        &self.light
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest primitive hit ahead of the ray by a linear scan.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        let mut ray_t = Interval::new(HIT_EPSILON, f64::INFINITY);

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(t) = primitive.intersect(ray, ray_t) {
                ray_t = ray_t.with_max(t);
                closest = Some(Hit {
                    t,
                    index,
                    primitive,
                });
            }
        }

        closest
    }

    /// Shadow-ray visibility against the light only. Other primitives are
    /// not tested as occluders.
    pub fn hits_light(&self, ray: &Ray) -> bool {
        self.light
            .intersect(ray, Interval::new(HIT_EPSILON, f64::INFINITY))
            .is_some()
    }
}
