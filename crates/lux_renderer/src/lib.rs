//! Lux Renderer - CPU path tracing
//!
//! A unidirectional Monte Carlo path tracer for the Cornell box:
//! diffuse bounces with explicit sampling of a spherical light, perfect
//! mirrors, Fresnel-blended glass, Russian roulette termination and a
//! thin-lens camera. Rows of the image are rendered in parallel.

mod camera;
mod config;
mod image_buffer;
mod radiance;
mod renderer;
pub mod sampling;

pub use camera::Camera;
pub use config::{ConfigError, RenderConfig};
pub use image_buffer::{to_display, Image, ImageError};
pub use radiance::{radiance, reflect, refract, Refraction, BACKGROUND};
pub use renderer::{render, render_pixel, row_rng, RenderError};

/// Re-export the scene and math types the renderer is driven with
pub use lux_core::{cornell, Material, Primitive, Reflectance, Scene, SceneGeometry, Sphere, Triangle};
pub use lux_math::{Color, DVec3, Ray};
