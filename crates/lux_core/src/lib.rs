//! Lux Core - scene description for the Lux path tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Triangle` and the tagged `Primitive` variant
//! - **Materials**: a shared `Material` record with a `Reflectance` kind
//! - **Scene**: an immutable primitive list plus one spherical light source
//! - **Presets**: the Cornell box in sphere and triangle form
//! - **GPU export**: fixed-layout sphere records for compute kernels
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{cornell, SceneGeometry};
//!
//! let scene = cornell::scene(SceneGeometry::Triangles, true)?;
//! println!("{} primitives", scene.len());
//! ```

pub mod cornell;
pub mod gpu;
mod material;
mod primitive;
mod scene;
mod sphere;
mod triangle;

pub use material::{Material, Reflectance};
pub use primitive::{Hit, Primitive};
pub use scene::{Scene, SceneError, SceneGeometry, SceneResult};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Minimum hit distance; keeps secondary rays from re-hitting their origin.
pub const HIT_EPSILON: f64 = 1e-4;
