// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Linear RGB radiance. Unbounded until the final display clamp.
pub type Color = DVec3;
