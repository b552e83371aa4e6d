//! Render configuration.
//!
//! All options have defaults, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "samplesPerPixel": 200, "imageWidth": 512, "imageHeight": 384, "geometry": "spheres" }
//! ```

use std::path::Path;

use lux_core::SceneGeometry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("samplesPerPixel must be at least 1")]
    ZeroSamples,

    #[error("aperture must be non-negative, got {0}")]
    NegativeAperture(f64),

    #[error("focalDepth must be positive, got {0}")]
    InvalidFocalDepth(f64),

    #[error("threads must be at least 1 when set")]
    ZeroThreads,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderConfig {
    /// Samples traced at each of the 2x2 subpixels
    pub samples_per_pixel: u32,
    /// Bounces before Russian roulette starts
    pub max_bounces: u32,
    pub image_width: u32,
    pub image_height: u32,
    /// Lens radius, zero disables depth of field
    pub aperture: f64,
    /// Distance from the lens to the plane in focus
    pub focal_depth: f64,
    /// Cornell box representation
    pub geometry: SceneGeometry,
    /// Include the objects inside the box
    pub interior: bool,
    /// Mixed into every per-row generator seed
    pub seed: u64,
    /// Worker threads, `None` uses the rayon global pool
    pub threads: Option<usize>,
    /// Area-uniform lens sampling (sqrt radius) instead of linear radius
    pub uniform_lens_sampling: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 50,
            max_bounces: 5,
            image_width: 1024,
            image_height: 768,
            aperture: 2.0,
            focal_depth: 65.0,
            geometry: SceneGeometry::Triangles,
            interior: true,
            seed: 0,
            threads: None,
            uniform_lens_sampling: false,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.aperture.is_nan() || self.aperture < 0.0 {
            return Err(ConfigError::NegativeAperture(self.aperture));
        }
        if self.focal_depth.is_nan() || self.focal_depth <= 0.0 {
            return Err(ConfigError::InvalidFocalDepth(self.focal_depth));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}
