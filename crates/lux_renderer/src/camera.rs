//! Pinhole camera with 2x2 subpixel sampling and a thin-lens perturbation.

use crate::sampling::{lens_disk, tent};
use crate::RenderConfig;
use lux_math::{DVec3, Ray};
use rand::RngCore;

/// Camera for generating primary rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    origin: DVec3,
    direction: DVec3,
    /// Half-extent of the image plane at unit distance, vertically
    field_scale: f64,
    /// Distance primary rays are pushed forward before tracing starts
    start_offset: f64,

    // Lens settings
    aperture: f64,
    focal_depth: f64,
    uniform_lens: bool,

    // Image plane edge vectors (set by update_basis())
    cx: DVec3,
    cy: DVec3,
}

impl Camera {
    /// Camera looking into the Cornell box from outside its front wall.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 1024,
            image_height: 768,
            origin: DVec3::new(50.0, 52.0, 295.6),
            direction: DVec3::new(0.0, -0.042612, -1.0).normalize(),
            field_scale: 0.5135,
            start_offset: 130.0,
            aperture: 2.0,
            focal_depth: 65.0,
            uniform_lens: false,
            cx: DVec3::ZERO,
            cy: DVec3::ZERO,
        };
        camera.update_basis();
        camera
    }

    /// Cornell box camera with resolution and lens taken from `config`.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new()
            .with_resolution(config.image_width, config.image_height)
            .with_lens(config.aperture, config.focal_depth)
            .with_uniform_lens(config.uniform_lens_sampling)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.update_basis();
        self
    }

    /// Set lens settings. An aperture of zero disables depth of field.
    pub fn with_lens(mut self, aperture: f64, focal_depth: f64) -> Self {
        self.aperture = aperture;
        self.focal_depth = focal_depth;
        self
    }

    /// Use area-uniform instead of linear-radius lens sampling.
    pub fn with_uniform_lens(mut self, uniform_lens: bool) -> Self {
        self.uniform_lens = uniform_lens;
        self
    }

    fn update_basis(&mut self) {
        let aspect = self.image_width as f64 / self.image_height.max(1) as f64;
        // Horizontal axis stays level with the world
        self.cx = self.direction.cross(DVec3::Y).normalize() * (aspect * self.field_scale);
        self.cy = self.cx.cross(self.direction).normalize() * self.field_scale;
    }

    /// Tent-jittered ray through subpixel (sx, sy) of pixel (x, y).
    ///
    /// `y` counts rows upward from the bottom of the image. The ray starts
    /// `start_offset` along the unnormalized sample direction, its own
    /// direction is normalized.
    pub fn primary_ray(&self, x: u32, y: u32, sx: u32, sy: u32, rng: &mut dyn RngCore) -> Ray {
        let dx = tent(rng);
        let dy = tent(rng);

        let fx = (x as f64 + (sx as f64 + 0.5 + dx) / 2.0) / self.image_width as f64 - 0.5;
        let fy = (y as f64 + (sy as f64 + 0.5 + dy) / 2.0) / self.image_height as f64 - 0.5;
        let dir = self.cx * fx + self.cy * fy + self.direction;

        Ray::new(self.origin + dir * self.start_offset, dir.normalize())
    }

    /// Depth of field: move the origin on the lens disk and re-aim at the
    /// focal point `focal_depth` along the unperturbed direction.
    ///
    /// The lens disk lies in the world xy plane, not the tilted image plane.
    pub fn thin_lens(&self, ray: &mut Ray, rng: &mut dyn RngCore) {
        let (lx, ly) = lens_disk(rng, self.uniform_lens);
        let offset = DVec3::new(lx, ly, 0.0) * self.aperture;

        ray.origin += offset;
        ray.direction = (ray.direction * self.focal_depth - offset).normalize();
    }

    /// Primary ray with the thin-lens perturbation applied.
    pub fn get_ray(&self, x: u32, y: u32, sx: u32, sy: u32, rng: &mut dyn RngCore) -> Ray {
        let mut ray = self.primary_ray(x, y, sx, sy, rng);
        self.thin_lens(&mut ray, rng);
        ray
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
