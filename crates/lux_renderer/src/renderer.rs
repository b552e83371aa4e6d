//! Image-level driver: subpixel sampling and parallel row rendering.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use crate::{radiance, Camera, ConfigError, Image, RenderConfig};
use lux_core::Scene;
use lux_math::Color;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur before rendering starts.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Camera resolution {width}x{height} has a zero dimension")]
    EmptyImage { width: u32, height: u32 },

    #[error(
        "Camera resolution {camera:?} does not match the configured resolution {config:?}"
    )]
    ResolutionMismatch { camera: (u32, u32), config: (u32, u32) },

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Random generator for camera row `y`.
///
/// Every row owns its own stream, so the image does not depend on how rows
/// are scheduled across threads.
pub fn row_rng(seed: u64, y: u32) -> StdRng {
    let y = u64::from(y);
    StdRng::seed_from_u64(seed ^ y.wrapping_mul(y).wrapping_mul(y))
}

/// Render a single pixel as a 2x2 grid of subpixels.
///
/// Each subpixel averages `samples_per_pixel` radiance samples and is
/// clamped to [0, 1] before the four are averaged.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let inv_samples = 1.0 / config.samples_per_pixel as f64;
    let mut pixel_color = Color::ZERO;

    for sy in 0..2 {
        for sx in 0..2 {
            let mut subpixel = Color::ZERO;
            for _ in 0..config.samples_per_pixel {
                let ray = camera.get_ray(x, y, sx, sy, rng);
                subpixel += radiance(&ray, scene, 0, true, config, rng) * inv_samples;
            }
            pixel_color += subpixel.clamp(Color::ZERO, Color::ONE) * 0.25;
        }
    }

    pixel_color
}

/// Render the entire scene, one rayon task per image row.
///
/// With `config.threads` set the rows run on a dedicated pool of that
/// size, otherwise on the global rayon pool. The camera must have the
/// configured, non-zero resolution.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Result<Image, RenderError> {
    config.validate()?;

    let width = camera.image_width;
    let height = camera.image_height;
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }
    if (width, height) != (config.image_width, config.image_height) {
        return Err(RenderError::ResolutionMismatch {
            camera: (width, height),
            config: (config.image_width, config.image_height),
        });
    }
    log::info!(
        "Starts rendering {}x{} with {} spp ({} per subpixel), {} primitives",
        width,
        height,
        config.samples_per_pixel * 4,
        config.samples_per_pixel,
        scene.len()
    );

    let start = Instant::now();
    let mut image = Image::new(width, height);
    let rows_done = AtomicU32::new(0);

    let render_rows = |image: &mut Image| {
        image.par_rows_mut().for_each(|(y, row)| {
            let mut rng = row_rng(config.seed, y);
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, x as u32, y, config, &mut rng);
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            let step = (height / 10).max(1);
            if done % step == 0 || done == height {
                log::info!("Rendering {:5.1}%", 100.0 * done as f64 / height as f64);
            }
        });
    };

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            log::debug!("Rendering on a dedicated pool of {} threads", threads);
            pool.install(|| render_rows(&mut image));
        }
        None => {
            log::debug!("Rendering on the global pool ({} threads)", rayon::current_num_threads());
            render_rows(&mut image);
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(image)
}
