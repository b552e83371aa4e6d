use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lux_core::{cornell, SceneGeometry};
use lux_renderer::{render, Camera, RenderConfig};

/// Render the Cornell box with a Monte Carlo path tracer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON render configuration, defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image, `.ppm` is written as text PPM, other extensions by format
    #[arg(long, short, default_value = "result.ppm")]
    output: PathBuf,

    /// Cornell box representation
    #[arg(long, value_enum)]
    geometry: Option<Geometry>,

    /// Samples at each of the 2x2 subpixels
    #[arg(long, short)]
    samples: Option<u32>,

    /// Worker threads, all cores when omitted
    #[arg(long, short)]
    threads: Option<usize>,

    /// Seed for the per-row random generators
    #[arg(long)]
    seed: Option<u64>,

    /// Render only the walls and the light
    #[arg(long, default_value_t = false)]
    empty_box: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Geometry {
    Spheres,
    Triangles,
}

impl From<Geometry> for SceneGeometry {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Spheres => SceneGeometry::Spheres,
            Geometry::Triangles => SceneGeometry::Triangles,
        }
    }
}

fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(geometry) = args.geometry {
        config.geometry = geometry.into();
    }
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.empty_box {
        config.interior = false;
    }

    config.validate().context("Invalid render configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::debug!("{:?}", config);

    let scene = cornell::scene(config.geometry, config.interior).context("Failed to build scene")?;
    let camera = Camera::from_config(&config);

    let image = render(&scene, &camera, &config)?;
    image
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
