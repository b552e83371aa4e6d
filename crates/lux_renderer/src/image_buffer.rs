//! Linear radiance image and its 8-bit encodings.
//!
//! Pixel coordinates count rows from the bottom of the image, the way the
//! camera does. Storage is top row first so it can be written out as-is.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lux_math::{Color, Interval};
use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Gamma used for display encoding.
const DISPLAY_GAMMA: f64 = 2.2;

/// Map a linear channel value to a display byte.
///
/// Clamps to [0, 1], applies gamma 1/2.2 and rounds to nearest.
#[inline]
pub fn to_display(x: f64) -> u8 {
    let x = Interval::UNIT.clamp(x);
    (x.powf(1.0 / DISPLAY_GAMMA) * 255.0 + 0.5) as u8
}

/// Image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (self.height - y - 1) as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y), with y = 0 the bottom row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), with y = 0 the bottom row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Accumulate into the pixel at (x, y).
    pub fn add(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] += color;
    }

    /// Pixels in storage order, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows in parallel, each paired with its camera row index.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = (u32, &mut [Color])> {
        let height = self.height;
        self.pixels
            .par_chunks_mut(self.width as usize)
            .enumerate()
            .map(move |(row, pixels)| (height - 1 - row as u32, pixels))
    }

    /// Convert to display RGB bytes, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&[to_display(color.x), to_display(color.y), to_display(color.z)]);
        }
        bytes
    }

    /// Write a plain-text PPM (P3), one pixel per line.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> Result<(), ImageError> {
        write!(out, "P3\n{} {}\n255\n", self.width, self.height)?;
        for rgb in self.to_rgb8().chunks_exact(3) {
            writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
        out.flush()?;
        Ok(())
    }

    /// Save to `path`. `.ppm` writes text PPM, anything else goes through
    /// the `image` crate and its extension-based format detection.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let file = File::create(path)?;
            self.write_ppm(BufWriter::new(file))?;
        } else {
            image::save_buffer(
                path,
                &self.to_rgb8(),
                self.width,
                self.height,
                image::ColorType::Rgb8,
            )?;
        }

        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
