//! Test support utilities for glyphcut.
//!
//! Builders for synthetic glyph strips and sprite sheets plus an in-memory
//! frame sink. Not part of the stable API.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::{sprite::FrameSink, Result};

pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Transparent `width` x `height` strip with solid ink blocks.
///
/// Each run is `(x, width)` and covers the full height.
pub fn strip_with_runs(width: u32, height: u32, runs: &[(u32, u32)]) -> DynamicImage {
    let mut img = RgbaImage::new(width, height);
    for &(x0, w) in runs {
        for x in x0..x0 + w {
            for y in 0..height {
                img.put_pixel(x, y, INK);
            }
        }
    }
    DynamicImage::ImageRgba8(img)
}

/// Sheet where every pixel encodes its own coordinates, so any crop or
/// rotation mistake shows up as a pixel mismatch.
pub fn coordinate_sheet(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x & 0xFF) as u8, (y & 0xFF) as u8, ((x >> 8) ^ (y >> 4)) as u8, 255])
    })
}

/// Collects extracted frames in memory.
#[derive(Default)]
pub struct MemoryFrameSink {
    pub frames: Vec<(String, RgbaImage)>,
}

impl MemoryFrameSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for MemoryFrameSink {
    fn write_frame(&mut self, name: &str, image: RgbaImage) -> Result<()> {
        self.frames.push((name.to_string(), image));
        Ok(())
    }
}
