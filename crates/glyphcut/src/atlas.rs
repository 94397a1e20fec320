//! Single row atlas packing.
use image::{imageops, RgbaImage};

use crate::{
    error::{CutError, Result},
    rect::PlacementRect,
};

pub const DEFAULT_SPACING: u32 = 1;

/// Packed atlas image together with the placement of every input glyph.
pub struct Atlas {
    pub image: RgbaImage,
    pub placements: Vec<PlacementRect>,
}

impl Atlas {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Line height for the font descriptor, the tallest glyph.
    pub fn line_height(&self) -> u32 {
        self.image.height()
    }
}

/// Pastes `glyphs` side by side onto a transparent canvas, `spacing` pixels
/// apart, all top aligned.
///
/// The atlas is `sum(widths) + spacing * (n - 1)` wide and as tall as the
/// tallest glyph. Placement order follows input order.
pub fn pack_horizontal(glyphs: &[RgbaImage], spacing: u32) -> Result<Atlas> {
    let height = glyphs
        .iter()
        .map(|g| g.height())
        .max()
        .ok_or(CutError::EmptyAtlas)?;
    let width = atlas_width(glyphs, spacing)
        .filter(|&w| fits_in_memory(w, height))
        .ok_or(CutError::AtlasTooLarge {
            glyphs: glyphs.len(),
            spacing,
        })?;

    let mut image = RgbaImage::new(width, height);
    let mut placements = Vec::with_capacity(glyphs.len());
    let mut x = 0;
    for glyph in glyphs {
        imageops::replace(&mut image, glyph, i64::from(x), 0);
        placements.push(PlacementRect::new(x, 0, glyph.width(), glyph.height()));
        // only the advance past the last glyph can leave the atlas
        x = x.saturating_add(glyph.width()).saturating_add(spacing);
    }
    log::debug!(
        "packed {} glyphs into {}x{} atlas",
        glyphs.len(),
        width,
        height
    );
    Ok(Atlas { image, placements })
}

fn atlas_width(glyphs: &[RgbaImage], spacing: u32) -> Option<u32> {
    let gaps = u32::try_from(glyphs.len() - 1).ok()?.checked_mul(spacing)?;
    glyphs
        .iter()
        .try_fold(gaps, |acc, g| acc.checked_add(g.width()))
}

fn fits_in_memory(width: u32, height: u32) -> bool {
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|px| px.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}
