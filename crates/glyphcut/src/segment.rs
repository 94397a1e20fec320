//! Column based glyph segmentation for single row glyph strips.
//!
//! Every column is classified as ink or blank, consecutive ink columns form a
//! span and each span at least `min_width` columns wide becomes one
//! full-height [`GlyphBox`]. Multi-row strips are not detected and end up
//! merged into the same boxes.
use image::{imageops, DynamicImage, RgbaImage};

use crate::rect::Rect;

pub const DEFAULT_MIN_WIDTH: u32 = 2;
pub const DEFAULT_GLYPH_MARGIN: u32 = 2;

/// Full-height box around one detected glyph, `x1`/`y1` exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl GlyphBox {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.width(), self.height())
    }
}

/// Returns one flag per column, `true` if the column holds any ink.
///
/// Images with an alpha channel count a pixel as ink when its alpha is above
/// zero. Opaque images count every pixel that is not pure white. Both tests
/// run on 16 bit samples so deep images keep faint ink.
pub fn ink_columns(image: &DynamicImage) -> Vec<bool> {
    let mut ink = vec![false; image.width() as usize];
    if image.color().has_alpha() {
        let rgba = image.to_rgba16();
        for (x, _, px) in rgba.enumerate_pixels() {
            if px[3] > 0 {
                ink[x as usize] = true;
            }
        }
    } else {
        let rgb = image.to_rgb16();
        for (x, _, px) in rgb.enumerate_pixels() {
            if px.0.iter().any(|&c| c != u16::MAX) {
                ink[x as usize] = true;
            }
        }
    }
    ink
}

/// Splits `image` into glyph boxes, ordered left to right.
///
/// Ink runs narrower than `min_width` are dropped. A blank image yields no
/// boxes.
pub fn segment(image: &DynamicImage, min_width: u32) -> Vec<GlyphBox> {
    let height = image.height();
    let ink = ink_columns(image);
    let mut boxes = Vec::new();
    let mut start = None;
    for (x, &is_ink) in ink.iter().enumerate() {
        match (start, is_ink) {
            (None, true) => start = Some(x as u32),
            (Some(s), false) => {
                push_span(&mut boxes, s, x as u32, height, min_width);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_span(&mut boxes, s, image.width(), height, min_width);
    }
    log::debug!("segmented {} glyphs", boxes.len());
    boxes
}

fn push_span(boxes: &mut Vec<GlyphBox>, start: u32, end: u32, height: u32, min_width: u32) {
    if end - start < min_width {
        log::debug!("dropping {}px ink run at x={start}", end - start);
        return;
    }
    boxes.push(GlyphBox {
        x0: start,
        y0: 0,
        x1: end,
        y1: height,
    });
}

/// Crops every box out of `image`, widened by `margin` columns on each side.
///
/// The widened range is clamped to the image, so glyphs at the strip edges
/// get a narrower margin on the outer side.
pub fn crop_glyphs(image: &DynamicImage, boxes: &[GlyphBox], margin: u32) -> Vec<RgbaImage> {
    let rgba = image.to_rgba8();
    let width = rgba.width();
    boxes
        .iter()
        .map(|b| {
            let x0 = b.x0.saturating_sub(margin);
            let x1 = b.x1.saturating_add(margin).min(width);
            imageops::crop_imm(&rgba, x0, b.y0, x1 - x0, b.height()).to_image()
        })
        .collect()
}
