use thiserror::Error;

use crate::rect::Rect;

#[derive(Debug, Error)]
pub enum CutError {
    #[error("mapping supplies {chars} characters but {glyphs} glyphs were detected")]
    MappingCountMismatch { chars: usize, glyphs: usize },
    #[error("mapping line {line}: value {value:?} is not a single character")]
    InvalidMapping { line: usize, value: String },
    #[error("cannot build an atlas from zero glyphs")]
    EmptyAtlas,
    #[error("atlas for {glyphs} glyphs with spacing {spacing} exceeds the maximum image size")]
    AtlasTooLarge { glyphs: usize, spacing: u32 },
    #[error("malformed rect: {0:?}")]
    InvalidRect(String),
    #[error("frame {name}: rect {rect} lies outside the {sheet_width}x{sheet_height} sheet")]
    FrameOutOfBounds {
        name: String,
        rect: Rect,
        sheet_width: u32,
        sheet_height: u32,
    },
    #[error("frame {0}: rect has zero area")]
    EmptyFrame(String),
    #[error("duplicate frame name: {0}")]
    DuplicateFrame(String),
    #[error("frame {name}: {reason}")]
    InvalidFrameName { name: String, reason: String },
    #[error("manifest error: {0}")]
    Manifest(String),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CutError>;
