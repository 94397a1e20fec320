//! glyphcut: bitmap font atlas builder and sprite sheet unpacker.
//!
//! Font pipeline: [`segment()`] a glyph strip, [`crop_glyphs`], resolve a
//! [`CharAssignment`], [`pack_horizontal`] into an atlas and render a
//! [`FontDescriptor`]. Sprite pipeline: load a [`FrameManifest`] and
//! [`unpack_sheet`] into a [`FrameSink`].

pub mod atlas;
pub mod bmfont;
pub mod discover;
mod error;
#[cfg(feature = "plist")]
mod manifest;
pub mod mapping;
mod rect;
pub mod segment;
pub mod sprite;

pub use atlas::{pack_horizontal, Atlas, DEFAULT_SPACING};
pub use bmfont::{CharGlyph, FontDescriptor};
pub use discover::{discover_sheets, Discovery, SheetPair};
pub use error::{CutError, Result};
pub use mapping::CharAssignment;
pub use rect::{PlacementRect, Rect};
pub use segment::{crop_glyphs, segment, GlyphBox, DEFAULT_GLYPH_MARGIN, DEFAULT_MIN_WIDTH};
pub use sprite::{
    extract_frame, unpack_sheet, Frame, FrameManifest, FrameSink, RotationDirection,
    UnpackReport,
};

// Test utilities
pub mod test_support;
