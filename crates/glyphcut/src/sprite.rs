//! Sprite sheet frame extraction.
use image::{imageops, RgbaImage};

use crate::{
    error::{CutError, Result},
    rect::Rect,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Source rect inside the sheet, in stored (possibly rotated) orientation.
    pub rect: Rect,
    pub rotated: bool,
}

/// Frames of one sheet, kept in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameManifest {
    frames: Vec<(String, Frame)>,
}

impl FrameManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, frame: Frame) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CutError::DuplicateFrame(name));
        }
        self.frames.push((name, frame));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Frame)> {
        self.frames.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Direction a rotated frame is turned on extraction.
///
/// Packers that store frames rotated turn them clockwise, so the default
/// turns them back counter-clockwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RotationDirection {
    #[default]
    CounterClockwise,
    Clockwise,
}

/// Crops one frame out of `sheet` and undoes its rotation.
///
/// A rotated `w` x `h` source rect yields an `h` x `w` image.
pub fn extract_frame(
    sheet: &RgbaImage,
    name: &str,
    frame: &Frame,
    direction: RotationDirection,
) -> Result<RgbaImage> {
    let r = frame.rect;
    if r.is_empty() {
        return Err(CutError::EmptyFrame(name.to_string()));
    }
    if !r.fits_within(sheet.width(), sheet.height()) {
        return Err(CutError::FrameOutOfBounds {
            name: name.to_string(),
            rect: r,
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
        });
    }
    let crop = imageops::crop_imm(sheet, r.x, r.y, r.width, r.height).to_image();
    if !frame.rotated {
        return Ok(crop);
    }
    Ok(match direction {
        RotationDirection::CounterClockwise => imageops::rotate270(&crop),
        RotationDirection::Clockwise => imageops::rotate90(&crop),
    })
}

/// Destination for extracted frames.
///
/// A sink that cannot store a frame under its name returns
/// [`CutError::InvalidFrameName`]; [`unpack_sheet`] skips that frame. Any other
/// error aborts the run.
pub trait FrameSink {
    fn write_frame(&mut self, name: &str, image: RgbaImage) -> Result<()>;
}

/// A frame that could not be extracted.
#[derive(Debug)]
pub struct SkippedFrame {
    pub name: String,
    pub error: CutError,
}

#[derive(Debug, Default)]
pub struct UnpackReport {
    pub written: usize,
    pub skipped: Vec<SkippedFrame>,
}

/// Extracts every frame of `manifest` into `sink`, in manifest order.
///
/// Frames that fail validation or that the sink refuses by name are skipped and
/// recorded in the report, the remaining frames still get extracted. Other
/// sink errors abort the run.
pub fn unpack_sheet<S: FrameSink>(
    sheet: &RgbaImage,
    manifest: &FrameManifest,
    direction: RotationDirection,
    sink: &mut S,
) -> Result<UnpackReport> {
    let mut report = UnpackReport::default();
    for (name, frame) in manifest.iter() {
        let written = extract_frame(sheet, name, frame, direction).and_then(|image| {
            log::debug!("extracted {name} ({}x{})", image.width(), image.height());
            sink.write_frame(name, image)
        });
        match written {
            Ok(()) => report.written += 1,
            Err(
                error @ (CutError::FrameOutOfBounds { .. }
                | CutError::EmptyFrame(_)
                | CutError::InvalidFrameName { .. }),
            ) => {
                log::warn!("skipping frame: {error}");
                report.skipped.push(SkippedFrame {
                    name: name.to_string(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }
    Ok(report)
}
