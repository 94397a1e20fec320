//! BMFont text descriptor (`.fnt`) generation.
//!
//! The output is the AngelCode text format restricted to what a single page,
//! single row atlas needs:
//!
//! ```text
//! info face="custom" size=18 bold=0 italic=0 charset="" unicode=0 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1
//! common lineHeight=18 base=0 scaleW=0 scaleH=0 pages=1 packed=0
//! page id=0 file="font.png"
//! chars count=1
//! char id=65 x=0 y=0 width=9 height=18 xoffset=0 yoffset=0 xadvance=9 page=0 chnl=0
//! ```
use std::fmt;

use crate::{
    error::{CutError, Result},
    mapping::CharAssignment,
    rect::PlacementRect,
};

/// One `char` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGlyph {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub xoffset: i32,
    pub yoffset: i32,
    pub xadvance: u32,
    pub page: u32,
    pub channel: u32,
}

impl CharGlyph {
    fn placed(id: u32, rect: &PlacementRect) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            xoffset: 0,
            yoffset: 0,
            xadvance: rect.width,
            page: 0,
            channel: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDescriptor {
    pub line_height: u32,
    pub page_file: String,
    pub chars: Vec<CharGlyph>,
}

impl FontDescriptor {
    /// Pairs every placement with its assigned character.
    ///
    /// Fails with [`CutError::MappingCountMismatch`] if the assignment does not
    /// cover exactly the placed glyphs.
    pub fn new(
        placements: &[PlacementRect],
        chars: &CharAssignment,
        line_height: u32,
        page_file: impl Into<String>,
    ) -> Result<Self> {
        if chars.len() != placements.len() {
            return Err(CutError::MappingCountMismatch {
                chars: chars.len(),
                glyphs: placements.len(),
            });
        }
        let chars = chars
            .codepoints()
            .zip(placements)
            .map(|(id, rect)| CharGlyph::placed(id, rect))
            .collect();
        Ok(Self {
            line_height,
            page_file: page_file.into(),
            chars,
        })
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lh = self.line_height;
        writeln!(
            f,
            "info face=\"custom\" size={lh} bold=0 italic=0 charset=\"\" unicode=0 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1"
        )?;
        writeln!(
            f,
            "common lineHeight={lh} base=0 scaleW=0 scaleH=0 pages=1 packed=0"
        )?;
        writeln!(f, "page id=0 file=\"{}\"", self.page_file)?;
        writeln!(f, "chars count={}", self.chars.len())?;
        for c in &self.chars {
            writeln!(
                f,
                "char id={} x={} y={} width={} height={} xoffset={} yoffset={} xadvance={} page={} chnl={}",
                c.id, c.x, c.y, c.width, c.height, c.xoffset, c.yoffset, c.xadvance, c.page, c.channel
            )?;
        }
        Ok(())
    }
}
