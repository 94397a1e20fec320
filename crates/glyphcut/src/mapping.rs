//! Per-glyph character assignment.
use crate::error::{CutError, Result};

/// Codepoint written for glyphs without an assigned character.
pub const UNSET_CODEPOINT: u32 = 32;

/// One optional character per detected glyph, in glyph order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharAssignment {
    chars: Vec<Option<char>>,
}

impl CharAssignment {
    /// Assigns the characters of `order` to glyphs left to right.
    pub fn from_order(order: &str, glyph_count: usize) -> Result<Self> {
        Self::checked(order.chars().map(Some).collect(), glyph_count)
    }

    /// Parses a `key=value` mapping file.
    ///
    /// Only lines containing `=` count as slots, keys are ignored and the
    /// slot order is the line order. An empty value leaves the slot unset.
    pub fn from_mapping(text: &str, glyph_count: usize) -> Result<Self> {
        let mut chars = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let Some((_, value)) = line.trim().split_once('=') else {
                continue;
            };
            let mut it = value.chars();
            match (it.next(), it.next()) {
                (None, _) => chars.push(None),
                (Some(ch), None) => chars.push(Some(ch)),
                _ => {
                    return Err(CutError::InvalidMapping {
                        line: idx + 1,
                        value: value.to_string(),
                    })
                }
            }
        }
        Self::checked(chars, glyph_count)
    }

    fn checked(chars: Vec<Option<char>>, glyph_count: usize) -> Result<Self> {
        if chars.len() != glyph_count {
            return Err(CutError::MappingCountMismatch {
                chars: chars.len(),
                glyphs: glyph_count,
            });
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied().flatten()
    }

    /// Codepoints in glyph order, unset slots become [`UNSET_CODEPOINT`].
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.chars
            .iter()
            .copied()
            .map(|c| c.map_or(UNSET_CODEPOINT, u32::from))
    }
}

/// Blank mapping file with one `char_<i>=` line per glyph.
pub fn template(glyph_count: usize) -> String {
    let mut out = String::new();
    for idx in 0..glyph_count {
        out.push_str(&format!("char_{idx}=\n"));
    }
    out
}
