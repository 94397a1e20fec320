//! Axis-aligned integer rectangles shared by the atlas and sprite pipelines.
use std::{fmt, str::FromStr};

use crate::error::CutError;

/// Rectangle given by its top-left corner and size.
///
/// Used both for placements inside a packed atlas and for frame source
/// rects inside a sprite sheet. The textual form is the one found in
/// cocos2d style plists: `{{x,y},{w,h}}`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A glyph's position and size inside the atlas.
pub type PlacementRect = Rect;

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, widened so huge rects cannot wrap.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if the rect lies completely inside a `width` x `height` area.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= u64::from(width) && self.bottom() <= u64::from(height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{{{},{}}},{{{},{}}}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for Rect {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CutError::InvalidRect(s.to_string());
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let inner = compact
            .strip_prefix("{{")
            .and_then(|r| r.strip_suffix("}}"))
            .ok_or_else(invalid)?;
        let (origin, size) = inner.split_once("},{").ok_or_else(invalid)?;
        let (x, y) = parse_pair(origin).ok_or_else(invalid)?;
        let (width, height) = parse_pair(size).ok_or_else(invalid)?;
        Ok(Rect::new(x, y, width, height))
    }
}

fn parse_pair(s: &str) -> Option<(u32, u32)> {
    let (a, b) = s.split_once(',')?;
    if !is_digits(a) || !is_digits(b) {
        return None;
    }
    Some((a.parse().ok()?, b.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plist_rect() {
        let r: Rect = "{{1560,430},{219,219}}".parse().unwrap();
        assert_eq!(r, Rect::new(1560, 430, 219, 219));
    }

    #[test]
    fn tolerates_whitespace() {
        let r: Rect = " {{ 10, 20 }, { 30, 40 }} ".parse().unwrap();
        assert_eq!(r, Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn rejects_malformed() {
        let cases = [
            "",
            "{10,20,30,40}",
            "{{10,20},{30}}",
            "{{-1,0},{2,2}}",
            "{{a,b},{c,d}}",
            "{{1,2},{3,4}}x",
        ];
        for bad in cases {
            assert!(
                matches!(bad.parse::<Rect>(), Err(CutError::InvalidRect(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_matches_plist_form() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "{{1,2},{3,4}}");
    }

    #[test]
    fn bounds_check_is_inclusive_of_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert!(r.fits_within(40, 60));
        assert!(!r.fits_within(39, 60));
        assert!(!r.fits_within(40, 59));
        assert!(!Rect::new(u32::MAX, 0, 2, 1).fits_within(u32::MAX, 1));
    }
}
