use glyphcut::{sprite::SkippedFrame, GlyphBox};

/// Table of detected glyph boxes, one line per glyph.
pub fn glyph_table(boxes: &[GlyphBox]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} glyphs\n", boxes.len()));
    for (idx, b) in boxes.iter().enumerate() {
        out.push_str(&format!(
            "  char_{idx:<4} x={:<5} width={:<4} height={}\n",
            b.x0,
            b.width(),
            b.height()
        ));
    }
    out
}

/// One line per skipped frame.
pub fn skipped_frames(skipped: &[SkippedFrame]) -> String {
    let mut out = String::new();
    for (li, s) in skipped.iter().enumerate() {
        if li > 0 {
            out.push('\n');
        }
        out.push_str(&format!("skipped {}: {}", s.name, s.error));
    }
    out
}
