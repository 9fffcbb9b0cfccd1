//! Seven-segment digit layout
//!
//! Score text is drawn with the same instanced quads as everything else, so
//! each character becomes a handful of rectangles.

use glam::Vec2;

// Segment bits: a top, b upper right, c lower right, d bottom,
// e lower left, f upper left, g middle
const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,     // 0
    B | C,                     // 1
    A | B | D | E | G,         // 2
    A | B | C | D | G,         // 3
    B | C | F | G,             // 4
    A | C | D | F | G,         // 5
    A | C | D | E | F | G,     // 6
    A | B | C,                 // 7
    A | B | C | D | E | F | G, // 8
    A | B | C | D | F | G,     // 9
];

/// Glyph box proportions relative to the font size
const GLYPH_HEIGHT: f32 = 0.7;
const GLYPH_ASPECT: f32 = 0.55;
const STROKE: f32 = 0.14;
const ADVANCE: f32 = 1.4;

/// An axis-aligned rectangle, top-left corner and size
pub type GlyphRect = (Vec2, Vec2);

fn segments(mask: u8, origin: Vec2, w: f32, h: f32, t: f32) -> impl Iterator<Item = GlyphRect> {
    let half = h / 2.0;
    let layout = [
        (A, Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        (B, Vec2::new(w - t, 0.0), Vec2::new(t, half)),
        (C, Vec2::new(w - t, half), Vec2::new(t, half)),
        (D, Vec2::new(0.0, h - t), Vec2::new(w, t)),
        (E, Vec2::new(0.0, half), Vec2::new(t, half)),
        (F, Vec2::new(0.0, 0.0), Vec2::new(t, half)),
        (G, Vec2::new(0.0, half - t / 2.0), Vec2::new(w, t)),
    ];
    layout
        .into_iter()
        .filter(move |(bit, _, _)| mask & bit != 0)
        .map(move |(_, offset, size)| (origin + offset, size))
}

/// Lay out `text` with its baseline's left end at `pos`.
///
/// Digits become segment rectangles; any other character only advances the
/// pen.
pub fn layout_text(text: &str, pos: Vec2, size: f32) -> Vec<GlyphRect> {
    let h = size * GLYPH_HEIGHT;
    let w = h * GLYPH_ASPECT;
    let t = h * STROKE;

    let mut rects = Vec::new();
    let mut pen = Vec2::new(pos.x, pos.y - h);
    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            rects.extend(segments(DIGITS[digit as usize], pen, w, h, t));
        }
        pen.x += w * ADVANCE;
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts() {
        let expected = [6, 2, 5, 5, 4, 5, 6, 3, 7, 6];
        for (digit, count) in expected.iter().enumerate() {
            let rects = layout_text(&digit.to_string(), Vec2::ZERO, 45.0);
            assert_eq!(rects.len(), *count, "digit {}", digit);
        }
    }

    #[test]
    fn test_glyph_sits_on_baseline() {
        let rects = layout_text("8", Vec2::new(200.0, 50.0), 45.0);
        let top = rects.iter().map(|(p, _)| p.y).fold(f32::MAX, f32::min);
        let bottom = rects.iter().map(|(p, s)| p.y + s.y).fold(f32::MIN, f32::max);
        let left = rects.iter().map(|(p, _)| p.x).fold(f32::MAX, f32::min);

        assert!((bottom - 50.0).abs() < 1e-4);
        assert!((top - (50.0 - 45.0 * GLYPH_HEIGHT)).abs() < 1e-4);
        assert_eq!(left, 200.0);
    }

    #[test]
    fn test_multiple_digits_advance() {
        let rects = layout_text("11", Vec2::ZERO, 45.0);
        assert_eq!(rects.len(), 4);
        let xs: Vec<f32> = rects.iter().map(|(p, _)| p.x).collect();
        assert!(xs[2] > xs[0]);
    }

    #[test]
    fn test_non_digits_draw_nothing() {
        assert!(layout_text(" -", Vec2::ZERO, 45.0).is_empty());
    }
}
