//! 5x7 bitmap font rasterized into rectangles
//!
//! Uppercase letters, digits, space, ':' and '-'. Lowercase is drawn as
//! uppercase; anything else advances like a space.

use game_core::Aabb;
use glam::Vec2;

const GLYPH_COLS: usize = 5;
/// Columns per character including the gap
const ADVANCE: f32 = 6.0;
/// Size of one font dot at scale 1
const DOT: f32 = 2.0;

/// Rows top to bottom; bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// One rectangle per lit dot, `origin` being the top-left of the first character
pub fn text_rects(origin: Vec2, scale: f32, text: &str) -> Vec<Aabb> {
    let dot = DOT * scale;
    let mut rects = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let left = origin.x + index as f32 * ADVANCE * dot;
        for (row, bits) in rows.iter().enumerate() {
            let top = origin.y - row as f32 * dot;
            for col in 0..GLYPH_COLS {
                if bits & (0x10 >> col) != 0 {
                    let x = left + col as f32 * dot;
                    rects.push(Aabb::new(Vec2::new(x, top - dot), Vec2::new(x + dot, top)));
                }
            }
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_is_one_row() {
        let rects = text_rects(Vec2::new(0.0, 100.0), 1.0, "-");
        assert_eq!(rects.len(), 5);
        assert_eq!(rects[0].min, Vec2::new(0.0, 92.0));
        assert_eq!(rects[0].max, Vec2::new(2.0, 94.0));
        assert_eq!(rects[4].min.x, 8.0);
    }

    #[test]
    fn test_digit_one_dot_count() {
        assert_eq!(text_rects(Vec2::ZERO, 1.0, "1").len(), 10);
    }

    #[test]
    fn test_space_and_unknown_only_advance() {
        assert!(text_rects(Vec2::ZERO, 1.0, " ?").is_empty());

        let a = text_rects(Vec2::ZERO, 1.0, "-");
        let b = text_rects(Vec2::ZERO, 1.0, " -");
        assert_eq!(b[0].min.x - a[0].min.x, ADVANCE * DOT);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(
            text_rects(Vec2::ZERO, 1.0, "ping"),
            text_rects(Vec2::ZERO, 1.0, "PING")
        );
    }

    #[test]
    fn test_scale_multiplies_dot_size() {
        let rects = text_rects(Vec2::new(10.0, 758.0), 2.0, "P");
        let first = rects[0];
        assert_eq!(first.size(), Vec2::new(4.0, 4.0));
        assert_eq!(first.min, Vec2::new(10.0, 754.0));
        // Glyph stays below the origin line
        assert!(rects.iter().all(|r| r.max.y <= 758.0 && r.min.y >= 758.0 - 28.0));
    }

    #[test]
    fn test_every_glyph_fits_five_columns() {
        for c in ('0'..='9').chain('A'..='Z').chain([':', '-']) {
            let rows = glyph(c).unwrap();
            assert!(rows.iter().all(|&r| r < 0x20), "{c} is wider than 5 columns");
        }
    }
}
