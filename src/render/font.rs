//! Built-in 5x7 bitmap font covering the characters of a hex color label

use crate::core::Color;
use crate::render::canvas::Canvas;

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins, one column of spacing
const ADVANCE: u32 = GLYPH_WIDTH + 1;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0x00; 7];
const UNKNOWN: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Rows top to bottom, bit 4 is the leftmost column
fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
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
        'A' => [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        ' ' => BLANK,
        _ => UNKNOWN,
    }
}

/// Pixel size of `text` drawn at `scale` canvas pixels per font pixel
pub(crate) fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    let width = if chars == 0 {
        0
    } else {
        (chars * ADVANCE - 1) * scale
    };
    (width, GLYPH_HEIGHT * scale)
}

/// Draw `text` so its bounding box ends at (`right`, `bottom`), exclusive
pub(crate) fn draw_text_bottom_right(
    canvas: &mut Canvas,
    text: &str,
    right: u32,
    bottom: u32,
    scale: u32,
    color: Color,
) {
    let (width, height) = text_size(text, scale);
    let left = right.saturating_sub(width);
    let top = bottom.saturating_sub(height);

    for (i, c) in text.chars().enumerate() {
        let origin_x = left + i as u32 * ADVANCE * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) != 0 {
                    canvas.fill_rect(
                        origin_x + col * scale,
                        top + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_accounts_for_spacing() {
        assert_eq!(text_size("", 2), (0, 14));
        assert_eq!(text_size("#", 1), (5, 7));
        assert_eq!(text_size("#1A2B3C", 2), (82, 14));
    }

    #[test]
    fn every_hex_glyph_is_defined() {
        for c in "#0123456789ABCDEFabcdef".chars() {
            assert_ne!(glyph(c), UNKNOWN, "{c}");
            assert_ne!(glyph(c), BLANK, "{c}");
        }
        assert_eq!(glyph('?'), UNKNOWN);
    }

    #[test]
    fn drawn_text_stays_inside_bounding_box() {
        let mut canvas = Canvas::new(60, 20, Color::WHITE);
        draw_text_bottom_right(&mut canvas, "#FF", 50, 18, 2, Color::BLACK);
        let (w, h) = text_size("#FF", 2);
        let mut inked = 0;
        for y in 0..20 {
            for x in 0..60 {
                let inside = x >= 50 - w && x < 50 && y >= 18 - h && y < 18;
                if canvas.pixel(x, y) == Some(Color::BLACK) {
                    assert!(inside, "ink outside box at ({x}, {y})");
                    inked += 1;
                }
            }
        }
        assert!(inked > 0);
    }
}
