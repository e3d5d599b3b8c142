use crate::core::Color;

/// Packed 8-bit RGB pixel buffer, row major
pub(crate) struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32, background: Color) -> Self {
        let pixels = background
            .rgb()
            .repeat(width as usize * height as usize);
        Canvas {
            width,
            height,
            pixels,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Color::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas
    pub(crate) fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        let rgb = color.rgb();
        for row in y.min(y_end)..y_end {
            let start = self.offset(x.min(x_end), row);
            let end = self.offset(x_end, row);
            for px in self.pixels[start..end].chunks_exact_mut(3) {
                px.copy_from_slice(&rgb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(4, 3, Color::WHITE);
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 3);
        assert!(canvas.as_bytes().iter().all(|&b| b == 255));
    }

    #[test]
    fn fill_rect_covers_exact_region() {
        let red = Color::new(255, 0, 0);
        let mut canvas = Canvas::new(5, 5, Color::WHITE);
        canvas.fill_rect(1, 2, 2, 2, red);
        assert_eq!(canvas.pixel(1, 2), Some(red));
        assert_eq!(canvas.pixel(2, 3), Some(red));
        assert_eq!(canvas.pixel(0, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(1, 4), Some(Color::WHITE));
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut canvas = Canvas::new(3, 3, Color::WHITE);
        canvas.fill_rect(2, 2, 10, 10, Color::BLACK);
        canvas.fill_rect(7, 7, 1, 1, Color::BLACK);
        assert_eq!(canvas.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 3), None);
    }
}
