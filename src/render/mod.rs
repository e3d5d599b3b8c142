//! Swatch rendering
//!
//! A swatch is a 200x200 unit white canvas holding a 160x160 square of the
//! color, labelled with its hex code in the bottom-right border. One unit is
//! 1/100 inch, so at 300 DPI a unit spans 3 pixels. A tenth of an inch of
//! white padding surrounds the canvas in the written PNG.

mod canvas;
mod font;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use crate::consts::DEFAULT_DPI;
use crate::core::Color;
use crate::error::AppError;

pub(crate) use canvas::Canvas;

pub(crate) const CANVAS_UNITS: u32 = 200;
pub(crate) const SQUARE_UNITS: u32 = 160;
pub(crate) const BORDER_UNITS: u32 = (CANVAS_UNITS - SQUARE_UNITS) / 2;
/// Distance of the label's bottom-right corner from the canvas corner
const LABEL_INSET_UNITS: u32 = 2;
/// Units per font pixel; a 7 pixel glyph is 14 units, inside the 20 unit border
const FONT_PIXEL_UNITS: u32 = 2;
const UNITS_PER_INCH: u32 = 100;
const METERS_PER_INCH: f64 = 0.0254;

/// Highest accepted resolution; a 1200 DPI swatch is already 2640 px square
pub(crate) const MAX_DPI: u32 = 1200;

/// Output resolution, held as whole pixels per canvas unit so the pixel size
/// and the `pHYs` tag always describe the same physical size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderOptions {
    scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            scale: DEFAULT_DPI / UNITS_PER_INCH,
        }
    }
}

impl RenderOptions {
    /// Accepts 1..=`MAX_DPI`, rounded to the nearest multiple of 100 (at least 100)
    pub(crate) fn new(dpi: u32) -> Result<Self, AppError> {
        if !(1..=MAX_DPI).contains(&dpi) {
            return Err(AppError::InvalidDpi { dpi, max: MAX_DPI });
        }
        let scale = ((dpi + UNITS_PER_INCH / 2) / UNITS_PER_INCH).max(1);
        let opts = RenderOptions { scale };
        if opts.dpi() != dpi {
            debug!(requested = dpi, effective = opts.dpi(), "rounded image resolution");
        }
        Ok(opts)
    }

    /// Effective resolution written to the PNG
    pub(crate) fn dpi(&self) -> u32 {
        self.scale * UNITS_PER_INCH
    }

    /// Pixels per unit
    pub(crate) fn scale(&self) -> u32 {
        self.scale
    }

    /// Padding around the canvas: 0.1 inch
    pub(crate) fn padding(&self) -> u32 {
        self.dpi() / 10
    }

    /// Side length of the written image in pixels
    pub(crate) fn image_size(&self) -> u32 {
        CANVAS_UNITS * self.scale() + 2 * self.padding()
    }

    fn pixels_per_meter(&self) -> u32 {
        (f64::from(self.dpi()) / METERS_PER_INCH).round() as u32
    }
}

/// Draw the swatch for `color` with `label` in the bottom-right corner
pub(crate) fn render_swatch(color: Color, label: &str, opts: &RenderOptions) -> Canvas {
    let scale = opts.scale();
    let origin = opts.padding();
    let size = opts.image_size();
    let mut canvas = Canvas::new(size, size, Color::WHITE);

    let square_at = origin + BORDER_UNITS * scale;
    let square_side = SQUARE_UNITS * scale;
    canvas.fill_rect(square_at, square_at, square_side, square_side, color);

    let corner = origin + (CANVAS_UNITS - LABEL_INSET_UNITS) * scale;
    font::draw_text_bottom_right(
        &mut canvas,
        label,
        corner,
        corner,
        FONT_PIXEL_UNITS * scale,
        Color::BLACK,
    );
    canvas
}

/// Render the swatch for `hex` and write it as PNG to `path`,
/// creating parent directories as needed.
pub(crate) fn write_swatch(hex: &str, path: &Path, opts: &RenderOptions) -> Result<(), AppError> {
    let color = Color::from_hex(hex)?;
    let canvas = render_swatch(color, &color.to_hex(), opts);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    write_png(&canvas, opts, path)?;
    debug!(path = %path.display(), hex = %color, size = canvas.width(), "wrote swatch");
    Ok(())
}

fn write_png(canvas: &Canvas, opts: &RenderOptions, path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let png_err = |source: png::EncodingError| AppError::Png {
        path: path.to_path_buf(),
        source,
    };

    let mut encoder = png::Encoder::new(BufWriter::new(file), canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = opts.pixels_per_meter();
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header().map_err(png_err)?;
    writer.write_image_data(canvas.as_bytes()).map_err(png_err)?;
    writer.finish().map_err(png_err)
}
