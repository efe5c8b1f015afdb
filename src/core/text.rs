use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};
use image::{Rgba, RgbaImage};

use crate::core::color::TextColor;

/// Line height multiplier handed to the shaper; the raster is sized from
/// the measured layout, so this only sets the leading around the glyphs.
const LINE_HEIGHT_SCALE: f32 = 1.2;

/**
 * CPU-side single-line text rasterizer. Owns the font database and glyph
 * cache for the duration of one render pass. Fonts are discovered from the
 * system by family name, with the font system's usual substitution rules
 * when the requested family is missing.
 */
pub struct TextRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRasterizer {
    pub fn new() -> TextRasterizer {
        TextRasterizer {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /**
     * Shapes `text` as one unwrapped line of the given family and size and
     * rasterizes it onto a transparent image in the requested color, with
     * per-pixel alpha taken from the rasterizer's antialiasing coverage.
     * The raster is sized to the measured line extents; it is never empty,
     * even when no font on the system can supply the glyphs.
     */
    pub fn rasterize_line(
        &mut self,
        family: &str,
        font_size: f32,
        text: &str,
        color: TextColor,
    ) -> RgbaImage {
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_SCALE);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        // Unbounded buffer: the line must not wrap, it is measured below
        // and the raster is cut to fit it.
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            text,
            Attrs::new().family(Family::Name(family)),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let (line_width, line_height) = measure_line(&buffer);
        let width = (line_width.ceil() as u32).max(1);
        let height = (line_height.ceil() as u32).max(1);

        let mut raster = RgbaImage::new(width, height);
        let Rgba([r, g, b, _]) = color.rgb().to_rgba();
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(r, g, b),
            |x, y, w, h, coverage| {
                blend_rect(&mut raster, x, y, w, h, coverage);
            },
        );
        raster
    }
}

/// Measured extents of the laid-out text: (widest run, summed line height).
fn measure_line(buffer: &Buffer) -> (f32, f32) {
    let line_height = buffer.metrics().line_height;
    let mut width = 0.0f32;
    let mut lines = 0usize;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        lines += 1;
    }
    (width, line_height * lines.max(1) as f32)
}

/// Composites one coverage rectangle from the glyph rasterizer onto the
/// raster. The color's alpha channel carries the antialiasing coverage.
fn blend_rect(raster: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Color) {
    let (r, g, b, a) = (color.r(), color.g(), color.b(), color.a());
    if a == 0 {
        return;
    }
    for dy in 0..h {
        for dx in 0..w {
            let column = x + dx as i32;
            let row = y + dy as i32;
            if column < 0 || row < 0 {
                continue;
            }
            let (column, row) = (column as u32, row as u32);
            if column >= raster.width() || row >= raster.height() {
                continue;
            }
            let pixel = raster.get_pixel_mut(column, row);
            // Rectangles only overlap at antialiased glyph fringes; keeping
            // the stronger coverage is enough.
            if a > pixel.0[3] {
                *pixel = Rgba([r, g, b, a]);
            }
        }
    }
}
