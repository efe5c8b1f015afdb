use std::path::Path;

use image::{imageops, ImageFormat, Rgba, RgbaImage};

use crate::core::color::HexColor;
use crate::core::error::PaletteError;
use crate::core::layout::{BarLayout, LABEL_FONT_SIZE, MAX_COLORS, MIN_COLORS};
use crate::core::text::TextRasterizer;

/**
 * Renders the palette strip for `colors` and writes it as a PNG to
 * `output_path`, overwriting any existing file there. One equal-width
 * vertical bar per color, in input order, each labeled with its uppercased
 * hex code rotated to read bottom-to-top and centered in the bar, drawn in
 * whichever of black or white contrasts better with the bar.
 *
 * The count bounds are checked here before anything is allocated or drawn,
 * independent of any validation the calling layer performs, so an invalid
 * palette never leaves a partial file behind. Color syntax needs no check:
 * a `HexColor` is valid by construction.
 */
pub fn render_palette(
    font_family: &str,
    colors: &[HexColor],
    output_path: &Path,
) -> Result<(), PaletteError> {
    if !(MIN_COLORS..=MAX_COLORS).contains(&colors.len()) {
        return Err(PaletteError::InvalidCount(colors.len()));
    }

    let layout = BarLayout::new(colors.len());
    let mut canvas = RgbaImage::new(layout.canvas_width(), layout.canvas_height());

    // The bars tile the canvas exactly, so every pixel belongs to one bar.
    let fills: Vec<Rgba<u8>> = colors.iter().map(|color| color.rgb().to_rgba()).collect();
    for (x, _y, pixel) in canvas.enumerate_pixels_mut() {
        *pixel = fills[layout.bar_at(x)];
    }

    let mut rasterizer = TextRasterizer::new();
    for (index, color) in colors.iter().enumerate() {
        let label = rasterizer.rasterize_line(
            font_family,
            LABEL_FONT_SIZE,
            &color.label(),
            color.best_text_color(),
        );
        // A quarter turn counterclockwise makes the label read bottom-to-top.
        let rotated = imageops::rotate270(&label);
        let (x, y) = layout.label_origin(index, rotated.width(), rotated.height());
        imageops::overlay(&mut canvas, &rotated, x, y);
    }

    // Always encode PNG, whatever extension the output path carries.
    canvas.save_with_format(output_path, ImageFormat::Png)?;
    Ok(())
}
