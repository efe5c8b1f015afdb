use crate::core::error::PaletteError;
use crate::core::render::render_palette;

use super::args::PaletteArgs;

/**
 * Renders the palette described by the parsed command line arguments and
 * reports the output file on success. All process-exit decisions stay with
 * the caller.
 */
pub fn generate_palette(args: &PaletteArgs) -> Result<(), PaletteError> {
    render_palette(&args.font, &args.colors, &args.output)?;
    println!("INFO:  Wrote image file to: {}", args.output.display());
    Ok(())
}
