use std::path::PathBuf;

use clap::Parser;

use crate::core::color::HexColor;
use crate::core::layout::{MAX_COLORS, MIN_COLORS};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct PaletteArgs {
    /// Font family name for the bar labels (e.g. "Roboto")
    pub font: String,

    /// Hex color codes, one bar each, in order (e.g. #FF0000)
    #[clap(required = true, num_args = MIN_COLORS..=MAX_COLORS)]
    pub colors: Vec<HexColor>,

    /// Output PNG file name
    #[clap(long, short, default_value = "output.png")]
    pub output: PathBuf,
}
