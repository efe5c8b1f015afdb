use clap::Parser;
use cli::args::PaletteArgs;
use cli::palette::generate_palette;

mod cli;
mod core;

fn main() {
    let args: PaletteArgs = PaletteArgs::parse();

    if let Err(err) = generate_palette(&args) {
        eprintln!("ERROR:  {}", err);
        std::process::exit(1);
    }
}
