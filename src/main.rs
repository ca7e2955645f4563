//! ShadeGen - Tonal palette generator
//!
//! Derives a scale of tonal shades from a base color and exports it in
//! stylesheet and design-token formats (Tailwind, CSS custom properties,
//! Sass variables, JSON).

use clap::{Parser, Subcommand};

use shadegen::cli::{ConfigArgs, ExportArgs, GenerateArgs, PaletteArgs};
use shadegen::constants::APP_BINARY_NAME;

/// ShadeGen - Tonal palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the shade scale for a base color
    Generate(GenerateArgs),
    /// Export a shade scale in a stylesheet format
    Export(ExportArgs),
    /// Manage and export the configured palette roles
    Palette(PaletteArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Palette(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
