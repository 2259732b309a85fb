mod containers;
mod error;
mod graphics;
mod plugin;
mod tile_extractor;
mod verify;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tile_extractor::TileExtractor;

#[derive(Parser)]
#[command(name = "dave_scraper", about = "Extracts the tile graphics from a Dangerous Dave (DOS) installation")]
struct Args {
    /// Game installation directory containing DAVE.EXE and EGADAVE.DAV
    game_dir: PathBuf,

    /// Output directory for the extracted tiles
    #[arg(short, long, default_value = "./output/TILES")]
    output: PathBuf,

    /// Skip the installation verification step
    #[arg(long)]
    skip_verify: bool,

    /// Skip the PNG optimisation pass
    #[arg(long)]
    no_optimise: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let info = plugin::info();

    println!("Game Directory: {:?}", &args.game_dir);
    println!("Output Directory: {:?}", &args.output);

    if !args.skip_verify && !verify::verify(&plugin::identifying_files(), &args.game_dir) {
        eprintln!(
            "{} does not look like a supported {} installation",
            args.game_dir.display(),
            info.title
        );
        std::process::exit(1);
    }

    match TileExtractor::new(&args.game_dir) {
        Ok(extractor) => {
            if let Err(e) = extractor.write_images(&args.output, !args.no_optimise) {
                eprintln!("Error extracting tiles: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to open tile archive: {}", e);
            std::process::exit(1);
        }
    }

    println!("Processing complete!");
}
