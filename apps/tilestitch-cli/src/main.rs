use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tilestitch_persist::{DEFAULT_INPUT, DEFAULT_OUTPUT, WorldFile};
use tilestitch_tools::WorldInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tilestitch",
    about = "Pad room tile grids and link the edges of neighboring rooms"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// World document to read
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the stitched document
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print a summary of the stitched world and any exits that miss their target
    #[arg(long)]
    summary: bool,
}

/// `RUST_LOG` when set, otherwise `debug` or `info` depending on `--verbose`.
fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .init();

    let file = WorldFile::new(cli.input, cli.output);
    let mut world = file
        .load()
        .with_context(|| format!("failed to load {}", file.input().display()))?;

    world.stitch();

    file.save(&world)
        .with_context(|| format!("failed to write {}", file.output().display()))?;

    if cli.summary {
        println!("{}", WorldInspector::summary(&world));
        let dangling = WorldInspector::dangling_exits(&world);
        if !dangling.is_empty() {
            println!("{} exit(s) do not land on a tile:", dangling.len());
            for exit in &dangling {
                println!("  {exit}");
            }
        }
    }

    println!(
        "{} written with full edge connections and tile padding.",
        file.output().display()
    );
    Ok(())
}
