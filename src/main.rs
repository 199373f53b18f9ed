use anyhow::{Context, Result};
use clap::Parser;
use feather_icon_name::{collect_icon_names, emit, OUTPUT_FILE_NAME};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "feather-icon-name")]
#[command(about = "Generate a TypeScript IconName union from SVG icon files")]
struct Cli {
    /// Directory containing SVG files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Output declaration file
    #[arg(short, long, default_value = OUTPUT_FILE_NAME)]
    output: PathBuf,

    /// Sort icon names instead of keeping directory listing order
    #[arg(short, long)]
    sort: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    generate_declaration(&cli.dir, &cli.output, cli.sort)
}

fn generate_declaration(dir: &Path, output: &Path, sort: bool) -> Result<()> {
    let mut names = collect_icon_names(dir)
        .with_context(|| format!("Failed to collect icon names in {}", dir.display()))?;

    if sort {
        names.sort();
    }

    emit(&names, output)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    log::info!("Wrote {} icon names to {}", names.len(), output.display());

    Ok(())
}
