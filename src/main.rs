//! packer - CLI tool to pack products into standard sized cages.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cage_packer::config::{
    DEFAULT_CAGE_HEIGHT, DEFAULT_CAGE_LENGTH, DEFAULT_CAGE_WIDTH, DEFAULT_PRODUCTS_FILE,
};
use cage_packer::{pack_file, summary_lines, CageDimensions, PackerConfig, PackingReport};

/// Pack products into standard sized cages using first fit decreasing.
#[derive(Parser, Debug)]
#[command(name = "packer")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Path of the products CSV file
    #[arg(long = "file", default_value = DEFAULT_PRODUCTS_FILE)]
    products: PathBuf,

    /// Verbose output of cage packing results
    #[arg(long)]
    verbose: bool,

    /// Output the packing report as JSON
    #[arg(long)]
    json: bool,

    /// Cage width in mm (x axis)
    #[arg(long, default_value_t = DEFAULT_CAGE_WIDTH)]
    cage_width: u32,

    /// Cage height in mm (y axis)
    #[arg(long, default_value_t = DEFAULT_CAGE_HEIGHT)]
    cage_height: u32,

    /// Cage length in mm (z axis)
    #[arg(long, default_value_t = DEFAULT_CAGE_LENGTH)]
    cage_length: u32,

    /// Maximum number of cages to fill
    #[arg(long)]
    max_cages: Option<usize>,
}

impl Args {
    /// Packer configuration from the cage arguments.
    fn packer_config(&self) -> PackerConfig {
        let cage = CageDimensions::new(self.cage_width, self.cage_height, self.cage_length);
        let config = PackerConfig::new(cage);
        match self.max_cages {
            Some(max_cages) => config.with_max_cages(max_cages),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is kept for the JSON report
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = args.packer_config();

    info!("Processing: {}", args.products.display());

    let outcome = pack_file(&args.products, &config)
        .with_context(|| format!("Failed to pack {}", args.products.display()))?;

    // JSON output
    if args.json {
        let report = PackingReport::new(&outcome.cages, config.cage);
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
        return Ok(());
    }

    for line in summary_lines(&outcome.cages, args.verbose) {
        info!("{}", line);
    }

    Ok(())
}
