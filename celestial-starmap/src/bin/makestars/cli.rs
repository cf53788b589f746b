//! CLI argument definitions for makestars

use celestial_starmap::constants::{
    DEFAULT_OUTPUT, HYG_ARCHIVE_NAME, HYG_URL, VISIBILITY_MAG_LIMIT,
};
use celestial_starmap::StarmapConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "makestars")]
#[command(about = "Extract naked-eye stars from the HYG catalog as unit-sphere JSON")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Read this local catalog (.csv or .csv.gz) instead of the cached download
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Directory for the downloaded archive [default: executable directory]
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Catalog archive URL
    #[arg(long, default_value = HYG_URL)]
    pub url: String,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Magnitude limit (keep stars at least this bright)
    #[arg(long, default_value_t = VISIBILITY_MAG_LIMIT, allow_negative_numbers = true)]
    pub mag_limit: f64,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn to_config(&self) -> StarmapConfig {
        let defaults = StarmapConfig::default();
        StarmapConfig {
            source_url: self.url.clone(),
            cache_dir: self.cache_dir.clone().unwrap_or(defaults.cache_dir),
            archive_name: HYG_ARCHIVE_NAME.to_string(),
            output_path: self.output.clone(),
            mag_limit: self.mag_limit,
            pretty: self.pretty,
        }
    }
}
