//! makestars: naked-eye star field builder
//!
//! Fetches the HYG catalog once (cached next to the executable), keeps stars
//! with magnitude <= 6.5, projects them onto the unit sphere and writes them
//! to `stars.json`, brightest first.

mod cli;

use anyhow::Context;
use celestial_starmap::source::HttpFetcher;
use celestial_starmap::{output, ArchiveCache, CatalogReader, StarPipeline, StarmapConfig};
use clap::Parser;
use cli::Cli;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.to_config();
    config.validate()?;
    let archive = resolve_archive(&cli, &config)?;
    run(&archive, &config, &mut std::io::stdout().lock())?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_archive(cli: &Cli, config: &StarmapConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.archive {
        return Ok(path.clone());
    }
    let cache = ArchiveCache::from_config(config);
    let fetcher = HttpFetcher::new()?;
    let path = cache
        .ensure(&fetcher)
        .with_context(|| format!("Failed to retrieve catalog from {}", cache.url()))?;
    Ok(path.to_path_buf())
}

/// Process `archive` and write the JSON document, reporting the star count
/// on `status`. Nothing is written to the output path if processing fails.
fn run<W: Write>(
    archive: &Path,
    config: &StarmapConfig,
    status: &mut W,
) -> anyhow::Result<usize> {
    let reader = CatalogReader::open(archive)
        .with_context(|| format!("Failed to open catalog {:?}", archive))?;
    let pipeline = StarPipeline::new(config.mag_limit);
    info!("Magnitude limit: {:.2}", pipeline.mag_limit());
    let field = pipeline
        .run(reader)
        .with_context(|| format!("Failed to process catalog {:?}", archive))?;
    writeln!(status, "found {} visible stars", field.len())?;
    output::write_json_file(field.stars(), &config.output_path, config.pretty)
        .with_context(|| format!("Failed to write {:?}", config.output_path))?;
    Ok(field.len())
}
