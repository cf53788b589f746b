//! Naked-eye star field extraction for sky-sphere visualizations.
//!
//! Reads the HYG star catalog (gzipped CSV), keeps every star bright enough
//! to see without optical aid, projects it onto the unit sphere and emits a
//! JSON array ordered brightest first. Distance is ignored; only direction,
//! magnitude and color index survive.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`source`] | [`ArchiveCache`](source::ArchiveCache) download-once cache, [`CatalogReader`](source::CatalogReader) gzipped CSV reader |
//! | [`pipeline`] | [`StarPipeline`](pipeline::StarPipeline) filter, projection and magnitude sort |
//! | [`star`] | [`VisibleStar`](star::VisibleStar) and [`unit_vector`](star::unit_vector) |
//! | [`output`] | [`write_json`](output::write_json) document writer |
//! | [`config`] | [`StarmapConfig`](config::StarmapConfig) run parameters and defaults |
//!
//! # Quick Start
//!
//! ```no_run
//! use celestial_starmap::{output, CatalogReader, StarPipeline};
//!
//! let reader = CatalogReader::from_gz_path("hyg-stars-v1.1.csv.gz")?;
//! let field = StarPipeline::default().run(reader)?;
//! println!("found {} visible stars", field.len());
//! output::write_json_file(field.stars(), "stars.json", false)?;
//! # Ok::<(), celestial_starmap::Error>(())
//! ```
//!
//! # Error Policy
//!
//! Rows without usable photometry (`Mag` or `ColorIndex` blank or non-numeric)
//! are skipped silently. A malformed `RA`, `Dec` or `Distance` means the
//! catalog itself is corrupt, so the whole run fails with
//! [`Error::InvalidField`].
//!
//! # Features
//!
//! - **`cli`** (default) — Enables the `makestars` binary and the
//!   HTTP-backed [`HttpFetcher`](source::HttpFetcher).

pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod source;
pub mod star;

pub use config::StarmapConfig;
pub use error::{Error, Result};
pub use pipeline::{PipelineStats, StarField, StarPipeline};
pub use record::RawRecord;
pub use source::{ArchiveCache, ArchiveFetcher, CatalogReader};
pub use star::VisibleStar;
