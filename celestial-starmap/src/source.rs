//! Catalog source: download-once archive cache and gzipped CSV reader.
//!
//! The pipeline only sees an iterator of [`RawRecord`]s. Everything about
//! where those rows come from lives here:
//!
//! - [`ArchiveCache`] keeps one local copy of the remote archive and only
//!   calls its [`ArchiveFetcher`] when that copy is missing
//! - [`CatalogReader`] decompresses (when gzipped) and splits CSV rows,
//!   mapping the HYG header columns onto [`RawRecord`] fields

use crate::config::StarmapConfig;
use crate::constants::columns;
use crate::error::{Error, Result};
use crate::record::RawRecord;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Retrieves a remote archive into a local file.
pub trait ArchiveFetcher {
    /// Write the bytes found at `url` to `dest`, returning the number written.
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

impl<F> ArchiveFetcher for F
where
    F: Fn(&str, &Path) -> Result<u64>,
{
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        self(url, dest)
    }
}

/// Blocking HTTP fetcher.
#[cfg(feature = "cli")]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "cli")]
impl HttpFetcher {
    pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

    pub fn new() -> Result<Self> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "cli")]
impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::download(url, e))?;
        if !response.status().is_success() {
            return Err(Error::download(url, format!("HTTP {}", response.status())));
        }
        let mut file = File::create(dest)?;
        let written = response
            .copy_to(&mut file)
            .map_err(|e| Error::download(url, e))?;
        file.sync_all()?;
        Ok(written)
    }
}

/// Local copy of a remote archive, fetched on first use.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveCache {
    path: PathBuf,
    url: String,
}

impl ArchiveCache {
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &StarmapConfig) -> Self {
        Self::new(config.archive_path(), config.source_url.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// A zero-length file counts as missing.
    pub fn is_cached(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.is_file() && m.len() > 0)
            .unwrap_or(false)
    }

    /// Return the local archive path, downloading it first if needed.
    ///
    /// The fetcher writes to a `.tmp` sibling which is renamed into place
    /// only after a successful fetch. On any failure the `.tmp` file is
    /// removed.
    pub fn ensure<F: ArchiveFetcher + ?Sized>(&self, fetcher: &F) -> Result<&Path> {
        if self.is_cached() {
            debug!("Using cached archive {:?}", self.path);
            return Ok(&self.path);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = partial_path(&self.path);
        info!("Archive not found at {:?}, downloading {}", self.path, self.url);
        match fetcher.fetch(&self.url, &tmp_path) {
            Ok(bytes) => {
                if let Err(e) = fs::rename(&tmp_path, &self.path) {
                    let _ = fs::remove_file(&tmp_path);
                    return Err(e.into());
                }
                info!(
                    "Downloaded {:.1} MB to {:?}",
                    bytes as f64 / 1_048_576.0,
                    self.path
                );
                Ok(&self.path)
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp_path);
                Err(e)
            }
        }
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "gz")
}

struct ColumnIndices {
    ra: usize,
    dec: usize,
    distance: usize,
    mag: usize,
    color_index: usize,
}

impl ColumnIndices {
    fn from_header(header: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| header.iter().position(|col| col.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| Error::MissingColumn(name.to_string()));
        Ok(Self {
            ra: require(columns::RA)?,
            dec: require(columns::DEC)?,
            distance: require(columns::DISTANCE)?,
            mag: require(columns::MAG)?,
            color_index: require(columns::COLOR_INDEX)?,
        })
    }
}

/// Streams [`RawRecord`]s out of a CSV catalog with a header row.
///
/// The header must name `RA`, `Dec`, `Distance`, `Mag` and `ColorIndex`;
/// any other layout fails with [`Error::MissingColumn`]. Blank values within
/// a row are passed through as empty text.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
    indices: ColumnIndices,
    buf: csv::StringRecord,
    row: u64,
}

impl CatalogReader<Box<dyn Read>> {
    /// Open a catalog file, decompressing it when the name ends in `.gz`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        let inner: Box<dyn Read> = if is_gzipped(path) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };
        debug!("Opened catalog {:?}", path);
        Self::from_reader(inner)
    }
}

impl CatalogReader<GzDecoder<BufReader<File>>> {
    pub fn from_gz_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(GzDecoder::new(BufReader::new(file)))
    }
}

impl<R: Read> CatalogReader<R> {
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let indices = ColumnIndices::from_header(reader.headers()?)?;
        Ok(Self {
            reader,
            indices,
            buf: csv::StringRecord::new(),
            row: 0,
        })
    }

    fn build_record(&self) -> RawRecord {
        let field = |idx: usize| self.buf.get(idx).map(str::to_string);
        RawRecord {
            row: self.row,
            ra: field(self.indices.ra),
            dec: field(self.indices.dec),
            distance: field(self.indices.distance),
            mag: field(self.indices.mag),
            color_index: field(self.indices.color_index),
        }
    }
}

impl<R: Read> Iterator for CatalogReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.buf) {
            Ok(false) => None,
            Ok(true) => {
                self.row += 1;
                Some(Ok(self.build_record()))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
