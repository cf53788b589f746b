//! JSON rendering of the star field.

use crate::error::Result;
use crate::star::VisibleStar;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `stars` as a single JSON array of `{x, y, z, mag, color}` objects.
pub fn write_json<W: Write>(stars: &[VisibleStar], mut writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, stars)?;
    } else {
        serde_json::to_writer(&mut writer, stars)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json_file(stars: &[VisibleStar], path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    write_json(stars, writer, pretty)?;
    info!("Written {} stars to {:?}", stars.len(), path);
    Ok(())
}
