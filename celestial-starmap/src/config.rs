//! Run parameters for one catalog extraction.

use crate::constants::{DEFAULT_OUTPUT, HYG_ARCHIVE_NAME, HYG_URL, VISIBILITY_MAG_LIMIT};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Where the catalog comes from, where the result goes, and how faint a star
/// may be and still count as visible.
///
/// `Default` reproduces the stock behavior: HYG v1.1 downloaded next to the
/// executable, magnitude limit 6.5, compact `stars.json` in the working
/// directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StarmapConfig {
    pub source_url: String,
    /// Directory holding the cached archive.
    pub cache_dir: PathBuf,
    pub archive_name: String,
    pub output_path: PathBuf,
    /// Stars with a magnitude above this are dropped. Inclusive.
    pub mag_limit: f64,
    pub pretty: bool,
}

impl Default for StarmapConfig {
    fn default() -> Self {
        Self {
            source_url: HYG_URL.to_string(),
            cache_dir: default_cache_dir(),
            archive_name: HYG_ARCHIVE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            mag_limit: VISIBILITY_MAG_LIMIT,
            pretty: false,
        }
    }
}

impl StarmapConfig {
    pub fn archive_path(&self) -> PathBuf {
        self.cache_dir.join(&self.archive_name)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mag_limit.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "magnitude limit must be finite, got {}",
                self.mag_limit
            )));
        }
        if self.source_url.trim().is_empty() {
            return Err(Error::InvalidConfig("source URL is empty".to_string()));
        }
        if self.archive_name.trim().is_empty() {
            return Err(Error::InvalidConfig("archive name is empty".to_string()));
        }
        Ok(())
    }
}

/// Directory of the running executable, falling back to the working directory.
pub fn default_cache_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StarmapConfig::default();
        assert_eq!(config.mag_limit, 6.5);
        assert_eq!(config.source_url, HYG_URL);
        assert_eq!(config.output_path, PathBuf::from("stars.json"));
        assert!(!config.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_archive_path_joins_cache_dir() {
        let config = StarmapConfig {
            cache_dir: PathBuf::from("/var/cache/starmap"),
            ..Default::default()
        };
        assert_eq!(
            config.archive_path(),
            PathBuf::from("/var/cache/starmap/hyg-stars-v1.1.csv.gz")
        );
    }

    #[test]
    fn test_rejects_non_finite_limit() {
        let config = StarmapConfig {
            mag_limit: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = StarmapConfig {
            mag_limit: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_url() {
        let config = StarmapConfig {
            source_url: "  ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source URL"));
    }

    #[test]
    fn test_negative_limit_is_allowed() {
        let config = StarmapConfig {
            mag_limit: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
