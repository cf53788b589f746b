//! Single-pass filter, projection and magnitude sort.
//!
//! Each [`RawRecord`] goes through the same steps:
//!
//! 1. `RA`, `Dec` and `Distance` must parse, otherwise the run fails
//! 2. `Mag` and `ColorIndex` must parse, otherwise the row is skipped
//! 3. rows fainter than the magnitude limit are skipped
//! 4. survivors are projected onto the unit sphere
//!
//! The collected stars are then stable-sorted by magnitude, brightest first.

use crate::constants::VISIBILITY_MAG_LIMIT;
use crate::error::Result;
use crate::record::RawRecord;
use crate::star::VisibleStar;
use std::fmt;
use tracing::{debug, info};

/// Counters for one pipeline pass.
///
/// `scanned == missing_photometry + too_faint + visible` after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub scanned: u64,
    pub missing_photometry: u64,
    pub too_faint: u64,
    pub visible: u64,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned {}, no photometry {}, too faint {}, visible {}",
            self.scanned, self.missing_photometry, self.too_faint, self.visible
        )
    }
}

/// Magnitude-ordered result of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarField {
    stars: Vec<VisibleStar>,
    stats: PipelineStats,
}

impl StarField {
    pub fn stars(&self) -> &[VisibleStar] {
        &self.stars
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

enum Outcome {
    Visible(VisibleStar),
    MissingPhotometry,
    TooFaint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPipeline {
    mag_limit: f64,
}

impl Default for StarPipeline {
    fn default() -> Self {
        Self::new(VISIBILITY_MAG_LIMIT)
    }
}

impl StarPipeline {
    pub fn new(mag_limit: f64) -> Self {
        Self { mag_limit }
    }

    pub fn mag_limit(&self) -> f64 {
        self.mag_limit
    }

    /// Run one record through validation, filtering and projection.
    ///
    /// Returns `Ok(None)` for rows that are skipped, and an error only when a
    /// positional field is malformed.
    pub fn process_record(&self, record: &RawRecord) -> Result<Option<VisibleStar>> {
        Ok(match self.classify(record)? {
            Outcome::Visible(star) => Some(star),
            Outcome::MissingPhotometry | Outcome::TooFaint => None,
        })
    }

    fn classify(&self, record: &RawRecord) -> Result<Outcome> {
        let ra = record.ra_hours()?;
        let dec = record.dec_degrees()?;
        record.distance()?;
        let Some((mag, color)) = record.photometry() else {
            return Ok(Outcome::MissingPhotometry);
        };
        if mag.is_nan() || mag > self.mag_limit {
            return Ok(Outcome::TooFaint);
        }
        Ok(Outcome::Visible(VisibleStar::from_equatorial(ra, dec, mag, color)))
    }

    /// Consume a record stream and build the sorted star field.
    ///
    /// The first error, whether from the source or a malformed positional
    /// field, aborts the pass and nothing is returned.
    pub fn run<I>(&self, records: I) -> Result<StarField>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        let mut stars = Vec::new();
        let mut stats = PipelineStats::default();
        for record in records {
            let record = record?;
            stats.scanned += 1;
            match self.classify(&record)? {
                Outcome::Visible(star) => {
                    stats.visible += 1;
                    stars.push(star);
                }
                Outcome::MissingPhotometry => stats.missing_photometry += 1,
                Outcome::TooFaint => stats.too_faint += 1,
            }
        }
        sort_by_magnitude(&mut stars);
        debug!(mag_limit = self.mag_limit, "{}", stats);
        info!("Kept {} of {} catalog rows", stats.visible, stats.scanned);
        Ok(StarField { stars, stats })
    }
}

/// Stable sort, brightest (numerically smallest) first.
pub fn sort_by_magnitude(stars: &mut [VisibleStar]) {
    stars.sort_by(|a, b| a.mag.total_cmp(&b.mag));
}
