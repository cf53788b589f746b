//! Fixed values of the star field extraction.

use std::f64::consts::PI;

/// Faintest apparent magnitude visible to the unaided eye under dark skies.
pub const VISIBILITY_MAG_LIMIT: f64 = 6.5;

/// HYG v1.1 full catalog, gzipped CSV.
pub const HYG_URL: &str = "http://www.astronexus.com/files/downloads/hygfull.csv.gz";

/// File name of the cached archive inside the cache directory.
pub const HYG_ARCHIVE_NAME: &str = "hyg-stars-v1.1.csv.gz";

pub const DEFAULT_OUTPUT: &str = "stars.json";

pub const HOURS_PER_DAY: f64 = 24.0;

/// Radians per hour of right ascension (2π / 24).
pub const HOUR_TO_RAD: f64 = 2.0 * PI / HOURS_PER_DAY;

pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Column names of the HYG CSV header.
pub mod columns {
    pub const RA: &str = "RA";
    pub const DEC: &str = "Dec";
    pub const DISTANCE: &str = "Distance";
    pub const MAG: &str = "Mag";
    pub const COLOR_INDEX: &str = "ColorIndex";
}
