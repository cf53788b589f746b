//! Raw catalog rows as text fields.

use crate::constants::columns;
use crate::error::{Error, Result};

/// One catalog row, before any numeric parsing.
///
/// Every field is the untrimmed text from the source, or `None` when no
/// value was supplied. `row` is the 1-based data row number (header excluded),
/// used only for error reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub row: u64,
    pub ra: Option<String>,
    pub dec: Option<String>,
    pub distance: Option<String>,
    pub mag: Option<String>,
    pub color_index: Option<String>,
}

impl RawRecord {
    /// Build a record from `(column, value)` pairs. Unknown columns are ignored.
    #[cfg(test)]
    pub(crate) fn from_pairs<K, V>(row: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self {
            row,
            ..Default::default()
        };
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                columns::RA => &mut record.ra,
                columns::DEC => &mut record.dec,
                columns::DISTANCE => &mut record.distance,
                columns::MAG => &mut record.mag,
                columns::COLOR_INDEX => &mut record.color_index,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        record
    }

    /// Right ascension in hours. Unparseable is fatal.
    pub fn ra_hours(&self) -> Result<f64> {
        self.required(columns::RA, self.ra.as_deref())
    }

    /// Declination in degrees. Unparseable is fatal.
    pub fn dec_degrees(&self) -> Result<f64> {
        self.required(columns::DEC, self.dec.as_deref())
    }

    /// Distance is never used downstream, but a malformed one still marks
    /// the catalog as corrupt.
    pub fn distance(&self) -> Result<f64> {
        self.required(columns::DISTANCE, self.distance.as_deref())
    }

    /// Apparent magnitude and color index, or `None` if either is unusable.
    pub fn photometry(&self) -> Option<(f64, f64)> {
        let mag = parse_f64(self.mag.as_deref())?;
        let color = parse_f64(self.color_index.as_deref())?;
        Some((mag, color))
    }

    fn required(&self, field: &'static str, value: Option<&str>) -> Result<f64> {
        parse_f64(value).ok_or_else(|| Error::invalid_field(self.row, field, value))
    }
}

fn parse_f64(s: Option<&str>) -> Option<f64> {
    s.map(str::trim)
        .and_then(|v| if v.is_empty() { None } else { v.parse().ok() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hyg_row(ra: &str, dec: &str, mag: &str, ci: &str) -> RawRecord {
        RawRecord::from_pairs(
            1,
            [
                ("RA", ra),
                ("Dec", dec),
                ("Distance", "10"),
                ("Mag", mag),
                ("ColorIndex", ci),
            ],
        )
    }

    #[test]
    fn test_from_pairs_ignores_unknown_columns() {
        let record = RawRecord::from_pairs(7, [("RA", "1.5"), ("ProperName", "Sirius")]);
        assert_eq!(record.row, 7);
        assert_eq!(record.ra.as_deref(), Some("1.5"));
        assert_eq!(record.dec, None);
        assert_eq!(record.mag, None);
    }

    #[test]
    fn test_positional_fields_trimmed() {
        let record = hyg_row("  6.752569 ", "\t-16.7131", "-1.44", "0.009");
        assert_eq!(record.ra_hours().unwrap(), 6.752569);
        assert_eq!(record.dec_degrees().unwrap(), -16.7131);
        assert_eq!(record.distance().unwrap(), 10.0);
    }

    #[test]
    fn test_bad_ra_is_error() {
        let record = hyg_row("xyz", "0", "1.0", "0.5");
        match record.ra_hours() {
            Err(Error::InvalidField { row, field, value }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "RA");
                assert_eq!(value, "xyz");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_dec_is_error() {
        let record = RawRecord::from_pairs(4, [("RA", "0")]);
        assert!(matches!(
            record.dec_degrees(),
            Err(Error::InvalidField { field: "Dec", .. })
        ));
    }

    #[test]
    fn test_blank_distance_is_error() {
        let record = RawRecord::from_pairs(2, [("Distance", "   ")]);
        assert!(record.distance().is_err());
    }

    #[test]
    fn test_photometry_present() {
        let record = hyg_row("0", "0", " 4.25 ", "1.1 ");
        assert_eq!(record.photometry(), Some((4.25, 1.1)));
    }

    #[test]
    fn test_photometry_non_numeric_mag() {
        let record = hyg_row("0", "0", "abc", "0.5");
        assert_eq!(record.photometry(), None);
    }

    #[test]
    fn test_photometry_blank_color_index() {
        let record = hyg_row("0", "0", "3.0", "");
        assert_eq!(record.photometry(), None);
    }

    #[test]
    fn test_photometry_absent_columns() {
        let record = RawRecord::from_pairs(1, [("RA", "0"), ("Dec", "0"), ("Distance", "1")]);
        assert_eq!(record.photometry(), None);
    }
}
