use derive_more::Display;
use serde::{Deserialize, Serialize};

/// NORAD catalog (satellite) number
pub type CatalogNumber = u32;

/// A fully parsed element set
///
/// Field order follows the wire layout: title (line 0), then line 1, then line 2.
#[derive(Clone, PartialEq, PartialOrd, Debug, Display, Serialize, Deserialize)]
#[display(
    fmt = "{{catalog_number: {}, title: {:?}, epoch: {}/{:.8}, ...}}",
    "catalog_number",
    "title",
    "epoch_year",
    "epoch_day"
)]
pub struct TleRecord {
    /// Satellite name, empty for a two-line set
    pub title: String,

    // Line 1
    pub catalog_number: CatalogNumber,
    /// U, C or S
    pub classification: char,
    /// Four digit year
    pub launch_year: u16,
    pub launch_number: u16,
    pub launch_piece: String,
    /// Four digit year
    pub epoch_year: u16,
    /// Day of year with fractional time
    pub epoch_day: f64,
    /// First derivative of mean motion [rev/day^2]
    pub mean_motion_d1: f64,
    /// Second derivative of mean motion [rev/day^3]
    pub mean_motion_d2: f64,
    /// Drag term [1/earth radii]
    pub b_star: f64,
    pub ephemeris_type: u8,
    pub element_number: u16,

    // Line 2
    /// [deg]
    pub inclination: f64,
    /// Right ascension of the ascending node [deg]
    pub right_ascension: f64,
    /// [1]
    pub eccentricity: f64,
    /// [deg]
    pub argument_perigee: f64,
    /// [deg]
    pub mean_anomaly: f64,
    /// [rev/day]
    pub mean_motion: f64,
    /// Orbit count at epoch
    pub revolutions_epoch: u32,
}

impl TleRecord {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
