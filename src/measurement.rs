use serde::{Deserialize, Serialize};

/// One set of environmental measurements for a site.
///
/// Fields missing from an input record are filled with the documented
/// defaults via `Default`, so a partial record is always completed before it
/// reaches the scoring pipeline. Values are used as given; only NDVI is
/// clamped, and that happens inside the vegetation scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeasurement {
    /// Normalized Difference Vegetation Index, expected in [0, 1]
    pub ndvi: f64,
    pub soil_ph: f64,
    /// Soil moisture in percent
    pub soil_moisture: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Rainfall in mm over a 14-day window
    pub rainfall: f64,
}

impl Default for SiteMeasurement {
    fn default() -> Self {
        Self {
            ndvi: 0.0,
            soil_ph: 6.5,
            soil_moisture: 50.0,
            temperature: 25.0,
            rainfall: 100.0,
        }
    }
}
