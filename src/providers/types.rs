use std::fmt;

use serde::Serialize;

/// Where a field group's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataSource {
    #[serde(rename = "OpenWeatherMap")]
    OpenWeatherMap,
    #[serde(rename = "SoilGrids")]
    SoilGrids,
    #[serde(rename = "estimated")]
    Estimated,
    #[serde(rename = "mock")]
    Mock,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::OpenWeatherMap => write!(f, "OpenWeatherMap"),
            DataSource::SoilGrids => write!(f, "SoilGrids"),
            DataSource::Estimated => write!(f, "estimated"),
            DataSource::Mock => write!(f, "mock"),
        }
    }
}

/// Temperature and rainfall for a location, with provenance.
#[derive(Debug, Clone, Copy)]
pub struct WeatherReading {
    pub temperature: f64,
    /// Estimated mm over a 14-day window
    pub rainfall: f64,
    pub humidity: f64,
    pub source: DataSource,
    pub success: bool,
}

/// Soil pH and moisture for a location, with provenance.
#[derive(Debug, Clone, Copy)]
pub struct SoilReading {
    pub soil_ph: f64,
    pub soil_moisture: f64,
    pub clay_content: f64,
    pub source: DataSource,
    pub success: bool,
}

/// Vegetation index for a location, with provenance.
#[derive(Debug, Clone, Copy)]
pub struct NdviReading {
    pub ndvi: f64,
    pub source: DataSource,
    pub success: bool,
}

/// Per-group provenance echoed into the report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataSources {
    pub weather: DataSource,
    pub soil: DataSource,
    pub ndvi: DataSource,
}

/// Per-group fetch outcome echoed into the report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApiStatus {
    pub weather_success: bool,
    pub soil_success: bool,
    pub ndvi_success: bool,
}
