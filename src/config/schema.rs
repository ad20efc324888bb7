use serde::{Deserialize, Serialize};

use crate::providers::soil::DEFAULT_SOIL_URL;
use crate::providers::weather::DEFAULT_WEATHER_URL;

/// Application configuration.
///
/// Every field is optional: without an API key the weather provider falls
/// back to mock data, so a missing or empty config file still produces a
/// complete analysis.
///
/// Example YAML:
/// ```yaml
/// openweather_api_key: "abc123"
/// weather_url: "https://api.openweathermap.org/data/2.5/weather"
/// soil_url: "https://rest.isric.org/soilgrids/v2.0/properties/query"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// OpenWeatherMap API key; omit to use mock weather data
    pub openweather_api_key: Option<String>,

    /// Override for the OpenWeatherMap endpoint
    pub weather_url: Option<String>,

    /// Override for the SoilGrids endpoint
    pub soil_url: Option<String>,
}

impl Config {
    pub fn weather_url(&self) -> &str {
        self.weather_url.as_deref().unwrap_or(DEFAULT_WEATHER_URL)
    }

    pub fn soil_url(&self) -> &str {
        self.soil_url.as_deref().unwrap_or(DEFAULT_SOIL_URL)
    }
}
