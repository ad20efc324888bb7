use chrono::Utc;

use crate::config::Config;
use crate::measurement::SiteMeasurement;
use crate::providers::{self, ApiStatus, DataSources};
use crate::report::Location;

/// Resolved measurements for a location plus their provenance.
#[derive(Debug, Clone)]
pub struct FetchedSite {
    pub location: Location,
    pub measurement: SiteMeasurement,
    pub data_sources: DataSources,
    pub api_status: ApiStatus,
    pub timestamp: String,
}

/// Fetch all measurement groups for a location.
///
/// Weather and soil are fetched concurrently; each group degrades to its
/// mock fallback independently, so this never fails — at worst every field
/// carries `mock` provenance.
pub async fn fetch_site(
    client: &reqwest::Client,
    config: &Config,
    lat: f64,
    lon: f64,
    verbose: bool,
) -> FetchedSite {
    if verbose {
        eprintln!("Fetching data for location: {lat}, {lon}");
    }

    let (weather, soil) = futures::join!(
        providers::fetch_weather(
            client,
            config.weather_url(),
            config.openweather_api_key.as_deref(),
            lat,
            lon,
        ),
        providers::fetch_soil(client, config.soil_url(), lat, lon),
    );
    let ndvi = providers::estimate_ndvi(lat, lon);

    if verbose {
        eprintln!(
            "  weather: {} ({})",
            weather.source,
            if weather.success { "ok" } else { "fallback" }
        );
        eprintln!(
            "  soil: {} ({})",
            soil.source,
            if soil.success { "ok" } else { "fallback" }
        );
        eprintln!("  ndvi: {} ({:.2})", ndvi.source, ndvi.ndvi);
    }

    FetchedSite {
        location: Location { lat, lon },
        measurement: SiteMeasurement {
            ndvi: ndvi.ndvi,
            soil_ph: soil.soil_ph,
            soil_moisture: soil.soil_moisture,
            temperature: weather.temperature,
            rainfall: weather.rainfall,
        },
        data_sources: DataSources {
            weather: weather.source,
            soil: soil.source,
            ndvi: ndvi.source,
        },
        api_status: ApiStatus {
            weather_success: weather.success,
            soil_success: soil.success,
            ndvi_success: ndvi.success,
        },
        timestamp: Utc::now().to_rfc3339(),
    }
}
