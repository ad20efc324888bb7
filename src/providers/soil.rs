use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::{DataSource, SoilReading};

pub const DEFAULT_SOIL_URL: &str = "https://rest.isric.org/soilgrids/v2.0/properties/query";

// SoilGrids nests a single value under properties.layers[].depths[].values;
// means are reported scaled by 10.
#[derive(Debug, Deserialize)]
struct SoilGridsResponse {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    layers: Vec<Layer>,
}

#[derive(Debug, Deserialize)]
struct Layer {
    depths: Vec<Depth>,
}

#[derive(Debug, Deserialize)]
struct Depth {
    values: DepthValues,
}

#[derive(Debug, Deserialize)]
struct DepthValues {
    mean: Option<f64>,
}

impl SoilGridsResponse {
    fn mean(&self) -> Result<f64> {
        self.properties
            .layers
            .first()
            .and_then(|layer| layer.depths.first())
            .and_then(|depth| depth.values.mean)
            .ok_or_else(|| anyhow!("SoilGrids response has no mean value"))
    }
}

/// Fetch soil pH and estimated moisture from SoilGrids.
///
/// pH comes from the `phh2o` property and moisture is derived from clay
/// content. On any failure the reading degrades to location-dependent mock
/// values (tropical sites assume slightly acidic, wetter soil).
pub async fn fetch_soil(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> SoilReading {
    match request_soil(client, base_url, lat, lon).await {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("Warning: Soil API failed - {e:#}");
            mock_soil(lat)
        }
    }
}

async fn request_soil(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
) -> Result<SoilReading> {
    let ph = fetch_property(client, base_url, lat, lon, "phh2o").await? / 10.0;
    let clay_content = fetch_property(client, base_url, lat, lon, "clay").await? / 10.0;

    // Moisture proxy: clay retains water, capped below saturation
    let soil_moisture = (30.0 + clay_content * 0.5).min(95.0);

    Ok(SoilReading {
        soil_ph: ph,
        soil_moisture,
        clay_content,
        source: DataSource::SoilGrids,
        success: true,
    })
}

async fn fetch_property(
    client: &reqwest::Client,
    base_url: &str,
    lat: f64,
    lon: f64,
    property: &str,
) -> Result<f64> {
    let retry_strategy = ExponentialBackoff::from_millis(100)
        .max_delay(std::time::Duration::from_secs(5))
        .take(3);

    let response = Retry::spawn(retry_strategy, || async {
        let response = client
            .get(base_url)
            .query(&[
                ("lon", lon.to_string()),
                ("lat", lat.to_string()),
                ("property", property.to_string()),
                ("depth", "0-5cm".to_string()),
                ("value", "mean".to_string()),
            ])
            .send()
            .await
            .with_context(|| format!("SoilGrids {property} request failed"))?
            .error_for_status()
            .with_context(|| format!("SoilGrids {property} returned an error status"))?;

        response
            .json::<SoilGridsResponse>()
            .await
            .with_context(|| format!("Failed to decode SoilGrids {property} response"))
    })
    .await?;

    response.mean()
}

pub fn mock_soil(lat: f64) -> SoilReading {
    let is_tropical = lat.abs() < 23.5;
    SoilReading {
        soil_ph: if is_tropical { 6.0 } else { 6.5 },
        soil_moisture: if is_tropical { 65.0 } else { 55.0 },
        clay_content: 25.0,
        source: DataSource::Mock,
        success: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_soil_tropical() {
        let reading = mock_soil(-10.2);
        assert_eq!(reading.soil_ph, 6.0);
        assert_eq!(reading.soil_moisture, 65.0);
        assert_eq!(reading.source, DataSource::Mock);
        assert!(!reading.success);
    }

    #[test]
    fn test_mock_soil_temperate() {
        let reading = mock_soil(48.8);
        assert_eq!(reading.soil_ph, 6.5);
        assert_eq!(reading.soil_moisture, 55.0);
    }

    #[test]
    fn test_soilgrids_response_mean() {
        let response: SoilGridsResponse = serde_json::from_str(
            r#"{"properties": {"layers": [{"depths": [{"values": {"mean": 62}}]}]}}"#,
        )
        .unwrap();
        assert_eq!(response.mean().unwrap(), 62.0);
    }

    #[test]
    fn test_soilgrids_missing_mean_is_an_error() {
        let response: SoilGridsResponse = serde_json::from_str(
            r#"{"properties": {"layers": [{"depths": [{"values": {"mean": null}}]}]}}"#,
        )
        .unwrap();
        assert!(response.mean().is_err());
    }

    #[test]
    fn test_moisture_estimate_caps_at_95() {
        // 30 + clay*0.5 with very high clay content must not exceed 95
        let moisture = (30.0_f64 + 80.0 * 0.5).min(95.0);
        assert_eq!(moisture, 70.0);
        let saturated = (30.0_f64 + 140.0 * 0.5).min(95.0);
        assert_eq!(saturated, 95.0);
    }
}
