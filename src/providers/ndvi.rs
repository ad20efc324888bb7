use super::types::{DataSource, NdviReading};

/// Estimate NDVI from latitude bands.
///
/// Equatorial and tropical sites carry denser vegetation on average. This
/// stands in for a satellite imagery provider; the `estimated` provenance
/// tag marks the value as synthetic.
pub fn estimate_ndvi(lat: f64, _lon: f64) -> NdviReading {
    let base: f64 = if lat.abs() < 10.0 {
        0.65
    } else if lat.abs() < 23.5 {
        0.50
    } else {
        0.40
    };

    NdviReading {
        ndvi: base.clamp(0.0, 1.0),
        source: DataSource::Estimated,
        success: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equatorial_band() {
        assert_eq!(estimate_ndvi(2.5, 30.0).ndvi, 0.65);
        assert_eq!(estimate_ndvi(-9.9, 30.0).ndvi, 0.65);
    }

    #[test]
    fn test_tropical_band() {
        assert_eq!(estimate_ndvi(14.0, 75.5).ndvi, 0.50);
        assert_eq!(estimate_ndvi(-20.0, 75.5).ndvi, 0.50);
    }

    #[test]
    fn test_extratropical_band() {
        assert_eq!(estimate_ndvi(23.5, 0.0).ndvi, 0.40);
        assert_eq!(estimate_ndvi(51.5, 0.0).ndvi, 0.40);
    }

    #[test]
    fn test_estimates_stay_in_valid_ndvi_range() {
        for lat in [-80.0, -23.5, -10.0, 0.0, 9.9, 23.4, 60.0] {
            let reading = estimate_ndvi(lat, 0.0);
            assert!(reading.ndvi >= 0.0 && reading.ndvi <= 1.0);
        }
    }

    #[test]
    fn test_provenance_is_estimated() {
        let reading = estimate_ndvi(0.0, 0.0);
        assert_eq!(reading.source, DataSource::Estimated);
        assert!(reading.success);
    }
}
