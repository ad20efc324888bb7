use std::fmt;

use serde::Serialize;

use super::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VegetationClass {
    Healthy,
    Moderate,
    Poor,
}

impl VegetationClass {
    pub fn description(&self) -> &'static str {
        match self {
            VegetationClass::Healthy => "Dense, healthy vegetation present",
            VegetationClass::Moderate => "Moderate vegetation cover",
            VegetationClass::Poor => "Sparse or degraded vegetation",
        }
    }
}

impl fmt::Display for VegetationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VegetationClass::Healthy => write!(f, "HEALTHY"),
            VegetationClass::Moderate => write!(f, "MODERATE"),
            VegetationClass::Poor => write!(f, "POOR"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VegetationHealth {
    pub score: f64,
    pub classification: VegetationClass,
    pub description: &'static str,
    pub ndvi_value: f64,
}

/// Score vegetation health from an NDVI reading.
///
/// NDVI is clamped into [0, 1] before scoring; out-of-range readings are
/// corrected silently rather than rejected. The mapping is piecewise linear
/// in three tiers and continuous across the tier boundaries at 0.3 and 0.6.
pub fn score_vegetation(ndvi: f64) -> VegetationHealth {
    let ndvi = ndvi.clamp(0.0, 1.0);

    let (score, classification) = if ndvi > 0.6 {
        (80.0 + (ndvi - 0.6) * 50.0, VegetationClass::Healthy)
    } else if ndvi >= 0.3 {
        (40.0 + (ndvi - 0.3) * 133.33, VegetationClass::Moderate)
    } else {
        (ndvi * 133.33, VegetationClass::Poor)
    };

    VegetationHealth {
        score: round2(score),
        classification,
        description: classification.description(),
        ndvi_value: ndvi,
    }
}
