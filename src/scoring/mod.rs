pub mod climate;
pub mod soil;
pub mod suitability;
pub mod tiers;
pub mod vegetation;

pub use climate::{score_climate, ClimateStress, RiskFactor, StressLevel};
pub use soil::{score_soil, SoilStatus, SoilSuitability};
pub use suitability::{score_suitability, Priority, RiskLevel, SiteSuitability};
pub use vegetation::{score_vegetation, VegetationClass, VegetationHealth};

use serde::Serialize;

use crate::measurement::SiteMeasurement;

/// Round to two decimals, the precision every reported score carries.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The three component assessments plus the final verdict for one site.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub vegetation_health: VegetationHealth,
    pub soil_suitability: SoilSuitability,
    pub climate_stress: ClimateStress,
    pub site_suitability: SiteSuitability,
}

/// Run the full scoring pipeline over one measurement set.
///
/// The three component scorers are independent pure functions; the
/// aggregator consumes only their published scores, so the whole pipeline is
/// deterministic for a given input.
pub fn analyze(measurement: &SiteMeasurement) -> Analysis {
    let vegetation_health = score_vegetation(measurement.ndvi);
    let soil_suitability = score_soil(measurement.soil_ph, measurement.soil_moisture);
    let climate_stress = score_climate(measurement.temperature, measurement.rainfall);
    let site_suitability = score_suitability(&vegetation_health, &soil_suitability, &climate_stress);

    Analysis {
        vegetation_health,
        soil_suitability,
        climate_stress,
        site_suitability,
    }
}
