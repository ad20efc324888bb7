use std::fmt;

use serde::{Serialize, Serializer};

use super::tiers::{Tier, TierTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StressLevel {
    Optimal,
    MildStress,
    ModerateStress,
    HighStress,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressLevel::Optimal => write!(f, "OPTIMAL"),
            StressLevel::MildStress => write!(f, "MILD_STRESS"),
            StressLevel::ModerateStress => write!(f, "MODERATE_STRESS"),
            StressLevel::HighStress => write!(f, "HIGH_STRESS"),
        }
    }
}

/// Closed set of climate risk signals. Rendered to report text only at the
/// serialization/formatting boundary so consumers can match structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFactor {
    TemperatureOutsideOptimal,
    ExtremeTemperature,
    RainfallOutsideOptimal,
    SevereDrought,
    ExcessiveRainfall,
    HighDroughtRisk,
}

impl RiskFactor {
    pub fn message(&self) -> &'static str {
        match self {
            RiskFactor::TemperatureOutsideOptimal => "Temperature outside optimal range",
            RiskFactor::ExtremeTemperature => "Extreme temperature conditions",
            RiskFactor::RainfallOutsideOptimal => "Rainfall outside optimal range",
            RiskFactor::SevereDrought => "Severe drought conditions",
            RiskFactor::ExcessiveRainfall => "Excessive rainfall/flooding risk",
            RiskFactor::HighDroughtRisk => "High drought risk detected",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for RiskFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

// Temperature (degC): [20,30] optimal, [15,20)+(30,35] mild,
// [10,15)+(35,40] moderate; everything beyond is high stress.
const TEMP_TABLE: TierTable<StressLevel> = TierTable::new(
    &[
        Tier {
            min: 20.0,
            max: 30.0,
            points: 0.0,
            status: StressLevel::Optimal,
        },
        Tier {
            min: 15.0,
            max: 35.0,
            points: 15.0,
            status: StressLevel::MildStress,
        },
        Tier {
            min: 10.0,
            max: 40.0,
            points: 30.0,
            status: StressLevel::ModerateStress,
        },
    ],
    50.0,
    StressLevel::HighStress,
);

// Rainfall (mm per 14-day window): [100,200] optimal, [50,100)+(200,300]
// mild, [20,50)+(300,400] moderate; drought or flooding beyond that.
const RAIN_TABLE: TierTable<StressLevel> = TierTable::new(
    &[
        Tier {
            min: 100.0,
            max: 200.0,
            points: 0.0,
            status: StressLevel::Optimal,
        },
        Tier {
            min: 50.0,
            max: 300.0,
            points: 15.0,
            status: StressLevel::MildStress,
        },
        Tier {
            min: 20.0,
            max: 400.0,
            points: 30.0,
            status: StressLevel::ModerateStress,
        },
    ],
    50.0,
    StressLevel::HighStress,
);

#[derive(Debug, Clone, Serialize)]
pub struct ClimateStress {
    pub stress_score: f64,
    pub temp_stress: f64,
    pub temp_status: StressLevel,
    pub rain_stress: f64,
    pub rain_status: StressLevel,
    pub risk_factors: Vec<RiskFactor>,
    pub temperature_value: f64,
    pub rainfall_value: f64,
}

/// Score climate stress from temperature and rainfall (higher is worse).
///
/// Each axis contributes up to 50 stress points from its tier table.
/// The compound drought condition (hot and dry) records a risk factor but no
/// direct points; it reaches the total only through the many-risk-factors
/// penalty: more than two accumulated factors add a flat 20. The total is
/// capped at 100.
pub fn score_climate(temperature: f64, rainfall: f64) -> ClimateStress {
    let mut risk_factors = Vec::new();

    let (temp_stress, temp_status) = TEMP_TABLE.lookup(temperature);
    match temp_status {
        StressLevel::ModerateStress => risk_factors.push(RiskFactor::TemperatureOutsideOptimal),
        StressLevel::HighStress => risk_factors.push(RiskFactor::ExtremeTemperature),
        _ => {}
    }

    let (rain_stress, rain_status) = RAIN_TABLE.lookup(rainfall);
    match rain_status {
        StressLevel::ModerateStress => risk_factors.push(RiskFactor::RainfallOutsideOptimal),
        StressLevel::HighStress => {
            if rainfall < 20.0 {
                risk_factors.push(RiskFactor::SevereDrought);
            } else {
                risk_factors.push(RiskFactor::ExcessiveRainfall);
            }
        }
        _ => {}
    }

    if temperature > 35.0 && rainfall < 50.0 {
        risk_factors.push(RiskFactor::HighDroughtRisk);
    }

    let mut total = temp_stress + rain_stress;
    if risk_factors.len() > 2 {
        total += 20.0;
    }

    ClimateStress {
        stress_score: total.min(100.0),
        temp_stress,
        temp_status,
        rain_stress,
        rain_status,
        risk_factors,
        temperature_value: temperature,
        rainfall_value: rainfall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_climate() {
        let result = score_climate(28.0, 150.0);
        assert_eq!(result.stress_score, 0.0);
        assert_eq!(result.temp_status, StressLevel::Optimal);
        assert_eq!(result.rain_status, StressLevel::Optimal);
        assert!(result.risk_factors.is_empty());
    }

    #[test]
    fn test_temperature_tiers() {
        assert_eq!(score_climate(20.0, 150.0).temp_stress, 0.0);
        assert_eq!(score_climate(30.0, 150.0).temp_stress, 0.0);
        assert_eq!(score_climate(15.0, 150.0).temp_stress, 15.0);
        assert_eq!(score_climate(35.0, 150.0).temp_stress, 15.0);
        assert_eq!(score_climate(10.0, 150.0).temp_stress, 30.0);
        assert_eq!(score_climate(40.0, 150.0).temp_stress, 30.0);
        assert_eq!(score_climate(9.9, 150.0).temp_stress, 50.0);
        assert_eq!(score_climate(40.1, 150.0).temp_stress, 50.0);
    }

    #[test]
    fn test_rainfall_tiers() {
        assert_eq!(score_climate(25.0, 100.0).rain_stress, 0.0);
        assert_eq!(score_climate(25.0, 200.0).rain_stress, 0.0);
        assert_eq!(score_climate(25.0, 50.0).rain_stress, 15.0);
        assert_eq!(score_climate(25.0, 300.0).rain_stress, 15.0);
        assert_eq!(score_climate(25.0, 20.0).rain_stress, 30.0);
        assert_eq!(score_climate(25.0, 400.0).rain_stress, 30.0);
        assert_eq!(score_climate(25.0, 19.9).rain_stress, 50.0);
        assert_eq!(score_climate(25.0, 400.1).rain_stress, 50.0);
    }

    #[test]
    fn test_moderate_tiers_record_risk_factors() {
        let result = score_climate(12.0, 350.0);
        assert_eq!(
            result.risk_factors,
            vec![
                RiskFactor::TemperatureOutsideOptimal,
                RiskFactor::RainfallOutsideOptimal
            ]
        );
        // Two factors only: no many-risk-factors penalty
        assert_eq!(result.stress_score, 60.0);
    }

    #[test]
    fn test_drought_vs_flooding_message() {
        let drought = score_climate(25.0, 10.0);
        assert!(drought.risk_factors.contains(&RiskFactor::SevereDrought));

        let flood = score_climate(25.0, 500.0);
        assert!(flood.risk_factors.contains(&RiskFactor::ExcessiveRainfall));
    }

    #[test]
    fn test_compound_drought_adds_factor_without_direct_points() {
        // temp 38 -> moderate (30, factor), rain 45 -> moderate (30, factor),
        // drought rule appends a third factor. The +20 arrives through the
        // factor count, not as direct drought points.
        let result = score_climate(38.0, 45.0);
        assert!(result.risk_factors.contains(&RiskFactor::HighDroughtRisk));
        assert_eq!(result.risk_factors.len(), 3);
        assert_eq!(result.stress_score, 30.0 + 30.0 + 20.0);
    }

    #[test]
    fn test_compound_drought_always_arrives_as_third_factor() {
        // The drought rule needs temp > 35 and rainfall < 50, and each of
        // those conditions already lands its axis in a factor-recording
        // tier. So the drought factor is always at least the third and the
        // count penalty fires with it, even at the rule's own boundaries:
        // temp 36 -> moderate (30, factor), rain 49 -> moderate (30, factor).
        let result = score_climate(36.0, 49.0);
        assert!(result.risk_factors.contains(&RiskFactor::HighDroughtRisk));
        assert_eq!(result.risk_factors.len(), 3);
        assert_eq!(result.stress_score, 30.0 + 30.0 + 20.0);
    }

    #[test]
    fn test_total_clamped_at_100() {
        // Extreme heat and drought: 50 + 50 + 20 penalty -> clamped
        let result = score_climate(45.0, 5.0);
        assert_eq!(result.risk_factors.len(), 3);
        assert_eq!(result.stress_score, 100.0);
    }

    #[test]
    fn test_drought_scenario() {
        // temp 38 -> moderate (30, factor), rainfall 15 -> high (50, severe
        // drought factor), compound rule -> third factor -> +20, clamped
        let result = score_climate(38.0, 15.0);
        assert_eq!(result.temp_stress, 30.0);
        assert_eq!(result.rain_stress, 50.0);
        assert_eq!(result.risk_factors.len(), 3);
        assert_eq!(result.stress_score, 100.0);
    }

    #[test]
    fn test_risk_factor_messages() {
        assert_eq!(
            RiskFactor::SevereDrought.message(),
            "Severe drought conditions"
        );
        assert_eq!(
            RiskFactor::HighDroughtRisk.message(),
            "High drought risk detected"
        );
    }

    #[test]
    fn test_risk_factors_serialize_as_text() {
        let json = serde_json::to_value(vec![RiskFactor::ExtremeTemperature]).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["Extreme temperature conditions"])
        );
    }
}
