use std::fmt;

use serde::Serialize;

use super::climate::ClimateStress;
use super::round2;
use super::soil::SoilSuitability;
use super::vegetation::VegetationHealth;

pub const VEGETATION_WEIGHT: f64 = 0.30;
pub const SOIL_WEIGHT: f64 = 0.40;
pub const CLIMATE_WEIGHT: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// Weighted share of each component in the final score, kept for
/// auditability.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComponentScores {
    pub vegetation_contribution: f64,
    pub soil_contribution: f64,
    pub climate_contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteSuitability {
    pub final_score: f64,
    pub risk_level: RiskLevel,
    pub priority: Priority,
    pub recommendation: &'static str,
    pub component_scores: ComponentScores,
}

/// Combine the three component assessments into the final verdict.
///
/// Climate enters inverted: low stress means a high suitability
/// contribution. Thresholds: 70 and above is low risk, 50 and above is
/// medium, anything below is high risk.
pub fn score_suitability(
    vegetation: &VegetationHealth,
    soil: &SoilSuitability,
    climate: &ClimateStress,
) -> SiteSuitability {
    let vegetation_contribution = vegetation.score * VEGETATION_WEIGHT;
    let soil_contribution = soil.score * SOIL_WEIGHT;
    let climate_contribution = (100.0 - climate.stress_score) * CLIMATE_WEIGHT;

    let final_score = round2(vegetation_contribution + soil_contribution + climate_contribution);

    let (risk_level, priority, recommendation) = if final_score >= 70.0 {
        (
            RiskLevel::Low,
            Priority::High,
            "Excellent site for reforestation. Proceed with planting.",
        )
    } else if final_score >= 50.0 {
        (
            RiskLevel::Medium,
            Priority::Medium,
            "Good site with some challenges. Consider soil amendments and species selection.",
        )
    } else {
        (
            RiskLevel::High,
            Priority::Low,
            "Challenging site. Requires significant preparation and hardy species.",
        )
    };

    SiteSuitability {
        final_score,
        risk_level,
        priority,
        recommendation,
        component_scores: ComponentScores {
            vegetation_contribution: round2(vegetation_contribution),
            soil_contribution: round2(soil_contribution),
            climate_contribution: round2(climate_contribution),
        },
    }
}
