use std::fmt;

use serde::Serialize;

use super::tiers::{Tier, TierTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SoilStatus {
    Optimal,
    Acceptable,
    Marginal,
    Poor,
}

impl fmt::Display for SoilStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilStatus::Optimal => write!(f, "OPTIMAL"),
            SoilStatus::Acceptable => write!(f, "ACCEPTABLE"),
            SoilStatus::Marginal => write!(f, "MARGINAL"),
            SoilStatus::Poor => write!(f, "POOR"),
        }
    }
}

// The optimal band is listed first so it claims the shared boundary values;
// each wider band picks up the symmetric ranges on either side of it.
// pH: [6.0,7.5] optimal, [5.5,6.0)+(7.5,8.0] acceptable, [5.0,5.5)+(8.0,8.5] marginal.
const PH_TABLE: TierTable<SoilStatus> = TierTable::new(
    &[
        Tier {
            min: 6.0,
            max: 7.5,
            points: 50.0,
            status: SoilStatus::Optimal,
        },
        Tier {
            min: 5.5,
            max: 8.0,
            points: 35.0,
            status: SoilStatus::Acceptable,
        },
        Tier {
            min: 5.0,
            max: 8.5,
            points: 20.0,
            status: SoilStatus::Marginal,
        },
    ],
    10.0,
    SoilStatus::Poor,
);

// Moisture (%): [50,70] optimal, [40,50)+(70,80] acceptable, [30,40)+(80,90] marginal.
const MOISTURE_TABLE: TierTable<SoilStatus> = TierTable::new(
    &[
        Tier {
            min: 50.0,
            max: 70.0,
            points: 50.0,
            status: SoilStatus::Optimal,
        },
        Tier {
            min: 40.0,
            max: 80.0,
            points: 35.0,
            status: SoilStatus::Acceptable,
        },
        Tier {
            min: 30.0,
            max: 90.0,
            points: 20.0,
            status: SoilStatus::Marginal,
        },
    ],
    10.0,
    SoilStatus::Poor,
);

#[derive(Debug, Clone, Serialize)]
pub struct SoilSuitability {
    pub score: f64,
    pub ph_score: f64,
    pub ph_status: SoilStatus,
    pub moisture_score: f64,
    pub moisture_status: SoilStatus,
    pub ph_value: f64,
    pub moisture_value: f64,
}

/// Score soil suitability from pH and moisture.
///
/// Each input feeds an independent four-tier sub-score worth up to 50
/// points; the total is their sum. Inputs are not clamped: values outside
/// every table row land in the POOR catch-all.
pub fn score_soil(ph: f64, moisture: f64) -> SoilSuitability {
    let (ph_score, ph_status) = PH_TABLE.lookup(ph);
    let (moisture_score, moisture_status) = MOISTURE_TABLE.lookup(moisture);

    SoilSuitability {
        score: ph_score + moisture_score,
        ph_score,
        ph_status,
        moisture_score,
        moisture_status,
        ph_value: ph,
        moisture_value: moisture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_soil() {
        let result = score_soil(6.5, 65.0);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.ph_status, SoilStatus::Optimal);
        assert_eq!(result.moisture_status, SoilStatus::Optimal);
    }

    #[test]
    fn test_ph_boundaries() {
        // Closed optimal band
        assert_eq!(score_soil(6.0, 60.0).ph_status, SoilStatus::Optimal);
        assert_eq!(score_soil(7.5, 60.0).ph_status, SoilStatus::Optimal);
        // Acceptable on both flanks, boundary values included
        assert_eq!(score_soil(5.5, 60.0).ph_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(5.9, 60.0).ph_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(7.6, 60.0).ph_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(8.0, 60.0).ph_status, SoilStatus::Acceptable);
        // Marginal flanks
        assert_eq!(score_soil(5.0, 60.0).ph_status, SoilStatus::Marginal);
        assert_eq!(score_soil(5.4, 60.0).ph_status, SoilStatus::Marginal);
        assert_eq!(score_soil(8.1, 60.0).ph_status, SoilStatus::Marginal);
        assert_eq!(score_soil(8.5, 60.0).ph_status, SoilStatus::Marginal);
        // Catch-all
        assert_eq!(score_soil(4.9, 60.0).ph_status, SoilStatus::Poor);
        assert_eq!(score_soil(8.6, 60.0).ph_status, SoilStatus::Poor);
    }

    #[test]
    fn test_moisture_boundaries() {
        assert_eq!(score_soil(6.5, 50.0).moisture_status, SoilStatus::Optimal);
        assert_eq!(score_soil(6.5, 70.0).moisture_status, SoilStatus::Optimal);
        assert_eq!(score_soil(6.5, 40.0).moisture_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(6.5, 49.9).moisture_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(6.5, 80.0).moisture_status, SoilStatus::Acceptable);
        assert_eq!(score_soil(6.5, 30.0).moisture_status, SoilStatus::Marginal);
        assert_eq!(score_soil(6.5, 90.0).moisture_status, SoilStatus::Marginal);
        assert_eq!(score_soil(6.5, 29.9).moisture_status, SoilStatus::Poor);
        assert_eq!(score_soil(6.5, 90.1).moisture_status, SoilStatus::Poor);
    }

    #[test]
    fn test_sub_scores_come_from_fixed_set() {
        for ph in [3.0, 5.0, 5.7, 6.5, 7.8, 8.3, 9.5] {
            for moisture in [0.0, 25.0, 35.0, 45.0, 60.0, 75.0, 85.0, 120.0] {
                let result = score_soil(ph, moisture);
                assert!([10.0, 20.0, 35.0, 50.0].contains(&result.ph_score));
                assert!([10.0, 20.0, 35.0, 50.0].contains(&result.moisture_score));
                assert!(result.score >= 20.0 && result.score <= 100.0);
            }
        }
    }

    #[test]
    fn test_worst_case_floor_is_20() {
        let result = score_soil(2.0, 100.0);
        assert_eq!(result.score, 20.0);
        assert_eq!(result.ph_status, SoilStatus::Poor);
        assert_eq!(result.moisture_status, SoilStatus::Poor);
    }

    #[test]
    fn test_raw_values_are_echoed() {
        let result = score_soil(7.2, 25.0);
        assert_eq!(result.ph_value, 7.2);
        assert_eq!(result.moisture_value, 25.0);
    }
}
