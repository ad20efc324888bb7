use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::report::AnalysisReport;
use crate::scoring::{RiskLevel, SoilStatus, StressLevel};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn colorize_risk(risk: RiskLevel) -> String {
    match risk {
        RiskLevel::Low => risk.green().to_string(),
        RiskLevel::Medium => risk.yellow().to_string(),
        RiskLevel::High => risk.red().to_string(),
    }
}

fn colorize_soil_status(status: SoilStatus) -> String {
    match status {
        SoilStatus::Optimal => status.green().to_string(),
        SoilStatus::Acceptable => status.yellow().to_string(),
        SoilStatus::Marginal | SoilStatus::Poor => status.red().to_string(),
    }
}

fn colorize_stress(status: StressLevel) -> String {
    match status {
        StressLevel::Optimal => status.green().to_string(),
        StressLevel::MildStress => status.yellow().to_string(),
        StressLevel::ModerateStress | StressLevel::HighStress => status.red().to_string(),
    }
}

/// Format an analysis report as a multi-line human-readable summary.
///
/// Risk factors are rendered from their enum values here, at the formatting
/// boundary.
pub fn format_report(report: &AnalysisReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let verdict = &report.analysis.site_suitability;
    if use_colors {
        lines.push(format!(
            "Site suitability: {} / 100   risk {}   priority {}",
            format!("{:.2}", verdict.final_score).bold(),
            colorize_risk(verdict.risk_level),
            verdict.priority.bold(),
        ));
    } else {
        lines.push(format!(
            "Site suitability: {:.2} / 100   risk {}   priority {}",
            verdict.final_score, verdict.risk_level, verdict.priority,
        ));
    }
    lines.push(format!("Recommendation: {}", verdict.recommendation));
    lines.push(String::new());

    let vegetation = &report.analysis.vegetation_health;
    lines.push(format!(
        "Vegetation health: {:.2}  {}  (NDVI {:.2}) - {}",
        vegetation.score, vegetation.classification, vegetation.ndvi_value, vegetation.description,
    ));

    let soil = &report.analysis.soil_suitability;
    if use_colors {
        lines.push(format!(
            "Soil suitability:  {:.2}  pH {} ({:.1} -> {:.0} pts), moisture {} ({:.1}% -> {:.0} pts)",
            soil.score,
            colorize_soil_status(soil.ph_status),
            soil.ph_value,
            soil.ph_score,
            colorize_soil_status(soil.moisture_status),
            soil.moisture_value,
            soil.moisture_score,
        ));
    } else {
        lines.push(format!(
            "Soil suitability:  {:.2}  pH {} ({:.1} -> {:.0} pts), moisture {} ({:.1}% -> {:.0} pts)",
            soil.score,
            soil.ph_status,
            soil.ph_value,
            soil.ph_score,
            soil.moisture_status,
            soil.moisture_value,
            soil.moisture_score,
        ));
    }

    let climate = &report.analysis.climate_stress;
    if use_colors {
        lines.push(format!(
            "Climate stress:    {:.2}  temperature {} ({:.1}C), rainfall {} ({:.1}mm/14d)",
            climate.stress_score,
            colorize_stress(climate.temp_status),
            climate.temperature_value,
            colorize_stress(climate.rain_status),
            climate.rainfall_value,
        ));
    } else {
        lines.push(format!(
            "Climate stress:    {:.2}  temperature {} ({:.1}C), rainfall {} ({:.1}mm/14d)",
            climate.stress_score,
            climate.temp_status,
            climate.temperature_value,
            climate.rain_status,
            climate.rainfall_value,
        ));
    }

    if !climate.risk_factors.is_empty() {
        lines.push("Risk factors:".to_string());
        for factor in &climate.risk_factors {
            lines.push(format!("  - {factor}"));
        }
    }

    let scores = &verdict.component_scores;
    lines.push(format!(
        "Contributions: vegetation {:.2} + soil {:.2} + climate {:.2}",
        scores.vegetation_contribution, scores.soil_contribution, scores.climate_contribution,
    ));

    if let (Some(location), Some(sources), Some(status)) =
        (&report.location, &report.data_sources, &report.api_status)
    {
        lines.push(String::new());
        lines.push(format!("Location: {}, {}", location.lat, location.lon));
        lines.push(format!(
            "Data sources: weather {} ({}), soil {} ({}), ndvi {}",
            sources.weather,
            if status.weather_success { "live" } else { "fallback" },
            sources.soil,
            if status.soil_success { "live" } else { "fallback" },
            sources.ndvi,
        ));
    }

    lines.join("\n")
}
