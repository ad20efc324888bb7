use anyhow::{Context, Result};
use serde::Serialize;

use crate::fetch::FetchedSite;
use crate::measurement::SiteMeasurement;
use crate::providers::{ApiStatus, DataSources};
use crate::scoring::{analyze, Analysis, Priority, RiskLevel};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// The headline fields, duplicated out of `site_suitability` so envelope
/// consumers can read the verdict without walking the analysis tree.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub suitability_score: f64,
    pub risk_level: RiskLevel,
    pub priority: Priority,
    pub recommendation: &'static str,
}

/// The externally visible result of one scoring invocation.
///
/// The location/provenance fields are present only when the measurements
/// were fetched rather than supplied directly.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub input_data: SiteMeasurement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<DataSources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_status: Option<ApiStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub analysis: Analysis,
    pub summary: Summary,
}

/// Structured failure envelope for malformed requests; the scoring pipeline
/// is never invoked on this path.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

fn summarize(analysis: &Analysis) -> Summary {
    let verdict = &analysis.site_suitability;
    Summary {
        suitability_score: verdict.final_score,
        risk_level: verdict.risk_level,
        priority: verdict.priority,
        recommendation: verdict.recommendation,
    }
}

/// Score directly supplied measurements.
pub fn build_report(measurement: SiteMeasurement) -> AnalysisReport {
    let analysis = analyze(&measurement);
    let summary = summarize(&analysis);
    AnalysisReport {
        success: true,
        location: None,
        input_data: measurement,
        data_sources: None,
        api_status: None,
        timestamp: None,
        analysis,
        summary,
    }
}

/// Score fetched measurements, carrying their provenance into the report.
pub fn build_fetched_report(site: &FetchedSite) -> AnalysisReport {
    let analysis = analyze(&site.measurement);
    let summary = summarize(&analysis);
    AnalysisReport {
        success: true,
        location: Some(site.location),
        input_data: site.measurement,
        data_sources: Some(site.data_sources),
        api_status: Some(site.api_status),
        timestamp: Some(site.timestamp.clone()),
        analysis,
        summary,
    }
}

/// Parse a measurement record from a JSON request body. Missing fields take
/// the documented defaults and unknown fields are ignored; a record that is
/// not valid JSON is a malformed request.
pub fn parse_request(input: &str) -> Result<SiteMeasurement> {
    serde_json::from_str(input.trim()).context("Failed to parse measurement JSON")
}
