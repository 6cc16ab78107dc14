//! JSON rendering for reports

use serde_json::Value;

use crate::features::report::DetectionReport;

/// Render the report as a JSON value
pub fn render_json(report: &DetectionReport) -> serde_json::Result<Value> {
    serde_json::to_value(report)
}

/// Render the report as a pretty-printed JSON string
pub fn render_json_string(report: &DetectionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render the report as a compact JSON string (no whitespace)
pub fn render_json_compact(report: &DetectionReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
