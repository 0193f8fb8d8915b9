//! Machine-readable report payload.
//!
//! Projects `ValidationReport`s into a versioned JSON document carrying a
//! typed error kind alongside each display string, so callers can consume
//! results without parsing messages.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use fieldcheck_model::ValidationReport;

const REPORT_SCHEMA: &str = "fieldcheck.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub reports: Vec<ReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub record: String,
    pub issue_count: usize,
    pub issues: Vec<IssueJson>,
}

#[derive(Debug, Serialize)]
pub struct IssueJson {
    pub field: String,
    pub kind: &'static str,
    pub message: String,
}

/// Build the serializable payload for a set of reports.
pub fn report_payload(reports: &[ValidationReport]) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        reports: reports
            .iter()
            .map(|report| ReportSummary {
                record: report.record.clone(),
                issue_count: report.issue_count(),
                issues: report
                    .issues
                    .iter()
                    .map(|issue| IssueJson {
                        field: issue.field.clone(),
                        kind: issue.kind(),
                        message: issue.message(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Write `validation_report.json` under `output_dir`, creating the
/// directory if needed.
pub fn write_report_json(output_dir: &Path, reports: &[ValidationReport]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = report_payload(reports);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
