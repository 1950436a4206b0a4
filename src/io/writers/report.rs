use serde::Serialize;
use std::path::PathBuf;

use crate::core::outputs::OutputSet;
use crate::core::processing::convert::{BatchReport, JobOutcome};

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    scene: &'a str,
    generated: String,
    converted: usize,
    failed: usize,
    jobs: &'a [JobOutcome],
}

/// Write the `{scene}_report.json` sidecar summarizing a batch conversion run.
pub fn write_report_sidecar(
    outputs: &OutputSet,
    report: &BatchReport,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let document = ReportDocument {
        scene: &outputs.scene_name,
        generated: chrono::Utc::now().to_rfc3339(),
        converted: report.converted,
        failed: report.failed,
        jobs: &report.jobs,
    };

    let path = outputs
        .scene_dir
        .join(format!("{}_report.json", outputs.scene_name));
    let json_string = serde_json::to_string_pretty(&document)?;
    std::fs::write(&path, json_string)?;
    Ok(path)
}
