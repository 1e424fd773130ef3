use std::fs::File;
use std::io::BufWriter;

use tracing::info;

use crate::pipeline::SignalReport;

/// Write a pipeline report to `path` as pretty-printed JSON.
pub fn write_report_json(
    report: &SignalReport,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    info!("report written to {}", path);
    Ok(())
}
