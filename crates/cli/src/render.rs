use crate::error::Error;
use analyzer::DelayLoadReport;
use config::OutputFormat;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// The classification result for one capture file.
#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub trace: PathBuf,
    #[serde(flatten)]
    pub report: DelayLoadReport,
}

pub fn render(
    reports: &[TraceReport],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), Error> {
    match format {
        OutputFormat::Text => render_text(reports, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_text(reports: &[TraceReport], out: &mut impl Write) -> Result<(), Error> {
    let headers = reports.len() > 1;
    for (ix, entry) in reports.iter().enumerate() {
        if headers {
            if ix > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", entry.trace.display())?;
        }
        for candidate in &entry.report.candidates {
            writeln!(out, "{candidate}")?;
        }
    }
    Ok(())
}
