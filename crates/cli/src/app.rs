use crate::{
    cli::Cli,
    inputs::expand_traces,
    render::{TraceReport, render},
};
use anyhow::Context;
use config::Config;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Analyze every requested capture and emit the report.
///
/// The report is rendered in memory; the output file is only written once
/// every capture has been analyzed, so a failed run leaves it untouched.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    debug!(?config, "effective configuration");

    let rendered = if cli.dump_config {
        config.to_toml()?.into_bytes()
    } else {
        let reports = analyze_all(&cli.traces, cli.output.as_deref(), &config)?;
        let mut buf = Vec::new();
        render(&reports, config.output.format, &mut buf)?;
        buf
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn analyze_all(
    patterns: &[String],
    output: Option<&Path>,
    config: &Config,
) -> anyhow::Result<Vec<TraceReport>> {
    let mut traces = expand_traces(patterns)?;
    if let Some(output) = output.and_then(|path| path.canonicalize().ok()) {
        traces.retain(|trace| !is_report_file(trace, &output));
    }

    let mut reports = Vec::with_capacity(traces.len());
    for trace in traces {
        let span = tracing::info_span!("analyze", path = ?trace);
        let _enter = span.enter();

        let report = analyzer::analyze_file(&trace, config)
            .with_context(|| format!("failed to analyze {}", trace.display()))?;
        reports.push(TraceReport { trace, report });
    }
    Ok(reports)
}

fn is_report_file(trace: &Path, output: &Path) -> bool {
    let same = trace.canonicalize().is_ok_and(|trace| trace == output);
    if same {
        warn!(?trace, "trace pattern matches the report file; skipping it");
    }
    same
}
