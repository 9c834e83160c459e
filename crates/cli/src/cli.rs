use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::OutputFormat;
use std::path::{Path, PathBuf};

/// delayload-rs: find images that can be delay loaded
///
/// Reads decoded ETW trace captures and reports every process that loads an
/// image as a static dependency but never executes its code outside the image
/// loader. Such images are candidates for delay loading.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Trace captures to analyze.
    ///
    /// Glob patterns are expanded; every pattern must match at least one file.
    #[arg(value_name = "TRACE", required_unless_present = "dump_config")]
    pub traces: Vec<String>,

    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Report format. Overrides the configuration file.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn traces_are_required_unless_dumping_config() {
        assert!(Cli::try_parse_from(["delayload-rs"]).is_err());
        let cli = Cli::try_parse_from(["delayload-rs", "--dump-config"]).unwrap();
        assert!(cli.dump_config);
        assert!(cli.traces.is_empty());
    }

    #[test]
    fn parses_format_and_output() {
        let cli = Cli::try_parse_from([
            "delayload-rs",
            "-f",
            "json",
            "-o",
            "out.json",
            "a.json",
            "b*.json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(FormatArg::Json));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.traces, vec!["a.json", "b*.json"]);
    }

    #[test]
    fn rejects_missing_conffile() {
        let parsed =
            Cli::try_parse_from(["delayload-rs", "-c", "/definitely/not/here.toml", "a.json"]);
        assert!(parsed.is_err());
    }
}
