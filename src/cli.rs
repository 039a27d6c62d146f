//! Command line arguments and the resolved analyzer configuration

use crate::choices::Report;
use crate::error::{AnalyzerError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Prints line and character statistics for a text file
#[derive(Debug, Clone, Parser)]
#[command(name = "text-analyzer", version, about)]
pub struct CliArgs {
    /// File to analyse; asked for interactively when omitted
    pub path: Option<PathBuf>,

    /// Reports to print (1: lines, 2: characters, 3: empty lines, 4: frequency); skips the menu
    #[arg(short, long = "report", value_name = "CODE", value_delimiter = ',')]
    pub report: Vec<String>,

    /// Only list the N most frequent characters
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "TEXT_ANALYZER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Settings for one analyzer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub path: Option<PathBuf>,
    /// Reports chosen up front; `None` means show the menu
    pub reports: Option<Vec<Report>>,
    pub top: Option<usize>,
}

impl AnalyzerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let reports = if args.report.is_empty() {
            None
        } else {
            let mut reports = args
                .report
                .iter()
                .map(|code| {
                    Report::from_code(code.trim())
                        .ok_or_else(|| AnalyzerError::UnknownReport(code.clone()))
                })
                .collect::<Result<Vec<_>>>()?;
            reports.sort();
            reports.dedup();
            Some(reports)
        };

        Ok(Self {
            path: args.path,
            reports,
            top: args.top,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("text-analyzer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::from_args(parse(&[])).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_reports_from_flags() {
        let config =
            AnalyzerConfig::from_args(parse(&["notes.txt", "-r", "3,1", "--report", "1"])).unwrap();
        assert_eq!(config.path, Some(PathBuf::from("notes.txt")));
        assert_eq!(
            config.reports,
            Some(vec![Report::LineCount, Report::EmptyLineCount])
        );
    }

    #[test]
    fn test_unknown_report_code() {
        let err = AnalyzerConfig::from_args(parse(&["-r", "7"])).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownReport(code) if code == "7"));
    }

    #[test]
    fn test_top() {
        let config = AnalyzerConfig::from_args(parse(&["--top", "5"])).unwrap();
        assert_eq!(config.top, Some(5));
    }
}
