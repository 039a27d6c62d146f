use clap::Parser;
use plib::app::AnalyzerApp;
use plib::cli::{AnalyzerConfig, CliArgs};
use plib::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    if let Err(err) = init_logging(&cli.log_level) {
        eprintln!("Warning: {err:#}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "analysis failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CliArgs) -> anyhow::Result<()> {
    let config = AnalyzerConfig::from_args(cli)?;
    AnalyzerApp::new(config).run()?;
    Ok(())
}
