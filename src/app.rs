//! The interactive analyzer flow

use crate::analysis::{char_label, TextStats};
use crate::choices::{parse_selection, Report};
use crate::cli::AnalyzerConfig;
use crate::error::Result;
use inquire::InquireError;
use std::io::{self, Write};
use std::path::PathBuf;

/// Outcome of an interactive prompt
enum Answer<T> {
    Given(T),
    Cancelled,
}

fn answer<T>(result: std::result::Result<T, InquireError>) -> Result<Answer<T>> {
    match result {
        Ok(value) => Ok(Answer::Given(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Answer::Cancelled)
        }
        Err(err) => Err(err.into()),
    }
}

pub struct AnalyzerApp {
    config: AnalyzerConfig,
}

impl AnalyzerApp {
    pub fn new(config: AnalyzerConfig) -> Self {
        AnalyzerApp { config }
    }

    /// Runs the analyzer against stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    fn select_file(&self) -> Result<Answer<PathBuf>> {
        if let Some(path) = &self.config.path {
            return Ok(Answer::Given(path.clone()));
        }

        let path = answer(inquire::prompt_text("Enter the file name:"))?;
        Ok(match path {
            Answer::Given(path) => Answer::Given(PathBuf::from(path.trim())),
            Answer::Cancelled => Answer::Cancelled,
        })
    }

    /// `Given(None)` means the user typed nothing at all
    fn select_reports(&self, out: &mut impl Write) -> Result<Answer<Option<Vec<Report>>>> {
        if let Some(reports) = &self.config.reports {
            return Ok(Answer::Given(Some(reports.clone())));
        }

        write_menu(out)?;
        out.flush()?;

        let line = answer(inquire::prompt_text("Your choice:"))?;
        Ok(match line {
            Answer::Given(line) => Answer::Given(parse_selection(&line)),
            Answer::Cancelled => Answer::Cancelled,
        })
    }

    fn execute(&self, out: &mut impl Write) -> Result<()> {
        let path = match self.select_file()? {
            Answer::Given(path) => path,
            Answer::Cancelled => {
                writeln!(out, "No file selected. Exiting...")?;
                return Ok(());
            }
        };

        let stats = TextStats::from_path(&path)?;

        let selection = match self.select_reports(out)? {
            Answer::Given(selection) => selection,
            Answer::Cancelled => {
                writeln!(out, "Nothing selected. Exiting...")?;
                return Ok(());
            }
        };

        tracing::info!(path = %path.display(), ?selection, "printing reports");
        write_reports(out, &stats, selection.as_deref(), self.config.top)?;
        Ok(())
    }
}

/// Prints the numbered report menu
pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "What should be printed? (enter numbers separated by spaces, e.g.: 1 3)"
    )?;
    for report in Report::ALL {
        writeln!(out, "  {report}")?;
    }
    Ok(())
}

/// Prints the selected reports in menu order
///
/// `None` means nothing was typed and prints `Nothing selected.`; an empty
/// list (only unknown codes) prints just the header.
pub fn write_reports(
    out: &mut impl Write,
    stats: &TextStats,
    selection: Option<&[Report]>,
    top: Option<usize>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Analysis results ---")?;

    let Some(reports) = selection else {
        writeln!(out, "Nothing selected.")?;
        return Ok(());
    };

    for report in Report::ALL.iter().filter(|r| reports.contains(r)) {
        match report {
            Report::LineCount => writeln!(out, "Lines: {}", stats.total_lines)?,
            Report::CharCount => writeln!(out, "Characters: {}", stats.total_chars)?,
            Report::EmptyLineCount => writeln!(out, "Empty lines: {}", stats.empty_lines)?,
            Report::CharFrequency => {
                writeln!(out, "Character frequency:")?;
                let rows = match top {
                    Some(n) => stats.frequency.top(n),
                    None => stats.frequency.entries(),
                };
                for &(c, count) in rows {
                    writeln!(out, "  {}: {}", char_label(c), count)?;
                }
            }
        }
    }

    Ok(())
}
