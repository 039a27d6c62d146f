use crate::analysis::frequency::CharFrequency;
use crate::error::{AnalyzerError, Result};
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Statistics for a single text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of lines; a trailing newline does not start another one
    pub total_lines: usize,
    /// Number of characters, counting each newline once
    pub total_chars: usize,
    /// Lines that are empty or hold only whitespace
    pub empty_lines: usize,
    pub frequency: CharFrequency,
}

impl TextStats {
    /// Analyses `text`, reading `\r\n` and lone `\r` as `\n`
    ///
    /// # Example
    /// ```
    /// use plib::analysis::TextStats;
    ///
    /// let stats = TextStats::from_text("a\n\nb \n   \n");
    /// assert_eq!(stats.total_lines, 4);
    /// assert_eq!(stats.empty_lines, 2);
    /// assert_eq!(stats.total_chars, 10);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let content = normalize_newlines(text);
        let lines: Vec<&str> = content.split_inclusive('\n').collect();

        let stats = Self {
            total_lines: lines.len(),
            total_chars: content.chars().count(),
            empty_lines: lines.iter().filter(|line| line.trim().is_empty()).count(),
            frequency: CharFrequency::from_lines(&lines),
        };

        tracing::debug!(
            lines = stats.total_lines,
            chars = stats.total_chars,
            empty = stats.empty_lines,
            distinct = stats.frequency.len(),
            "analysed text"
        );

        stats
    }

    /// Reads `path` as UTF-8 and analyses its contents
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        Ok(Self::from_text(&text))
    }
}

fn read_text(path: &Path) -> Result<String> {
    let io_err = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => AnalyzerError::FileNotFound(path.to_path_buf()),
        _ => AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if !metadata.is_file() {
        return Err(AnalyzerError::NotAFile(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), bytes = metadata.len(), "reading file");
    fs::read_to_string(path).map_err(io_err)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
