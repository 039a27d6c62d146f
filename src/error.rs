//! Error types for `plib`
//!
//! [`PointError`] covers the point value type, [`AnalyzerError`] covers the
//! text analyzer. Both are plain `thiserror` enums; the binary wraps them in
//! `anyhow` at the top level.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The coarse category of a [`PointError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A coordinate was not an integer
    Type,
    /// A serialized point could not be decoded
    Format,
    /// A point was compared against a value of another type
    Comparison,
}

impl ErrorKind {
    /// Stable label for the category
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::Type => "type_error",
            ErrorKind::Format => "format_error",
            ErrorKind::Comparison => "comparison_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Which coordinate an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The field name used for this axis in the JSON form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum PointError {
    #[error("{axis} should be an integer type, got {found}")]
    NotAnInteger { axis: Axis, found: String },

    #[error("malformed point: {0}")]
    Format(String),

    #[error("missing field `{axis}`")]
    MissingField { axis: Axis },

    #[error("cannot compare Point with `{other}`")]
    Comparison { other: &'static str },
}

impl PointError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PointError::NotAnInteger { .. } => ErrorKind::Type,
            PointError::Format(_) | PointError::MissingField { .. } => ErrorKind::Format,
            PointError::Comparison { .. } => ErrorKind::Comparison,
        }
    }
}

impl From<serde_json::Error> for PointError {
    fn from(err: serde_json::Error) -> Self {
        PointError::Format(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown report code '{0}' (expected 1, 2, 3 or 4)")]
    UnknownReport(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Prompt(#[from] inquire::InquireError),
}

pub type Result<T, E = AnalyzerError> = std::result::Result<T, E>;
