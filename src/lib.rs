//! # plib
//!
//! An immutable 2D integer [`Point`] with vector arithmetic, Euclidean
//! distance and a byte-stable JSON form, plus the pieces behind the
//! `text-analyzer` binary.

pub mod analysis;
pub mod app;
pub mod choices;
pub mod cli;
pub mod error;
pub mod logging;
pub mod utils;

pub use error::{AnalyzerError, Axis, ErrorKind, PointError};
pub use utils::geometry::Point;
