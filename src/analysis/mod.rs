//! Line and character statistics for a text file

pub use self::frequency::{char_label, CharFrequency};
pub use self::stats::TextStats;

pub(crate) mod frequency;
pub(crate) mod stats;
