use indexmap::IndexMap;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;

/// Character counts ordered from most to least frequent
///
/// Characters with the same count keep the order in which they first appear
/// in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharFrequency {
    entries: Vec<(char, usize)>,
}

impl CharFrequency {
    /// Counts every character across `lines`
    ///
    /// Lines are counted in parallel and the partial tables are merged left
    /// to right, so first-occurrence order survives the reduction.
    pub fn from_lines(lines: &[&str]) -> Self {
        let pb = progress_bar(lines.len());

        let counts = lines
            .par_iter()
            .progress_with(pb.clone())
            .map(|line| count_chars(line))
            .reduce(IndexMap::new, merge_counts);

        pb.finish_and_clear();

        let mut entries: Vec<(char, usize)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    pub fn entries(&self) -> &[(char, usize)] {
        &self.entries
    }

    /// The `n` most frequent characters
    pub fn top(&self, n: usize) -> &[(char, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, c: char) -> Option<usize> {
        self.entries
            .iter()
            .find_map(|&(ch, count)| (ch == c).then_some(count))
    }

    /// Number of distinct characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Quoted label for a character in the frequency table
///
/// Newlines and tabs are shown escaped so every row stays on one line.
pub fn char_label(c: char) -> String {
    match c {
        '\n' => r"'\n'".to_string(),
        '\t' => r"'\t'".to_string(),
        c => format!("'{c}'"),
    }
}

fn count_chars(line: &str) -> IndexMap<char, usize> {
    let mut counts = IndexMap::new();
    for c in line.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn merge_counts(
    mut left: IndexMap<char, usize>,
    right: IndexMap<char, usize>,
) -> IndexMap<char, usize> {
    for (c, count) in right {
        *left.entry(c).or_insert(0) += count;
    }
    left
}

fn progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{wide_bar} {pos}/{len} lines ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>=");

    let pb = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    pb.set_style(style);
    pb
}
