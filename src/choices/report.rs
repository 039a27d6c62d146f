use crate::choice;
use std::collections::BTreeSet;

choice!(Report,
    LineCount => "1", "Line count",
    CharCount => "2", "Character count",
    EmptyLineCount => "3", "Empty line count",
    CharFrequency => "4", "Character frequency"
);

/// Turns a line such as `"1 3"` into the reports it names
///
/// Returns `None` when the line holds no tokens at all. Otherwise unknown
/// tokens and repeats are dropped, which may leave the list empty, and the
/// result is in menu order no matter how the codes were typed.
pub fn parse_selection(input: &str) -> Option<Vec<Report>> {
    let mut tokens = input.split_whitespace().peekable();
    tokens.peek()?;

    let mut picked = BTreeSet::new();

    for token in tokens {
        match Report::from_code(token) {
            Some(report) => {
                picked.insert(report);
            }
            None => tracing::warn!(token, "ignoring unknown report code"),
        }
    }

    Some(picked.into_iter().collect())
}
