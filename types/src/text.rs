//! Small pure text helpers.

/// Split free-form input into phrases, one per line.
///
/// - Surrounding whitespace of every line is trimmed.
/// - Blank lines (including runs of them) separate nothing and are dropped.
/// - Whitespace inside a phrase is preserved.
#[must_use]
pub fn parse_phrase_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
