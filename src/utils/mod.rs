pub mod text;

/// Map a digit key to a slide index ('1' selects the first slide)
///
/// Returns None for anything that is not '1'-'9'; range checking against
/// the deck length is the carousel's job, not the key mapping's.
pub fn digit_to_index(ch: char) -> Option<usize> {
    match ch {
        '1'..='9' => Some(ch as usize - '1' as usize),
        _ => None,
    }
}

/// Format a 1-based position indicator, e.g. "2/4"
pub fn format_position(index: usize, count: usize) -> String {
    format!("{}/{}", index + 1, count)
}
