//! Line cleanup ahead of host-line classification.

pub const COMMENT_MARKER: char = '#';

/// Returns the leading run of blank or comment lines as the exact source bytes.
pub fn capture_header(raw: &[u8]) -> Vec<Vec<u8>> {
    raw.split(|&b| b == b'\n')
        .take_while(|line| {
            let trimmed = line.trim_ascii();
            trimmed.is_empty() || trimmed.starts_with(&[COMMENT_MARKER as u8])
        })
        .map(<[u8]>::to_vec)
        .collect()
}

/// Drops any trailing comment, collapses whitespace runs and lowercases.
/// Returns `None` when nothing is left.
pub fn clean_line(line: &str) -> Option<String> {
    let content = match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    };

    let cleaned = content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Splits raw text into lines and cleans each one, header lines included.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.split('\n').filter_map(clean_line).collect()
}
