//! Turning detected text into an ingredient list

use super::TextBlock;

/// Lines of this many characters or fewer are dropped as noise
const MIN_LINE_CHARS: usize = 2;

/// Extract ingredient lines from the text detection result.
///
/// Only the first block is considered. The detection service puts the whole
/// text of the image there, one line per row. Its first line is discarded
/// and lines of `MIN_LINE_CHARS` characters or fewer are dropped.
///
/// Returns `None` when nothing was detected.
pub fn extract_ingredients(blocks: &[TextBlock]) -> Option<Vec<String>> {
    let text = blocks.first().map(|b| b.description.as_str())?;
    if text.is_empty() {
        return None;
    }

    Some(
        text.split('\n')
            .skip(1)
            .filter(|line| line.chars().count() > MIN_LINE_CHARS)
            .map(str::to_string)
            .collect(),
    )
}
