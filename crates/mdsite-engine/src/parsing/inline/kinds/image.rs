use std::sync::LazyLock;

use regex::Regex;

use super::InlineMatch;

static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
});

/// Image syntax `![alt](url)`.
///
/// The alt text may not contain brackets and the url may not contain
/// parentheses.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    /// Finds every image in `text`, left to right.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        IMAGE_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(InlineMatch {
                    range: whole.range(),
                    text: caps[1].to_string(),
                    target: caps[2].to_string(),
                })
            })
            .collect()
    }
}
