use std::sync::LazyLock;

use regex::Regex;

use super::{Image, InlineMatch};

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"));

/// Link syntax `[text](url)`, not preceded by the image marker.
pub struct Link;

impl Link {
    /// Finds every link in `text`, left to right.
    ///
    /// A match directly after `!` is image syntax and is skipped.
    pub fn find_all(text: &str) -> Vec<InlineMatch> {
        LINK_REGEX
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if text[..whole.start()].ends_with(Image::MARKER) {
                    return None;
                }
                Some(InlineMatch {
                    range: whole.range(),
                    text: caps[1].to_string(),
                    target: caps[2].to_string(),
                })
            })
            .collect()
    }
}
