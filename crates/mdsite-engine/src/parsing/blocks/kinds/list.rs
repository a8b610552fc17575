use std::sync::LazyLock;

use regex::Regex;

static ORDERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\. (.+)$").expect("Invalid ordered list regex"));

/// Bulleted list block: every line is `* item` or `- item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [char; 2] = ['*', '-'];

    /// Item text of a bullet line, or `None` if the line is not an item.
    pub fn item(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKERS)?.strip_prefix(' ')?;
        (!rest.is_empty()).then_some(rest)
    }

    pub fn is_list(block: &str) -> bool {
        block.lines().all(|line| Self::item(line).is_some())
    }

    /// Drops the two-character `* ` / `- ` marker.
    pub fn strip_marker(line: &str) -> &str {
        line.get(2..).unwrap_or_default()
    }
}

/// Numbered list block: lines `1. item`, `2. item`, ... with no gaps.
pub struct OrderedList;

impl OrderedList {
    /// Number and item text of a numbered line.
    pub fn item(line: &str) -> Option<(usize, &str)> {
        let caps = ORDERED_ITEM_REGEX.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        Some((number, caps.get(2)?.as_str()))
    }

    /// Whether every line is a numbered item and the numbers run 1, 2, 3, ...
    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| Self::item(line).is_some_and(|(number, _)| number == i + 1))
    }

    /// Drops the `N. ` marker: the digits plus two characters.
    pub fn strip_marker(line: &str) -> &str {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        line.get(digits + 2..).unwrap_or_default()
    }
}
