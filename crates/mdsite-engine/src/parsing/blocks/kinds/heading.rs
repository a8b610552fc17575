/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest supported heading (`######`).
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` is a single-line heading.
    ///
    /// A heading is 1 to 6 `#` characters followed by a space and at least
    /// one more character.
    pub fn level(block: &str) -> Option<usize> {
        if block.contains('\n') {
            return None;
        }
        let level = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        let rest = block[level..].strip_prefix(' ')?;
        (!rest.is_empty()).then_some(level)
    }

    /// Heading text with the `#` run and the following space removed.
    pub fn content(block: &str, level: usize) -> &str {
        block.get(level + 1..).unwrap_or_default()
    }
}
