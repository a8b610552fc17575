/// Bold text: `**bold**`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

/// Italic text: `*italic*`.
///
/// Shares its character with [`Strong`], so strong spans must be split out
/// first.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "*";
}
