use crate::error::ConvertError;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether every line of the block starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the run of `>` prefixes from a line and trims the rest.
    ///
    /// `> text`, `>text` and `>> text` all give `text`.
    ///
    /// # Errors
    /// [`ConvertError::InvalidQuoteLine`] if the line has no `>` prefix.
    pub fn strip_prefix(line: &str) -> Result<&str, ConvertError> {
        if !line.starts_with(Self::PREFIX) {
            return Err(ConvertError::InvalidQuoteLine {
                line: line.to_string(),
            });
        }
        Ok(line.trim_start_matches(Self::PREFIX).trim())
    }
}
