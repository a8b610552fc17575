use crate::error::ConvertError;

/// Fenced code block type wrapping a whole block in triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the block opens and closes with a fence.
    ///
    /// The opening and closing fences may not overlap.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Text between the fences.
    ///
    /// One newline after the opening fence is dropped; everything else,
    /// including a trailing newline before the closing fence, is kept.
    ///
    /// # Errors
    /// [`ConvertError::InvalidCodeBlock`] if either fence is missing.
    pub fn inner(block: &str) -> Result<&str, ConvertError> {
        if !Self::is_fenced(block) {
            return Err(ConvertError::InvalidCodeBlock);
        }
        let body = &block[Self::FENCE.len()..block.len() - Self::FENCE.len()];
        Ok(body.strip_prefix('\n').unwrap_or(body))
    }
}
