pub mod blocks;
pub mod inline;

use crate::{error::ConvertError, html::Node};

use blocks::{BlockBuilder, markdown_to_blocks};

/// Prefix of the line that names a document.
pub const TITLE_PREFIX: &str = "# ";

/// Converts a markdown document into a node tree rooted at a `div`.
///
/// # Errors
/// Any block that fails to build aborts the whole conversion. A document
/// with no blocks fails with [`ConvertError::EmptyChildren`].
pub fn markdown_to_html_node(markdown: &str) -> Result<Node, ConvertError> {
    let mut builder = BlockBuilder::new();
    for block in markdown_to_blocks(markdown) {
        builder.push(&block)?;
    }
    builder.finish()
}

/// Returns the text of the first `# ` heading line, trimmed.
///
/// Lines are trimmed before matching, so an indented heading still counts.
///
/// # Errors
/// [`ConvertError::NoTitleFound`] if no line starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::NoTitleFound)
}
