//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIMITER = "**"`
//! - **`Emphasis`**: `DELIMITER = "*"`
//! - **`CodeSpan`**: `` DELIMITER = "`" ``
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`
//!
//! The parser reads these constants; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

use std::ops::Range;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use image::Image;
pub use link::Link;

/// A bracketed construct found in plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte range of the whole construct in the searched text.
    pub range: Range<usize>,
    /// Alt text for images, link text for links.
    pub text: String,
    /// The URL between the parentheses.
    pub target: String,
}
