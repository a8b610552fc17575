pub mod error;
pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use html::{Attributes, LeafNode, Node, ParentNode, RenderOptions};
pub use page::{PageError, Template, render_page};
pub use parsing::inline::{SpanKind, TextSpan};
pub use parsing::{extract_title, markdown_to_html_node, markdown_to_html_node as convert};
