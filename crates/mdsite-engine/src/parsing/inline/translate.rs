use crate::{
    error::ConvertError,
    html::{Attributes, LeafNode, Node},
};

use super::{
    parser::text_to_spans,
    types::{SpanKind, TextSpan},
};

/// Maps a single span to its leaf node.
///
/// # Errors
/// [`ConvertError::MissingValue`] for a link or image span without a target.
pub fn span_to_node(span: &TextSpan) -> Result<Node, ConvertError> {
    let text = span.text.as_str();
    let leaf = match span.kind {
        SpanKind::Plain => LeafNode::raw(text),
        SpanKind::Bold => LeafNode::new("b", text)?,
        SpanKind::Italic => LeafNode::new("i", text)?,
        SpanKind::Code => LeafNode::new("code", text)?,
        SpanKind::Link => {
            LeafNode::with_attributes("a", text, Attributes::from([("href", target(span)?)]))?
        }
        SpanKind::Image => LeafNode::with_attributes(
            "img",
            "",
            Attributes::from([("src", target(span)?), ("alt", text)]),
        )?,
    };
    Ok(leaf.into())
}

/// Tokenizes `text` and translates every span into a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>, ConvertError> {
    text_to_spans(text)?.iter().map(span_to_node).collect()
}

fn target(span: &TextSpan) -> Result<&str, ConvertError> {
    span.target.as_deref().ok_or(ConvertError::MissingValue)
}
