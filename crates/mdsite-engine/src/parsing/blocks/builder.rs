use crate::{
    error::ConvertError,
    html::{Node, ParentNode},
    parsing::inline::text_to_children,
};

use super::{
    classify::{BlockClassifier, BlockKind},
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
};

/// Tag of the element wrapping every block of a document.
pub const ROOT_TAG: &str = "div";

/// Collects block nodes in document order and wraps them in the root `div`.
pub struct BlockBuilder {
    classifier: BlockClassifier,
    blocks: Vec<Node>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: BlockClassifier,
            blocks: Vec::new(),
        }
    }

    /// Classifies `block` and appends the node built for it.
    pub fn push(&mut self, block: &str) -> Result<(), ConvertError> {
        let kind = self.classifier.classify(block);
        log::debug!("block {} classified as {kind:?}", self.blocks.len());
        self.blocks.push(build_block(kind, block)?);
        Ok(())
    }

    /// # Errors
    /// [`ConvertError::EmptyChildren`] if no block was pushed.
    pub fn finish(self) -> Result<Node, ConvertError> {
        parent(ROOT_TAG, self.blocks)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the parent node for one classified block.
pub fn build_block(kind: BlockKind, block: &str) -> Result<Node, ConvertError> {
    match kind {
        BlockKind::Heading { level } => {
            let children = text_to_children(Heading::content(block, level))?;
            parent(format!("h{level}"), children)
        }
        BlockKind::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            parent("p", text_to_children(&text)?)
        }
        BlockKind::CodeFence => {
            let code = parent("code", text_to_children(CodeFence::inner(block)?)?)?;
            parent("pre", vec![code])
        }
        BlockKind::Quote => {
            let lines = block
                .lines()
                .map(BlockQuote::strip_prefix)
                .collect::<Result<Vec<_>, _>>()?;
            parent("blockquote", text_to_children(&lines.join(" "))?)
        }
        BlockKind::UnorderedList => list("ul", block, UnorderedList::strip_marker),
        BlockKind::OrderedList => list("ol", block, OrderedList::strip_marker),
    }
}

fn list(tag: &str, block: &str, strip_marker: fn(&str) -> &str) -> Result<Node, ConvertError> {
    let items = block
        .lines()
        .map(|line| parent("li", text_to_children(strip_marker(line))?))
        .collect::<Result<Vec<_>, _>>()?;
    parent(tag, items)
}

fn parent(tag: impl Into<String>, children: Vec<Node>) -> Result<Node, ConvertError> {
    Ok(ParentNode::new(tag, children)?.into())
}
