use std::fmt;

use crate::error::ConvertError;

use super::{Attributes, RenderOptions};

/// A renderable HTML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

/// Raw text (no tag) or a self-contained element such as `<b>text</b>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

/// An element wrapping one or more child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

impl LeafNode {
    /// Untagged text, rendered verbatim.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Result<Self, ConvertError> {
        Self::with_attributes(tag, text, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        text: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, ConvertError> {
        Self::from_parts(Some(tag.into()), Some(text.into()), attributes)
    }

    /// Builds a leaf from optional parts, checking the leaf invariants.
    ///
    /// # Errors
    /// - [`ConvertError::MissingValue`] if `text` is `None`
    /// - [`ConvertError::MissingTag`] if `tag` is present but empty
    pub fn from_parts(
        tag: Option<String>,
        text: Option<String>,
        attributes: Attributes,
    ) -> Result<Self, ConvertError> {
        let text = text.ok_or(ConvertError::MissingValue)?;
        if tag.as_deref().is_some_and(str::is_empty) {
            return Err(ConvertError::MissingTag);
        }
        Ok(Self {
            tag,
            text,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&self.text);
            return;
        };
        open_tag(tag, &self.attributes, options, out);
        out.push_str(&self.text);
        close_tag(tag, out);
    }
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, ConvertError> {
        Self::with_attributes(tag, children, Attributes::new())
    }

    /// # Errors
    /// - [`ConvertError::EmptyChildren`] if `children` is empty (checked first)
    /// - [`ConvertError::MissingTag`] if `tag` is empty
    pub fn with_attributes(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Result<Self, ConvertError> {
        let tag = tag.into();
        if children.is_empty() {
            return Err(ConvertError::EmptyChildren { tag });
        }
        if tag.is_empty() {
            return Err(ConvertError::MissingTag);
        }
        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) {
        open_tag(&self.tag, &self.attributes, options, out);
        for child in &self.children {
            child.write_html(options, out);
        }
        close_tag(&self.tag, out);
    }
}

impl Node {
    /// Serializes the tree to HTML with default options.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        self.write_html(options, &mut out);
        out
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Child nodes; always empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => parent.children(),
        }
    }

    fn write_html(&self, options: &RenderOptions, out: &mut String) {
        match self {
            Node::Leaf(leaf) => leaf.write_html(options, out),
            Node::Parent(parent) => parent.write_html(options, out),
        }
    }
}

fn open_tag(tag: &str, attributes: &Attributes, options: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(options, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
