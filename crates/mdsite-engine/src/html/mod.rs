//! # HTML Node Model
//!
//! A small tree of renderable HTML elements produced by the block parser.
//!
//! ## Types
//!
//! - **`Node`**: either a `LeafNode` (raw text or a self-contained element)
//!   or a `ParentNode` (tag plus one or more children)
//! - **`Attributes`**: ordered key/value pairs, rendered in insertion order
//! - **`RenderOptions`**: serialization switches (attribute escaping)
//!
//! ## Key Invariants
//!
//! - Leaf text is always present; it may be empty (images)
//! - Parent tags are non-empty and parents own at least one child
//! - Both are checked when a node is built, so rendering cannot fail

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{LeafNode, Node, ParentNode};

/// Switches that affect how a node tree is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape attribute values (`"`, `&`) before writing them.
    ///
    /// Off by default: values are written verbatim, so an `href` containing
    /// `"` produces malformed HTML.
    pub escape_attributes: bool,
}

impl RenderOptions {
    pub fn strict() -> Self {
        Self {
            escape_attributes: true,
        }
    }
}
