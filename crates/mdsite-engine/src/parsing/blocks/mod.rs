//! # Block Parsing
//!
//! Three-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): The document is cut on blank lines into
//!    trimmed, non-empty blocks
//!
//! 2. **Classification** (`classify`): `BlockClassifier` assigns each block a
//!    `BlockKind` by inspecting its text; the first matching rule wins
//!
//! 3. **Construction** (`builder`): `BlockBuilder` turns each classified block
//!    into a parent node, running the inline pipeline on its text, and wraps
//!    the result in a root `div`
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `BlockClassifier` and `BlockKind`
//! - **`builder`**: `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Block order follows document order
//! - Classification never fails; anything unrecognised is a paragraph
//! - Code fence content still goes through inline parsing

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;

pub use builder::BlockBuilder;
pub use classify::{BlockClassifier, BlockKind};
pub use split::markdown_to_blocks;
