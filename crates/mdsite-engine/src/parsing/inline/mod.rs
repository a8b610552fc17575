//! # Inline Parsing
//!
//! Splits the text of a block into typed spans and maps each span to a leaf
//! node.
//!
//! ## Pipeline
//!
//! 1. **Delimiter passes**: `**` (bold), then `*` (italic), then `` ` `` (code).
//!    Each pass splits only spans that are still plain. Bold runs before
//!    italic because `*` is a prefix of `**`.
//! 2. **Image extraction**: `![alt](url)`
//! 3. **Link extraction**: `[text](url)`. Images go first since an image is a
//!    link with a leading `!`.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types owning their delimiters and patterns
//! - **`parser`**: `text_to_spans()` and the individual passes
//! - **`translate`**: `span_to_node()` / `text_to_children()`

pub mod kinds;
pub mod parser;
pub mod translate;
pub mod types;

pub use parser::text_to_spans;
pub use translate::{span_to_node, text_to_children};
pub use types::{SpanKind, TextSpan};
