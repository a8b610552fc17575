use thiserror::Error;

/// Failure while turning a markdown document into a node tree.
///
/// Every variant aborts the whole conversion; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid markdown: unmatched delimiter `{delimiter}`")]
    UnbalancedDelimiter { delimiter: &'static str },

    #[error("All leaf nodes must have a value")]
    MissingValue,

    #[error("All element nodes must have a tag")]
    MissingTag,

    #[error("Parent node <{tag}> must have at least one child")]
    EmptyChildren { tag: String },

    #[error("Unknown text span kind: {0}")]
    UnknownSpanKind(String),

    #[error("Invalid quote block: line {line:?} does not start with `>`")]
    InvalidQuoteLine { line: String },

    #[error("Invalid code block: fence markers do not match")]
    InvalidCodeBlock,

    #[error("Unrecognized block kind: {0}")]
    UnrecognizedBlockKind(String),

    #[error("No top-level `# ` heading found")]
    NoTitleFound,
}
