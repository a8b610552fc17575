use std::{fmt, str::FromStr};

use crate::error::ConvertError;

use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `# text` through `###### text`.
    Heading { level: usize },
    /// Default when no other rule matches.
    Paragraph,
    /// A block wrapped in triple backticks.
    CodeFence,
    /// Every line starts with `>`.
    Quote,
    /// Every line is `* item` or `- item`.
    UnorderedList,
    /// Lines `1. item`, `2. item`, ... numbered without gaps.
    OrderedList,
}

impl BlockKind {
    /// The HTML tag of the outermost element built for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading { level: 1 } => "h1",
            BlockKind::Heading { level: 2 } => "h2",
            BlockKind::Heading { level: 3 } => "h3",
            BlockKind::Heading { level: 4 } => "h4",
            BlockKind::Heading { level: 5 } => "h5",
            BlockKind::Heading { .. } => "h6",
            BlockKind::Paragraph => "p",
            BlockKind::CodeFence => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BlockKind {
    type Err = ConvertError;

    /// Parses the outer HTML tag of a block kind (`h2`, `blockquote`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "p" => BlockKind::Paragraph,
            "pre" => BlockKind::CodeFence,
            "blockquote" => BlockKind::Quote,
            "ul" => BlockKind::UnorderedList,
            "ol" => BlockKind::OrderedList,
            _ => {
                let level = s
                    .strip_prefix('h')
                    .and_then(|n| n.parse::<usize>().ok())
                    .filter(|level| (1..=Heading::MAX_LEVEL).contains(level))
                    .ok_or_else(|| ConvertError::UnrecognizedBlockKind(s.to_string()))?;
                BlockKind::Heading { level }
            }
        };
        Ok(kind)
    }
}

/// Classifies whole blocks for the construction phase.
pub struct BlockClassifier;

impl BlockClassifier {
    /// Classifies a trimmed block. The first matching rule wins:
    /// heading, code fence, quote, unordered list, ordered list, paragraph.
    ///
    /// A numbered list that skips or repeats a number is a paragraph.
    pub fn classify(&self, block: &str) -> BlockKind {
        if let Some(level) = Heading::level(block) {
            BlockKind::Heading { level }
        } else if CodeFence::is_fenced(block) {
            BlockKind::CodeFence
        } else if BlockQuote::is_quote(block) {
            BlockKind::Quote
        } else if UnorderedList::is_list(block) {
            BlockKind::UnorderedList
        } else if OrderedList::is_list(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
