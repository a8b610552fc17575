use crate::error::ConvertError;

use super::{
    kinds::{CodeSpan, Emphasis, Image, InlineMatch, Link, Strong},
    types::{SpanKind, TextSpan},
};

/// Delimiter passes in the order they run.
///
/// Bold must come before italic: `*` is a prefix of `**`.
pub const DELIMITER_PASSES: [(&str, SpanKind); 3] = [
    (Strong::DELIMITER, SpanKind::Bold),
    (Emphasis::DELIMITER, SpanKind::Italic),
    (CodeSpan::DELIMITER, SpanKind::Code),
];

/// Tokenizes `text` into typed spans.
///
/// Runs the delimiter passes, then image extraction, then link extraction.
/// Empty input yields no spans.
///
/// # Errors
/// [`ConvertError::UnbalancedDelimiter`] if a delimiter is left unclosed.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let mut spans = vec![TextSpan::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_spans_delimiter(spans, delimiter, kind)?;
    }
    spans = split_spans_image(spans);
    spans = split_spans_link(spans);
    Ok(spans)
}

/// Splits every plain span on `delimiter`.
///
/// Segments at odd positions become `kind`; even positions stay plain.
/// Empty segments are dropped. Spans that are already typed pass through.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        // An even count means one delimiter has no partner
        if segments.len() % 2 == 0 {
            return Err(ConvertError::UnbalancedDelimiter { delimiter });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(segment, segment_kind));
        }
    }
    Ok(out)
}

/// Pulls `![alt](url)` out of plain spans as image spans.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, SpanKind::Image, Image::find_all)
}

/// Pulls `[text](url)` out of plain spans as link spans.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_matching(spans, SpanKind::Link, Link::find_all)
}

fn split_spans_matching(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    find_all: fn(&str) -> Vec<InlineMatch>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut rest = 0;
        for found in find_all(&span.text) {
            if found.range.start > rest {
                out.push(TextSpan::plain(&span.text[rest..found.range.start]));
            }
            out.push(TextSpan::with_target(found.text, kind, found.target));
            rest = found.range.end;
        }
        if rest < span.text.len() {
            out.push(TextSpan::plain(&span.text[rest..]));
        }
    }
    out
}
