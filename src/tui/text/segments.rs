//! Message segmentation: split content into text and fenced code blocks.

/// Segment of a message: either plain text or a fenced code block.
#[derive(Debug, Clone)]
pub(crate) enum MessageSegment<'a> {
    Text(&'a str),
    CodeBlock { lang: &'a str, code: &'a str },
}

/// Find the end of a code block opened at the start of `rest`. Returns the
/// code slice and the remainder after the closing fence, or None when the
/// fence is unterminated.
fn close_fence(rest: &str) -> Option<(&str, &str)> {
    // Closing ``` is either on its own line or directly after the code.
    if let Some(pos) = rest.find("\n```") {
        return Some((&rest[..pos], &rest[pos + 4..]));
    }
    rest.find("```").map(|pos| (&rest[..pos], &rest[pos + 3..]))
}

/// Parse message content into text and code block segments.
/// Matches ```lang ... ``` or ``` ... ``` patterns.
pub(crate) fn split_segments(content: &str) -> Vec<MessageSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = content;
    while let Some(fence) = rest.find("```") {
        if fence > 0 {
            segments.push(MessageSegment::Text(&rest[..fence]));
        }
        rest = &rest[fence + 3..];
        let lang_end = rest.find('\n').unwrap_or(rest.len());
        let lang = rest[..lang_end].trim();
        rest = rest.get(lang_end + 1..).unwrap_or("");
        match close_fence(rest) {
            Some((code, after)) => {
                segments.push(MessageSegment::CodeBlock { lang, code });
                rest = after;
            }
            None => {
                segments.push(MessageSegment::CodeBlock { lang, code: rest });
                return segments;
            }
        }
    }
    if !rest.is_empty() {
        segments.push(MessageSegment::Text(rest));
    }
    segments
}
