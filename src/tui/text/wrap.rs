//! Text wrapping for display.

/// Split a message into display lines respecting its own newlines, then
/// wrap each line to `width` columns. Uses textwrap for correct UTF-8
/// handling.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        if width == 0 {
            out.push(line.to_string());
            continue;
        }
        for chunk in textwrap::wrap(line, width) {
            out.push(chunk.into_owned());
        }
    }
    out
}
