//! Text utilities: markdown parsing and line wrapping for the chat display.

mod markdown;
mod segments;
mod wrap;

pub(crate) use markdown::render_markdown_line;
pub(crate) use segments::{MessageSegment, split_segments};
pub(crate) use wrap::wrap_message;

#[cfg(test)]
mod tests;
