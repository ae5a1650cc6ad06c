//! Inline Markdown rendering: **bold**, `code`, headings, lists, tables, links.
//!
//! Line-oriented and heuristic; enough for the consultant's replies, not a
//! full parser.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::constants::ACCENT;

/// Render one display line of Markdown into styled spans.
pub(crate) fn render_markdown_line(s: &str) -> Vec<Span<'static>> {
    let trimmed = s.trim_start();

    // Heading: one or more leading #
    if trimmed.starts_with('#') {
        let content = trimmed.trim_start_matches('#').trim_start();
        if content.is_empty() {
            return Vec::new();
        }
        return vec![Span::styled(
            content.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];
    }

    // Bullet list: - or * at line start
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        let mut spans = vec![Span::styled("• ", Style::default().fg(ACCENT))];
        spans.extend(render_inline(rest));
        return spans;
    }

    // Table row: | cell1 | cell2 |
    if trimmed.starts_with('|') {
        let cells: Vec<&str> = trimmed
            .split('|')
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if !cells.is_empty() {
            let mut spans = Vec::new();
            for (i, cell) in cells.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(ACCENT)));
                }
                spans.extend(render_inline(cell));
            }
            return spans;
        }
    }

    // Numbered list: "1. " or "1) " at line start
    if let Some((num, rest)) = numbered_prefix(trimmed) {
        let mut spans = vec![Span::styled(
            format!("{} ", num),
            Style::default().fg(ACCENT),
        )];
        spans.extend(render_inline(rest));
        return spans;
    }

    render_inline(s)
}

/// Parse "N. " or "N) " at start. Returns (number, rest) or None.
fn numbered_prefix(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &s[digits..];
    if rest.starts_with(". ") || rest.starts_with(") ") {
        Some((&s[..digits], &rest[2..]))
    } else {
        None
    }
}

/// The inline markers handled inside a line.
#[derive(Clone, Copy)]
enum Marker {
    Bold,
    Code,
    Link,
}

/// Earliest inline marker in `s`, if any. Bold wins ties by scan order.
fn next_marker(s: &str) -> Option<(usize, Marker)> {
    let mut best: Option<(usize, Marker)> = None;
    for (pat, marker) in [("**", Marker::Bold), ("`", Marker::Code), ("[", Marker::Link)] {
        if let Some(pos) = s.find(pat)
            && best.is_none_or(|(b, _)| pos < b)
        {
            best = Some((pos, marker));
        }
    }
    best
}

/// Render **bold**, `code`, and [text](url) within a line.
fn render_inline(s: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let Some((pos, marker)) = next_marker(rest) else {
            spans.push(Span::raw(rest.to_string()));
            break;
        };
        if pos > 0 {
            spans.push(Span::raw(rest[..pos].to_string()));
        }
        rest = &rest[pos..];
        match marker {
            Marker::Bold => {
                rest = &rest[2..];
                match rest.find("**") {
                    Some(end) => {
                        spans.push(Span::styled(
                            rest[..end].to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                        rest = &rest[end + 2..];
                    }
                    None => spans.push(Span::raw("**".to_string())),
                }
            }
            Marker::Code => {
                rest = &rest[1..];
                match rest.find('`') {
                    Some(end) => {
                        spans.push(Span::styled(
                            rest[..end].to_string(),
                            Style::default().fg(ACCENT),
                        ));
                        rest = &rest[end + 1..];
                    }
                    None => spans.push(Span::raw("`".to_string())),
                }
            }
            Marker::Link => {
                rest = &rest[1..];
                let Some(end_br) = rest.find(']') else {
                    spans.push(Span::raw("[".to_string()));
                    continue;
                };
                let text = &rest[..end_br];
                rest = &rest[end_br + 1..];
                if let Some(inner) = rest.strip_prefix('(')
                    && let Some(end_paren) = inner.find(')')
                {
                    rest = &inner[end_paren + 1..];
                    spans.push(Span::styled(
                        text.to_string(),
                        Style::default()
                            .fg(ACCENT)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                } else {
                    spans.push(Span::raw(format!("[{}]", text)));
                }
            }
        }
    }
    spans
}
