//! Conversation pane: bordered message blocks, code blocks, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::super::app::{App, ChatMessage};
use super::super::constants::{ACCENT, ACCENT_SECONDARY, PRIMARY};
use super::super::text::{MessageSegment, render_markdown_line, split_segments, wrap_message};

/// Repeat a character to fill width.
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Parameters for rendering one message block.
struct MessageBlockParams<'a> {
    label: &'a str,
    content: &'a str,
    content_width: usize,
    wrap_width: usize,
    is_error: bool,
    is_client: bool,
}

/// Add a Client or Hayek message block with borders, code blocks, and a
/// trailing separator.
fn add_message_block(lines: &mut Vec<Line<'static>>, p: MessageBlockParams<'_>) {
    let border_color = if p.is_client { PRIMARY } else { ACCENT };
    let border_style = Style::default().fg(border_color);
    let code_inner_width = p.content_width.saturating_sub(2);

    // Top border: "┌─ Label ───...──┐"
    let top_label = format!("┌─ {} ", p.label);
    let top_trail_len = p.wrap_width.saturating_sub(top_label.chars().count() + 1);
    let top_line = format!("{}{}┐", top_label, repeat_char('─', top_trail_len));
    lines.push(Line::from(Span::styled(top_line, border_style)));

    for segment in split_segments(p.content) {
        match segment {
            MessageSegment::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                for chunk in wrap_message(trimmed, p.content_width) {
                    let mut spans = vec![Span::styled("│ ", border_style), Span::raw("  ")];
                    if p.is_error {
                        spans.push(Span::styled(chunk, Style::default().fg(Color::Red)));
                    } else {
                        spans.extend(render_markdown_line(&chunk));
                    }
                    lines.push(Line::from(spans));
                }
            }
            MessageSegment::CodeBlock { lang, code } => {
                let lang_label = if lang.is_empty() { "template" } else { lang };
                let code_header = format!("┌─ {} ", lang_label);
                let code_trail_len =
                    code_inner_width.saturating_sub(code_header.chars().count() + 1);
                let code_header_line =
                    format!("{}{}┐", code_header, repeat_char('─', code_trail_len));
                lines.push(Line::from(vec![
                    Span::styled("│ ", border_style),
                    Span::styled(code_header_line, Style::default().fg(ACCENT_SECONDARY)),
                ]));
                for code_line in code.split('\n') {
                    for chunk in wrap_message(code_line, code_inner_width) {
                        lines.push(Line::from(vec![
                            Span::styled("│ ", border_style),
                            Span::styled("│ ", Style::default().fg(ACCENT_SECONDARY)),
                            Span::styled(chunk, Style::default().fg(ACCENT_SECONDARY)),
                        ]));
                    }
                }
                let code_footer =
                    format!("└{}┘", repeat_char('─', code_inner_width.saturating_sub(2)));
                lines.push(Line::from(vec![
                    Span::styled("│ ", border_style),
                    Span::styled(code_footer, Style::default().fg(ACCENT_SECONDARY)),
                ]));
            }
        }
    }

    // Bottom border and separator
    let bottom_line = format!("└{}┘", repeat_char('─', p.wrap_width.saturating_sub(2)));
    lines.push(Line::from(Span::styled(bottom_line, border_style)));
    lines.push(Line::from(Span::styled(
        repeat_char('─', p.wrap_width),
        Style::default().fg(Color::DarkGray),
    )));
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;
    let content_width = wrap_width.saturating_sub(5);

    let mut lines: Vec<Line<'static>> = Vec::new();

    for msg in &app.messages {
        match msg {
            ChatMessage::Client(s) => {
                add_message_block(
                    &mut lines,
                    MessageBlockParams {
                        label: "Client",
                        content: s,
                        content_width,
                        wrap_width,
                        is_error: false,
                        is_client: true,
                    },
                );
            }
            ChatMessage::Consultant(s) => {
                let is_error = s.starts_with("❌");
                add_message_block(
                    &mut lines,
                    MessageBlockParams {
                        label: "Hayek",
                        content: s,
                        content_width,
                        wrap_width,
                        is_error,
                        is_client: false,
                    },
                );
            }
            ChatMessage::Thinking => {
                lines.push(Line::from(Span::styled(
                    "  Consulting... ",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let start = app.scroll_line().min(max_scroll);
    let end = (start + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(start)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
