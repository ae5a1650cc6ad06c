//! Input box, input section, and bottom shortcut bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{ACCENT, INPUT_LINES};
use super::super::shortcuts;

const PLACEHOLDER: &str =
    "Ask about profile optimization, content strategy, networking... (Alt+E for examples) ";

fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|s| s.into_owned())
        .collect()
}

pub(crate) fn draw_input_block(f: &mut Frame, app: &mut App, input_area: Rect) {
    let border_style = if app.example_selector.is_none() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = input_block.inner(input_area);
    let inner_height = inner.height as usize;

    let input_content = if app.input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.input.as_str())
    };

    let para = Paragraph::new(Line::from(input_content))
        .block(input_block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let lines = wrapped_lines(app.input.as_str(), inner.width);
    let total_lines = lines.len().max(1);

    // input_cursor is maintained on char boundaries by the input handler.
    let cursor_byte = app.input_cursor.min(app.input.len());
    let cursor_char_offset = app.input[..cursor_byte].chars().count();
    let (cursor_line, cursor_col) = {
        let mut idx = 0;
        let mut found = None;
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if cursor_char_offset <= idx + len {
                found = Some((i, cursor_char_offset - idx));
                break;
            }
            idx += len;
        }
        found.unwrap_or_else(|| {
            let last = lines.last().map(|s| s.chars().count()).unwrap_or(0);
            (total_lines.saturating_sub(1), last)
        })
    };
    let scroll_y = cursor_line
        .saturating_sub(inner_height.saturating_sub(1))
        .min(total_lines.saturating_sub(inner_height.max(1)));
    let para = para.scroll((scroll_y as u16, 0));

    f.render_widget(para, input_area);

    let cx = inner.x + cursor_col.min(inner.width as usize) as u16;
    let cy = inner.y + cursor_line.saturating_sub(scroll_y) as u16;
    f.set_cursor_position(Position::new(cx, cy));
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let bar = shortcuts::labels::bottom_bar(app.is_waiting);
    f.render_widget(
        Paragraph::new(bar).alignment(ratatui::layout::Alignment::Right),
        area,
    );
}

pub(crate) fn draw_input_section(f: &mut Frame, app: &mut App, input_section: Rect) {
    let input_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_LINES),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(input_section);

    draw_input_block(f, app, input_chunks[0]);

    // Thin status line between input and shortcuts.
    if app.is_waiting {
        let line = Line::from(Span::styled(
            "Waiting for Hayek...",
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(line), input_chunks[1]);
    }

    draw_bottom_bar(f, app, input_chunks[2]);
}
