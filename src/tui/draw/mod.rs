//! TUI rendering: layout and widgets for the consulting chat interface.

mod examples_popup;
mod header;
mod history;
mod input;
mod welcome;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::App;
use super::constants::{ACCENT, INPUT_LINES};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let is_welcome = app.messages.is_empty();

    if is_welcome {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);
        header::draw_header(f, app, chunks[0]);
        welcome::draw_welcome_center(f, app, chunks[1]);
        input::draw_bottom_bar(f, app, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(INPUT_LINES + 3),
            ])
            .split(area);
        header::draw_header(f, app, chunks[0]);
        history::draw_history(f, app, chunks[1]);
        input::draw_input_section(f, app, chunks[2]);
    }

    if let Some(ref mut selector) = app.example_selector {
        examples_popup::draw_example_selector_popup(f, area, selector);
    }

    // Toast: top right, below header. Opaque background so it reads over history.
    if app
        .toast
        .as_ref()
        .is_some_and(|(_, deadline)| *deadline <= Instant::now())
    {
        app.toast = None;
    }
    if let Some((text, _)) = app.toast.as_ref() {
        const HEADER_HEIGHT: u16 = 2;
        let toast_text = format!(" {} ", text);
        let toast_width = (toast_text.chars().count() as u16 + 2).min(area.width);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
            y: area.y + HEADER_HEIGHT,
            width: toast_width,
            height: 3,
        };
        f.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(Color::Black));
        let para = Paragraph::new(Line::from(toast_text))
            .block(block)
            .style(Style::default().fg(ACCENT).bg(Color::Black));
        f.render_widget(para, toast_area);
    }
}
