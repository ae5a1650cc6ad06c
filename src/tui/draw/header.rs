//! Header: logo/spinner, title, model name, API key status.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::{App, ChatMessage};
use super::super::constants::{ACCENT, LOGO_IDLE, LOGO_THINKING};

/// Start time for the thinking-spinner animation phase.
static HEADER_START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Max width for the model name in the header; longer names truncate with "…".
const MODEL_HEADER_WIDTH: u16 = 24;
/// Width of the key-status indicator.
const STATUS_HEADER_WIDTH: u16 = 8;

const TITLE: &str = "Hayek — LinkedIn Growth Consultant ";

fn is_thinking(app: &App) -> bool {
    app.messages
        .last()
        .map(|m| matches!(m, ChatMessage::Thinking))
        .unwrap_or(false)
}

pub(crate) fn draw_header(f: &mut Frame, app: &mut App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(MODEL_HEADER_WIDTH),
            Constraint::Length(STATUS_HEADER_WIDTH),
        ])
        .split(area);

    let logo_area = header_chunks[0];
    let model_area = header_chunks[2];
    let status_area = header_chunks[3];

    let logo_symbol = if is_thinking(app) {
        let start = HEADER_START.get_or_init(Instant::now);
        let phase = start.elapsed().as_millis() as usize;
        LOGO_THINKING[(phase / 80) % LOGO_THINKING.len()]
    } else {
        LOGO_IDLE
    };
    let logo_line = Line::from(Span::styled(
        format!("{} ", logo_symbol),
        Style::default().fg(ACCENT),
    ));
    f.render_widget(Paragraph::new(logo_line), logo_area);

    let title_len = TITLE.chars().count() as u16;
    let title_area = Rect {
        x: area.x + area.width.saturating_sub(title_len) / 2,
        y: area.y,
        width: title_len.min(area.width),
        height: area.height,
    };
    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title), title_area);

    let max_len = MODEL_HEADER_WIDTH as usize;
    let model_display = if app.model_name.chars().count() > max_len {
        let chars: Vec<char> = app.model_name.chars().collect();
        let start = chars.len().saturating_sub(max_len.saturating_sub(1));
        format!("…{}", chars[start..].iter().collect::<String>())
    } else {
        app.model_name.clone()
    };
    let model_line = Line::from(Span::styled(
        model_display,
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(model_line).alignment(ratatui::layout::Alignment::Right),
        model_area,
    );

    // Key status: mirrors the per-exchange behavior (missing key = error replies).
    let status_line = if app.has_api_key {
        Line::from(Span::styled("🔑 ✅", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled("🔑 ❌", Style::default().fg(Color::Red)))
    };
    f.render_widget(
        Paragraph::new(status_line).alignment(ratatui::layout::Alignment::Right),
        status_area,
    );
}
