//! Welcome screen: banner, key status, centered input.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, INPUT_LINES, PRIMARY};
use super::input;

/// Width of the centered input on the welcome screen.
const WELCOME_INPUT_WIDTH: u16 = 64;

const BANNER: &str = "Transform Your LinkedIn Presence with Hayek!";
const EXPERTISE: &str =
    "Profile Optimization • Content Strategy • Networking • Thought Leadership • Lead Generation";

pub(crate) fn draw_welcome_center(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(INPUT_LINES),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

    let banner = Line::from(vec![
        Span::styled("🚀 ", Style::default()),
        Span::styled(
            BANNER,
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        chunks[0],
    );

    let expertise = Line::from(Span::styled(
        EXPERTISE,
        Style::default().fg(ACCENT_SECONDARY),
    ));
    f.render_widget(
        Paragraph::new(expertise).alignment(Alignment::Center),
        chunks[1],
    );

    let status = if app.has_api_key {
        Line::from(vec![
            Span::styled("🔑 API Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled("✅ Connected", Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(vec![
            Span::styled("🔑 API Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "❌ GEMINI_API_KEY not set",
                Style::default().fg(Color::Red),
            ),
            Span::styled("  (Alt+K opens the key page)", Style::default().fg(Color::DarkGray)),
        ])
    };
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[2],
    );

    let input_width = WELCOME_INPUT_WIDTH.min(area.width);
    let input_area = Rect {
        x: area.x + area.width.saturating_sub(input_width) / 2,
        y: chunks[3].y,
        width: input_width,
        height: chunks[3].height,
    };
    input::draw_input_block(f, app, input_area);

    let hint = Line::from(vec![
        Span::styled("Alt+E ", Style::default().fg(ACCENT)),
        Span::styled(
            "popular consulting topics",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[4]);
}
