//! TUI application state: displayed messages, input, scroll, popups.

mod messages;

use std::time::Instant;

use ratatui::widgets::ListState;

/// Messages displayed in the conversation pane.
#[derive(Clone)]
pub enum ChatMessage {
    Client(String),
    Consultant(String),
    Thinking,
}

/// State for the example-prompts picker popup (Alt+E).
pub struct ExampleSelectorState {
    pub selected_index: usize,
    pub list_state: ListState,
    /// Filter query (case-insensitive search on topic/prompt).
    pub filter: String,
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub struct App {
    pub(crate) messages: Vec<ChatMessage>,
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index).
    pub(crate) input_cursor: usize,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Model ID displayed in the header (e.g. "gemini-2.5-flash").
    pub model_name: String,
    /// False when GEMINI_API_KEY is absent; shown in the header and on the
    /// welcome screen, and turns every submit into the fixed error reply.
    pub has_api_key: bool,
    /// When set, show the example-prompts picker popup.
    pub example_selector: Option<ExampleSelectorState>,
    /// True while an exchange is in flight (gates submits, shows cancel hint).
    pub(crate) is_waiting: bool,
    /// Esc was pressed; next key is treated as Option+key (Option as meta).
    pub(crate) escape_pending: bool,
    /// Transient toast: text and deadline.
    pub(crate) toast: Option<(String, Instant)>,
}

impl App {
    pub fn new(model_name: String, has_api_key: bool) -> Self {
        Self {
            messages: vec![],
            input: String::new(),
            input_cursor: 0,
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            model_name,
            has_api_key,
            example_selector: None,
            is_waiting: false,
            escape_pending: false,
            toast: None,
        }
    }

    pub(crate) fn open_example_selector(&mut self) {
        self.example_selector = Some(ExampleSelectorState {
            selected_index: 0,
            list_state: ListState::default(),
            filter: String::new(),
        });
    }

    pub(crate) fn show_toast(&mut self, text: &str) {
        let deadline =
            Instant::now() + std::time::Duration::from_secs(super::constants::TOAST_SECS);
        self.toast = Some((text.to_string(), deadline));
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
