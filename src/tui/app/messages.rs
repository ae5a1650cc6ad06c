//! Message handling for the conversation pane.
//!
//! The pane is a display of `core::session::Session` plus transient items
//! (thinking indicator, cancel notice, greeting). The session stays the
//! source of truth; undo and clear rebuild the pane from it.

use crate::core::persona;
use crate::core::session::Session;

use super::{App, ChatMessage, ScrollPosition};

impl App {
    pub(crate) fn push_client(&mut self, text: &str) {
        self.messages.push(ChatMessage::Client(text.to_string()));
    }

    pub(crate) fn push_consultant(&mut self, text: String) {
        self.messages.push(ChatMessage::Consultant(text));
    }

    /// Last consultant reply, if any (for the copy shortcut).
    pub(crate) fn last_consultant_reply(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            ChatMessage::Consultant(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        if thinking {
            self.messages.push(ChatMessage::Thinking);
        } else {
            self.messages
                .retain(|m| !matches!(m, ChatMessage::Thinking));
        }
    }

    /// Shown when the user cancels an in-flight exchange. Display-only; the
    /// cancelled exchange never reaches the session.
    pub(crate) fn append_cancelled_notice(&mut self) {
        self.messages
            .push(ChatMessage::Consultant("*[Request cancelled]*".to_string()));
    }

    /// Rebuild the pane from the session (after undo). An empty session
    /// returns to the welcome screen.
    pub(crate) fn rebuild_from_session(&mut self, session: &Session) {
        self.messages.clear();
        for turn in session.turns() {
            self.messages.push(ChatMessage::Client(turn.client.clone()));
            self.messages
                .push(ChatMessage::Consultant(turn.consultant.clone()));
        }
        self.scroll = ScrollPosition::Bottom;
        if self.messages.is_empty() {
            self.scroll = ScrollPosition::default();
            self.last_max_scroll = 0;
        }
    }

    /// Start a fresh conversation: empty pane except the fixed greeting.
    pub(crate) fn show_greeting(&mut self) {
        self.messages = vec![ChatMessage::Consultant(persona::GREETING.to_string())];
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
    }
}
