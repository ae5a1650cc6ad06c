//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action          | Keys                          |
//! |-----------------|-------------------------------|
//! | Send            | Enter                         |
//! | Newline         | Shift+Enter, Alt+Enter        |
//! | Scroll          | ↑ ↓ PageUp PageDown           |
//! | Examples        | Alt+E, Esc+e (Option as meta) |
//! | Undo last       | Alt+U, Esc+u                  |
//! | New session     | Ctrl+N                        |
//! | Copy last reply | Alt+C, Esc+c                  |
//! | API key page    | Alt+K, Esc+k                  |
//! | Cancel request  | Esc                           |
//! | Quit            | Ctrl+C                        |
//!
//! On macOS terminals with "Use option as meta key", Option+key arrives as
//! Esc followed by the key; the Esc+key rows cover that.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Open the example-prompts picker (Alt+E, Esc+e)
    Examples,
    /// Remove the last exchange (Alt+U, Esc+u)
    Undo,
    /// Clear the session and show the greeting (Ctrl+N)
    NewSession,
    /// Copy the last consultant reply to the clipboard (Alt+C, Esc+c)
    CopyReply,
    /// Open the API key page in a browser (Alt+K, Esc+k)
    OpenKeyPage,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches. `escape_pending` covers the
    /// Esc+key sequence terminals send for Option-as-meta.
    pub fn match_key(key: &KeyEvent, escape_pending: bool) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if escape_pending {
            return match key.code {
                KeyCode::Char('e') => Some(Shortcut::Examples),
                KeyCode::Char('u') => Some(Shortcut::Undo),
                KeyCode::Char('c') => Some(Shortcut::CopyReply),
                KeyCode::Char('k') => Some(Shortcut::OpenKeyPage),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::NewSession)
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::Examples)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::Undo)
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::CopyReply)
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::OpenKeyPage)
            }
            _ => None,
        }
    }

    /// True if key is Escape (cancel in-flight, or start of Esc+key).
    pub fn is_escape(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press && key.code == KeyCode::Esc
    }
}

/// Labels for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar(is_waiting: bool) -> Text<'static> {
        if is_waiting {
            Text::from(Line::from(vec![
                Span::styled("Esc ", Color::Yellow),
                Span::raw("cancel"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
            ]))
        } else {
            Text::from(vec![
                Line::from(vec![
                    Span::styled("Enter ", DIM),
                    Span::raw("send"),
                    Span::styled("  Shift/Alt+Enter ", DIM),
                    Span::raw("newline"),
                    Span::styled("  Alt+E ", DIM),
                    Span::raw("examples"),
                    Span::styled("  ↑↓ ", DIM),
                    Span::raw("scroll"),
                ]),
                Line::from(vec![
                    Span::styled("Alt+U ", DIM),
                    Span::raw("undo"),
                    Span::styled("  Ctrl+N ", DIM),
                    Span::raw("new session"),
                    Span::styled("  Alt+C ", DIM),
                    Span::raw("copy reply"),
                    Span::styled("  Ctrl+C ", DIM),
                    Span::raw("quit"),
                ]),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn is_escape() {
        assert!(Shortcut::is_escape(&key(KeyCode::Esc, KeyModifiers::empty())));
        assert!(!Shortcut::is_escape(&key(
            KeyCode::Char('c'),
            KeyModifiers::empty()
        )));
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_new_session_ctrl_n() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('n'), KeyModifiers::CONTROL), false),
            Some(Shortcut::NewSession)
        );
    }

    #[test]
    fn match_examples_alt_e() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('e'), KeyModifiers::ALT), false),
            Some(Shortcut::Examples)
        );
    }

    #[test]
    fn match_undo_alt_u() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('u'), KeyModifiers::ALT), false),
            Some(Shortcut::Undo)
        );
    }

    #[test]
    fn match_escape_pending_e() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('e'), KeyModifiers::empty()), true),
            Some(Shortcut::Examples)
        );
    }

    #[test]
    fn match_escape_pending_u() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('u'), KeyModifiers::empty()), true),
            Some(Shortcut::Undo)
        );
    }

    #[test]
    fn plain_c_is_not_a_shortcut() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::empty()), false),
            None
        );
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&release, false), None);
    }
}
