//! Handler for the main chat input: editing, cursor movement, submit.

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use crate::core::consult;
use crate::core::persona;

use super::super::app::ScrollPosition;
use super::super::constants;
use super::exchange;
use super::{HandleKeyContext, HandleResult};

/// Byte index of the previous char boundary in `s` before `idx`.
fn prev_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx;
    while i > 0 {
        i -= 1;
        if s.is_char_boundary(i) {
            return i;
        }
    }
    0
}

/// Byte index of the next char boundary in `s` after `idx`.
fn next_char_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

/// Handle main input keys (when no popup is open).
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    ctx: HandleKeyContext<'_>,
) -> HandleResult {
    let HandleKeyContext {
        app,
        config,
        session,
        pending_exchange,
        rt,
    } = ctx;

    match (key_code, key_modifiers) {
        (KeyCode::Enter, mods)
            if mods.contains(KeyModifiers::SHIFT) || mods.contains(KeyModifiers::ALT) =>
        {
            app.input.insert(app.input_cursor, '\n');
            app.input_cursor += 1;
            HandleResult::Continue
        }
        (KeyCode::Enter, _) => {
            let message = app.input.trim().to_string();
            if message.is_empty() {
                // No exchange and no history mutation for blank input; the
                // field keeps whatever whitespace it held.
                app.show_toast(persona::EMPTY_INPUT_NOTICE);
                return HandleResult::Continue;
            }
            // Exchanges are serialized: one in flight per session.
            if pending_exchange.is_some() {
                return HandleResult::Continue;
            }
            app.input.clear();
            app.input_cursor = 0;
            app.push_client(&message);
            app.scroll = ScrollPosition::Bottom;

            if !app.has_api_key {
                // Fixed error reply, recorded without attempting a call.
                let reply = consult::record_turn(session, &message, persona::MISSING_KEY_ERROR);
                app.push_consultant(reply);
                return HandleResult::Continue;
            }

            app.set_thinking(true);
            app.is_waiting = true;
            *pending_exchange = Some(exchange::spawn_exchange(
                rt,
                Arc::clone(config),
                config.model_id.clone(),
                session.turns().to_vec(),
                message,
            ));
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if app.input_cursor > 0 {
                let prev = prev_char_boundary(&app.input, app.input_cursor);
                app.input.remove(prev);
                app.input_cursor = prev;
            }
            HandleResult::Continue
        }
        (KeyCode::Left, _) => {
            app.input_cursor = prev_char_boundary(&app.input, app.input_cursor);
            HandleResult::Continue
        }
        (KeyCode::Right, _) => {
            if app.input_cursor < app.input.len() {
                app.input_cursor = next_char_boundary(&app.input, app.input_cursor);
            }
            HandleResult::Continue
        }
        (KeyCode::Home, _) => {
            app.input_cursor = 0;
            HandleResult::Continue
        }
        (KeyCode::End, _) => {
            app.input_cursor = app.input.len();
            HandleResult::Continue
        }
        (KeyCode::Up, _) => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::Down, _) => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        (KeyCode::PageUp, _) => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::PageDown, _) => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore Alt+key: user likely intended a shortcut (e.g. Alt+E)
            if mods.contains(KeyModifiers::ALT) || mods.contains(KeyModifiers::CONTROL) {
                return HandleResult::Continue;
            }
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::{next_char_boundary, prev_char_boundary};

    #[test]
    fn prev_boundary_ascii() {
        assert_eq!(prev_char_boundary("abc", 2), 1);
        assert_eq!(prev_char_boundary("abc", 0), 0);
    }

    #[test]
    fn boundaries_multibyte() {
        let s = "aé b"; // é is 2 bytes at index 1..3
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
    }

    #[test]
    fn next_boundary_clamps_to_len() {
        assert_eq!(next_char_boundary("ab", 1), 2);
        assert_eq!(next_char_boundary("ab", 2), 2);
    }
}
