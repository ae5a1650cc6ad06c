//! Handler for the example-prompts picker popup.

use crossterm::event::KeyCode;

use crate::core::examples::{example_prompts, filter_examples};

use super::super::app::App;
use super::HandleResult;

/// Handle key when the example picker is open. Enter inserts the selected
/// prompt into the input field; Esc is handled by the caller.
pub(crate) fn handle_example_selector(key_code: KeyCode, app: &mut App) -> HandleResult {
    let Some(selector) = app.example_selector.as_mut() else {
        return HandleResult::Continue;
    };

    match key_code {
        KeyCode::Backspace => {
            selector.filter.pop();
        }
        KeyCode::Char(c) => {
            selector.filter.push(c);
        }
        _ => {}
    }

    let filtered = filter_examples(example_prompts(), &selector.filter);
    match key_code {
        KeyCode::Up => {
            selector.selected_index = selector.selected_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if !filtered.is_empty() {
                selector.selected_index =
                    (selector.selected_index + 1).min(filtered.len().saturating_sub(1));
            }
        }
        KeyCode::Enter => {
            let idx = selector.selected_index;
            if let Some(example) = filtered.get(idx) {
                app.input = example.prompt.clone();
                app.input_cursor = app.input.len();
                app.example_selector = None;
            }
            return HandleResult::Continue;
        }
        KeyCode::Backspace | KeyCode::Char(_) => {
            selector.selected_index = selector
                .selected_index
                .min(filtered.len().saturating_sub(1));
        }
        _ => {}
    }
    HandleResult::Continue
}
