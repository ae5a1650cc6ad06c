//! Keyboard event handlers for the TUI.

mod examples;
mod exchange;
mod input;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::KeyEventKind;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm::ChatError;
use crate::core::persona;
use crate::core::session::Session;

use super::app::App;
use super::shortcuts::Shortcut;

pub use exchange::handle_exchange_result;

/// An exchange in flight: the submitted message, the receiver for the model
/// call result, and the token to cancel it.
pub struct PendingExchange {
    pub message: String,
    pub result_rx: mpsc::Receiver<Result<String, ChatError>>,
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce
/// parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub session: &'a mut Session,
    pub pending_exchange: &'a mut Option<PendingExchange>,
    pub rt: &'a Arc<Runtime>,
}

fn apply_shortcut(shortcut: Shortcut, ctx: HandleKeyContext<'_>) -> HandleResult {
    match shortcut {
        Shortcut::Quit => HandleResult::Break,
        Shortcut::Examples => {
            ctx.app.open_example_selector();
            HandleResult::Continue
        }
        Shortcut::Undo => {
            // No session mutation while an exchange is in flight.
            if ctx.pending_exchange.is_none() && ctx.session.undo_last() {
                ctx.app.rebuild_from_session(ctx.session);
            }
            HandleResult::Continue
        }
        Shortcut::NewSession => {
            if ctx.pending_exchange.is_none() {
                ctx.session.clear();
                ctx.app.show_greeting();
            }
            HandleResult::Continue
        }
        Shortcut::CopyReply => {
            if let Some(reply) = ctx.app.last_consultant_reply().map(String::from)
                && arboard::Clipboard::new()
                    .and_then(|mut c| c.set_text(reply))
                    .is_ok()
            {
                ctx.app.show_toast("Copied");
            }
            HandleResult::Continue
        }
        Shortcut::OpenKeyPage => {
            let _ = opener::open(persona::API_KEY_URL);
            HandleResult::Continue
        }
    }
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: crossterm::event::KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    // Esc+key sequence (Option as Meta on Mac terminals)
    if ctx.app.escape_pending {
        ctx.app.escape_pending = false;
        if let Some(shortcut) = Shortcut::match_key(&key, true) {
            return apply_shortcut(shortcut, ctx);
        }
    }

    if let Some(shortcut) = Shortcut::match_key(&key, false) {
        return apply_shortcut(shortcut, ctx);
    }

    // Esc: close popup, cancel in-flight exchange, or start Option+key.
    if Shortcut::is_escape(&key) {
        if ctx.app.example_selector.is_some() {
            ctx.app.example_selector = None;
            return HandleResult::Continue;
        }
        if let Some(pending) = ctx.pending_exchange.as_ref() {
            pending.cancel_token.cancel();
            return HandleResult::Continue;
        }
        ctx.app.escape_pending = true;
        return HandleResult::Continue;
    }

    // Example picker popup
    if ctx.app.example_selector.is_some() {
        return examples::handle_example_selector(key.code, ctx.app);
    }

    // Main input handling
    input::handle_main_input(key.code, key.modifiers, ctx)
}
