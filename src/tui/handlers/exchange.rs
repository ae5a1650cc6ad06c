//! Spawns exchanges on a background thread and folds results back in.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::consult;
use crate::core::llm::{self, ChatError};
use crate::core::prompt;
use crate::core::session::{Session, Turn};

use super::super::app::{App, ScrollPosition};
use super::PendingExchange;

/// Spawn one exchange. The prompt is assembled from the history snapshot
/// taken at submit time; the session itself is only touched when the result
/// arrives (see `handle_exchange_result`), keeping the append atomic.
pub(crate) fn spawn_exchange(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    model_id: String,
    turns: Vec<Turn>,
    message: String,
) -> PendingExchange {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();

    let rt_clone = Arc::clone(rt);
    let sent_message = message.clone();
    std::thread::spawn(move || {
        let assembled = prompt::assemble(&turns, &sent_message);
        let result = rt_clone.block_on(llm::complete(
            config.as_ref(),
            &model_id,
            &assembled,
            Some(&cancel_token_clone),
        ));
        let _ = result_tx.send(result);
    });

    PendingExchange {
        message,
        result_rx,
        cancel_token,
    }
}

/// Fold a finished exchange into session and display. A cancelled exchange
/// leaves the session untouched; anything else (reply or error) is recorded
/// as the consultant turn.
pub fn handle_exchange_result(
    app: &mut App,
    session: &mut Session,
    message: &str,
    result: Result<String, ChatError>,
) {
    app.set_thinking(false);
    app.is_waiting = false;
    match result {
        Err(ChatError::Cancelled) => {
            app.append_cancelled_notice();
        }
        Ok(raw) => {
            let reply = consult::record_turn(session, message, &raw);
            app.push_consultant(reply);
        }
        Err(ref e) => {
            let reply = consult::record_turn(session, message, &consult::connect_error(e));
            app.push_consultant(reply);
        }
    }
    app.scroll = ScrollPosition::Bottom;
}
