//! TUI (Text User Interface) for interactive consultations with Hayek.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

#[allow(unused_imports)]
pub use app::{App, ChatMessage, ExampleSelectorState};

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::session::Session;

use draw::draw;
use handlers::{HandleResult, PendingExchange};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the async model calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.model_id.clone(), config.has_api_key);
    let mut session = Session::new();
    let mut pending_exchange: Option<PendingExchange> = None;

    loop {
        // Fold a finished exchange into the session before drawing.
        if let Some(pending) = pending_exchange.take() {
            match pending.result_rx.try_recv() {
                Ok(result) => {
                    handlers::handle_exchange_result(&mut app, &mut session, &pending.message, result);
                }
                Err(_) => pending_exchange = Some(pending),
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                let result = handlers::handle_key(
                    key,
                    handlers::HandleKeyContext {
                        app: &mut app,
                        config: &config,
                        session: &mut session,
                        pending_exchange: &mut pending_exchange,
                        rt: &rt,
                    },
                );
                if result == HandleResult::Break {
                    break;
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
