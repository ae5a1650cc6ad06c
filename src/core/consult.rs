//! Exchange orchestration: submit, undo, clear.
//!
//! One exchange is a single pass through assemble -> model call ->
//! normalize -> append. Errors never abort the session: a failed call is
//! recorded as the consultant reply so the conversation log keeps the
//! failure. Callers must serialize exchanges per session; the TUI keeps at
//! most one in flight.

use crate::core::format;
use crate::core::llm::ChatError;
use crate::core::persona;
use crate::core::prompt;
use crate::core::session::{Session, Turn};

/// Outcome of one submit.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank after trimming; nothing was sent or recorded and the
    /// input field keeps its content. Display `persona::EMPTY_INPUT_NOTICE`.
    Empty,
    /// The exchange completed and the turn was appended to the session.
    Completed { reply: String },
}

/// Fixed user-visible text for a failed model call, embedding the cause.
pub fn connect_error(err: &ChatError) -> String {
    format!(
        "❌ **Error**: Could not connect to Gemini API. Please check your API key and internet connection.\n\n**Details**: {}",
        err
    )
}

/// Normalize a raw reply (or error text) and append the exchange to the
/// session as one atomic step. Returns the recorded reply.
pub fn record_turn(session: &mut Session, message: &str, raw_reply: &str) -> String {
    let reply = format::normalize(raw_reply);
    session.push(Turn::new(message, &reply));
    reply
}

/// One blocking submit against the session.
///
/// Blank input short-circuits before the assembler and the model call.
/// With no credential the fixed missing-key text becomes the reply and no
/// call is attempted. Otherwise `call` receives the assembled prompt; its
/// error is converted into the fixed connect-error text. In every
/// non-empty case the (message, reply) pair lands in the session together.
pub fn submit<F>(session: &mut Session, has_api_key: bool, message: &str, call: F) -> Submission
where
    F: FnOnce(&str) -> Result<String, ChatError>,
{
    let message = message.trim();
    if message.is_empty() {
        return Submission::Empty;
    }

    let raw = if !has_api_key {
        persona::MISSING_KEY_ERROR.to_string()
    } else {
        let assembled = prompt::assemble(session.turns(), message);
        match call(&assembled) {
            Ok(text) => text,
            Err(e) => connect_error(&e),
        }
    };

    let reply = record_turn(session, message, &raw);
    Submission::Completed { reply }
}

#[cfg(test)]
mod tests {
    use super::{Submission, connect_error, record_turn, submit};
    use crate::core::llm::ChatError;
    use crate::core::persona;
    use crate::core::session::{Session, Turn};

    fn no_call(_: &str) -> Result<String, ChatError> {
        panic!("model call must not be attempted");
    }

    #[test]
    fn whitespace_only_message_is_rejected_without_mutation() {
        let mut session = Session::new();
        session.push(Turn::new("a", "b"));
        let outcome = submit(&mut session, true, "   ", no_call);
        assert_eq!(outcome, Submission::Empty);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn empty_message_never_reaches_the_model() {
        let mut session = Session::new();
        assert_eq!(submit(&mut session, true, "", no_call), Submission::Empty);
        assert!(session.is_empty());
    }

    #[test]
    fn missing_key_records_fixed_error_without_calling() {
        let mut session = Session::new();
        let outcome = submit(&mut session, false, "hello", no_call);
        match outcome {
            Submission::Completed { reply } => assert_eq!(reply, persona::MISSING_KEY_ERROR),
            other => panic!("expected Completed, got {:?}", other),
        }
        assert_eq!(session.len(), 1);
        assert_eq!(session.turns()[0].consultant, persona::MISSING_KEY_ERROR);
    }

    #[test]
    fn successful_exchange_normalizes_and_appends() {
        let mut session = Session::new();
        let outcome = submit(&mut session, true, "How do I improve my headline?", |_| {
            Ok("Headline Tips:\nBe specific".to_string())
        });
        assert_eq!(
            outcome,
            Submission::Completed {
                reply: "**Headline Tips:**\nBe specific".to_string()
            }
        );
        assert_eq!(
            session.turns(),
            &[Turn::new(
                "How do I improve my headline?",
                "**Headline Tips:**\nBe specific"
            )]
        );
    }

    #[test]
    fn submitted_message_is_trimmed_before_recording() {
        let mut session = Session::new();
        submit(&mut session, true, "  hi  ", |_| Ok("ok".to_string()));
        assert_eq!(session.turns()[0].client, "hi");
    }

    #[test]
    fn call_receives_prompt_with_prior_turns() {
        let mut session = Session::new();
        session.push(Turn::new("a", "b"));
        submit(&mut session, true, "c", |assembled| {
            assert!(assembled.contains("**Client**: a\n\n**Hayek**: b\n\n**Client**: c"));
            assert!(assembled.ends_with("**Hayek**:"));
            Ok("fine".to_string())
        });
    }

    #[test]
    fn prompt_excludes_the_pending_message_from_history() {
        let mut session = Session::new();
        submit(&mut session, true, "first", |assembled| {
            // Session is still empty while the first exchange is in flight.
            assert_eq!(assembled.matches("**Client**:").count(), 1);
            Ok("r".to_string())
        });
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn failed_call_records_error_as_reply() {
        let mut session = Session::new();
        let outcome = submit(&mut session, true, "hello", |_| {
            Err(ChatError::ApiMessage("boom".to_string()))
        });
        match outcome {
            Submission::Completed { reply } => {
                assert!(reply.starts_with("❌ **Error**: Could not connect to Gemini API"));
                assert!(reply.contains("**Details**: API error: boom"));
            }
            other => panic!("expected Completed, got {:?}", other),
        }
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn error_reply_is_marker_stable_under_normalization() {
        // The error template carries "**", so normalization leaves it alone.
        let text = connect_error(&ChatError::ApiMessage("x".to_string()));
        assert_eq!(crate::core::format::normalize(&text), text);
    }

    #[test]
    fn record_turn_normalizes_raw_reply() {
        let mut session = Session::new();
        let reply = record_turn(&mut session, "q", "Summary:\nDetails");
        assert_eq!(reply, "**Summary:**\nDetails");
        assert_eq!(session.turns()[0].consultant, reply);
    }

    #[test]
    fn consecutive_exchanges_build_history() {
        let mut session = Session::new();
        submit(&mut session, true, "one", |_| Ok("r1".to_string()));
        submit(&mut session, true, "two", |p| {
            assert!(p.contains("**Client**: one\n\n**Hayek**: r1"));
            Ok("r2".to_string())
        });
        assert_eq!(session.len(), 2);
    }
}
