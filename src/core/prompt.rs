//! Prompt assembly: persona instruction plus the labeled transcript.

use crate::core::persona::{CLIENT_LABEL, CONSULTANT_LABEL, PERSONA};
use crate::core::session::Turn;

/// Build the full prompt for one exchange: the persona instruction, the
/// transcript of prior turns in order, the new message, and a trailing cue
/// for the consultant's next reply.
///
/// Callers must not pass a blank `new_message`; blank input is rejected
/// before assembly (see `consult::submit`). History length is unbounded
/// here — a long session grows the prompt linearly and can exceed the
/// model's input window, which surfaces as an API error on the call.
pub fn assemble(turns: &[Turn], new_message: &str) -> String {
    let mut transcript = String::new();
    for turn in turns {
        transcript.push_str(&format!(
            "{}: {}\n\n{}: {}\n\n",
            CLIENT_LABEL, turn.client, CONSULTANT_LABEL, turn.consultant
        ));
    }
    format!(
        "{}\n\n{}{}: {}\n\n{}:",
        PERSONA, transcript, CLIENT_LABEL, new_message, CONSULTANT_LABEL
    )
}

#[cfg(test)]
mod tests {
    use super::assemble;
    use crate::core::persona::PERSONA;
    use crate::core::session::Turn;

    #[test]
    fn empty_history_ends_with_message_and_cue() {
        let prompt = assemble(&[], "hi");
        assert!(prompt.ends_with("**Client**: hi\n\n**Hayek**:"));
    }

    #[test]
    fn persona_comes_first() {
        let prompt = assemble(&[], "hi");
        assert!(prompt.starts_with(PERSONA));
    }

    #[test]
    fn empty_history_has_no_transcript_blocks() {
        let prompt = assemble(&[], "hi");
        // Exactly one client block: the new message.
        assert_eq!(prompt.matches("**Client**:").count(), 1);
        assert_eq!(prompt.matches("**Hayek**:").count(), 1);
    }

    #[test]
    fn prior_turns_appear_in_order() {
        let turns = vec![Turn::new("a", "b")];
        let prompt = assemble(&turns, "c");
        assert!(prompt.contains("**Client**: a\n\n**Hayek**: b\n\n**Client**: c\n\n**Hayek**:"));
    }

    #[test]
    fn multiple_turns_serialize_oldest_first() {
        let turns = vec![Turn::new("q1", "a1"), Turn::new("q2", "a2")];
        let prompt = assemble(&turns, "q3");
        let p1 = prompt.find("**Client**: q1").unwrap();
        let p2 = prompt.find("**Client**: q2").unwrap();
        let p3 = prompt.find("**Client**: q3").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn prompt_grows_with_history() {
        let short = assemble(&[], "x");
        let turns = vec![Turn::new("question", "answer")];
        let long = assemble(&turns, "x");
        assert!(long.len() > short.len());
    }
}
