//! Example consulting prompts shown in the TUI picker.
//!
//! Loaded from `config/example-prompts.json` (embedded at compile time;
//! validated by the build script).

use std::sync::OnceLock;

use serde::Deserialize;

/// One example prompt: a short topic for the list, the full prompt text
/// inserted into the input field on selection.
#[derive(Clone, Debug, Deserialize)]
pub struct ExamplePrompt {
    pub topic: String,
    pub prompt: String,
}

fn load_examples() -> Vec<ExamplePrompt> {
    let json = include_str!("../../config/example-prompts.json");
    serde_json::from_str(json).expect("example-prompts.json must be valid")
}

static EXAMPLES: OnceLock<Vec<ExamplePrompt>> = OnceLock::new();

/// All example prompts, loading from config on first access.
pub fn example_prompts() -> &'static [ExamplePrompt] {
    EXAMPLES.get_or_init(load_examples)
}

/// Filter examples by query (case-insensitive match on topic or prompt).
/// Returns all examples when the query is empty.
pub fn filter_examples<'a>(examples: &'a [ExamplePrompt], query: &str) -> Vec<&'a ExamplePrompt> {
    if query.is_empty() {
        return examples.iter().collect();
    }
    let q = query.to_lowercase();
    examples
        .iter()
        .filter(|e| e.topic.to_lowercase().contains(&q) || e.prompt.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{example_prompts, filter_examples};

    #[test]
    fn examples_load_and_are_nonempty() {
        assert!(!example_prompts().is_empty());
    }

    #[test]
    fn every_example_has_topic_and_prompt() {
        for e in example_prompts() {
            assert!(!e.topic.trim().is_empty());
            assert!(!e.prompt.trim().is_empty());
        }
    }

    #[test]
    fn filter_empty_query_returns_all() {
        let all = example_prompts();
        assert_eq!(filter_examples(all, "").len(), all.len());
    }

    #[test]
    fn filter_matches_topic_case_insensitive() {
        let out = filter_examples(example_prompts(), "HEADLINE");
        assert!(out.iter().any(|e| e.topic == "Headline optimization"));
    }

    #[test]
    fn filter_matches_prompt_text() {
        let out = filter_examples(example_prompts(), "recruiters");
        assert!(!out.is_empty());
        assert!(out.iter().all(|e| {
            e.prompt.to_lowercase().contains("recruiters")
                || e.topic.to_lowercase().contains("recruiters")
        }));
    }

    #[test]
    fn filter_no_match_returns_empty() {
        assert!(filter_examples(example_prompts(), "xyznonexistent").is_empty());
    }
}
