//! Build script: validates example-prompts.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "example-prompts.json"]
        .iter()
        .collect();
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. example-prompts.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct ExamplePromptEntry {
        topic: String,
        prompt: String,
    }
    let entries: Vec<ExamplePromptEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "example-prompts.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    if entries.is_empty() {
        panic!("example-prompts.json must contain at least one prompt");
    }
}
