//! Markdown normalization of model replies.
//!
//! Replies that already carry markdown structure pass through untouched.
//! Bare prose gets a minimal lift: short colon-terminated lines become bold
//! sub-headings. The marker set and the 50-character threshold are exact
//! compatibility requirements; changing either changes rendered output.

/// Substrings whose presence anywhere in the reply means "already formatted".
const MARKDOWN_MARKERS: &[&str] = &["**", "*", "#", "-", "1."];

/// A trimmed line ending in ':' shorter than this many chars is promoted
/// to a bold heading.
const HEADING_MAX_CHARS: usize = 50;

/// Ensure a reply has minimal markdown structure.
///
/// Total over all inputs. Applying it twice is a no-op: any promotion on
/// the first pass injects `**`, which short-circuits the second.
pub fn normalize(raw: &str) -> String {
    if MARKDOWN_MARKERS.iter().any(|m| raw.contains(m)) {
        return raw.to_string();
    }

    let mut formatted: Vec<String> = Vec::new();
    for line in raw.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            formatted.push(String::new());
        } else if line.ends_with(':') && line.chars().count() < HEADING_MAX_CHARS {
            formatted.push(format!("**{}**", line));
        } else {
            formatted.push(line.to_string());
        }
    }
    formatted.join("\n")
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn short_colon_line_becomes_bold() {
        assert_eq!(normalize("Summary:\nDetails here"), "**Summary:**\nDetails here");
    }

    #[test]
    fn existing_bold_passes_through() {
        let raw = "Has **bold** already\nSummary:";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn any_marker_short_circuits() {
        for raw in [
            "a bullet - here\nTitle:",
            "# Heading\nTitle:",
            "1. first item\nTitle:",
            "emphasis *word*\nTitle:",
        ] {
            assert_eq!(normalize(raw), raw);
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn blank_lines_are_preserved() {
        assert_eq!(normalize("Tips:\n\nBe specific"), "**Tips:**\n\nBe specific");
    }

    #[test]
    fn long_colon_line_is_left_alone() {
        let line = "This colon terminated line is definitely longer than fifty characters:";
        assert!(line.chars().count() >= 50);
        assert_eq!(normalize(line), line);
    }

    #[test]
    fn colon_line_at_threshold_is_left_alone() {
        let line = format!("{}:", "x".repeat(49));
        assert_eq!(line.chars().count(), 50);
        assert_eq!(normalize(&line), line);
    }

    #[test]
    fn colon_line_just_under_threshold_is_promoted() {
        let line = format!("{}:", "x".repeat(48));
        assert_eq!(line.chars().count(), 49);
        assert_eq!(normalize(&line), format!("**{}**", line));
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(normalize("  padded text  \n  Title:  "), "padded text\n**Title:**");
    }

    #[test]
    fn second_application_is_noop() {
        for raw in [
            "Summary:\nDetails here",
            "plain prose, nothing to do",
            "",
            "Has **bold** already",
            "A:\nB:\nC:",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn threshold_counts_chars_not_bytes() {
        // 20 two-byte chars plus ':' is 41 bytes but 21 chars — promoted.
        let line = format!("{}:", "é".repeat(20));
        assert_eq!(normalize(&line), format!("**{}**", line));
    }
}
