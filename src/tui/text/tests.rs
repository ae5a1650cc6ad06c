use super::{MessageSegment, render_markdown_line, split_segments, wrap_message};

#[test]
fn split_segments_empty() {
    assert!(split_segments("").is_empty());
}

#[test]
fn split_segments_text_only() {
    let segs = split_segments("Hello world");
    assert_eq!(segs.len(), 1);
    assert!(matches!(&segs[0], MessageSegment::Text("Hello world")));
}

#[test]
fn split_segments_single_code_block() {
    let segs = split_segments("```text\nHook -> Insight -> CTA\n```");
    assert_eq!(segs.len(), 1);
    match &segs[0] {
        MessageSegment::CodeBlock { lang, code } => {
            assert_eq!(*lang, "text");
            assert_eq!(*code, "Hook -> Insight -> CTA");
        }
        _ => panic!("expected CodeBlock"),
    }
}

#[test]
fn split_segments_code_block_without_lang() {
    let segs = split_segments("```\ntemplate body\n```");
    assert_eq!(segs.len(), 1);
    match &segs[0] {
        MessageSegment::CodeBlock { lang, code } => {
            assert!(lang.is_empty());
            assert_eq!(*code, "template body");
        }
        _ => panic!("expected CodeBlock"),
    }
}

#[test]
fn split_segments_unclosed_code_block() {
    let segs = split_segments("```text\nDear {name},");
    assert_eq!(segs.len(), 1);
    match &segs[0] {
        MessageSegment::CodeBlock { lang, code } => {
            assert_eq!(*lang, "text");
            assert_eq!(*code, "Dear {name},");
        }
        _ => panic!("expected CodeBlock"),
    }
}

#[test]
fn split_segments_text_and_code() {
    let segs = split_segments("Use this template:\n\n```\nHi {name}!\n```\n\nAdapt as needed.");
    assert_eq!(segs.len(), 3);
    assert!(matches!(&segs[0], MessageSegment::Text(t) if t.contains("Use this template")));
    assert!(matches!(&segs[1], MessageSegment::CodeBlock { code, .. } if *code == "Hi {name}!"));
    assert!(matches!(&segs[2], MessageSegment::Text(t) if t.contains("Adapt as needed.")));
}

#[test]
fn split_segments_multiple_code_blocks() {
    let segs = split_segments("```a\n1\n```\n\n```b\n2\n```");
    assert_eq!(segs.len(), 3);
    assert!(
        matches!(&segs[0], MessageSegment::CodeBlock { lang, code } if *lang == "a" && *code == "1")
    );
    assert!(matches!(&segs[1], MessageSegment::Text(t) if *t == "\n\n"));
    assert!(
        matches!(&segs[2], MessageSegment::CodeBlock { lang, code } if *lang == "b" && *code == "2")
    );
}

#[test]
fn render_plain_line() {
    let spans = render_markdown_line("hello");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content.as_ref(), "hello");
}

#[test]
fn render_bold() {
    use ratatui::style::Modifier;
    let spans = render_markdown_line("**bold** text");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].content.as_ref(), "bold");
    assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(spans[1].content.as_ref(), " text");
}

#[test]
fn render_unterminated_bold_is_literal() {
    let spans = render_markdown_line("a ** b");
    let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(joined, "a ** b");
}

#[test]
fn render_inline_code() {
    let spans = render_markdown_line("Add `#OpenToWork` to it");
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[1].content.as_ref(), "#OpenToWork");
}

#[test]
fn render_heading_strips_hashes() {
    let spans = render_markdown_line("## Content Strategy");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content.as_ref(), "Content Strategy");
}

#[test]
fn render_bullet_list() {
    let spans = render_markdown_line("- post weekly");
    assert!(spans.len() >= 2);
    assert_eq!(spans[0].content.as_ref(), "• ");
}

#[test]
fn render_numbered_list() {
    let spans = render_markdown_line("1. audit your headline");
    assert!(spans.len() >= 2);
    assert_eq!(spans[0].content.as_ref(), "1 ");
}

#[test]
fn render_link_keeps_text() {
    let spans = render_markdown_line("See [Creator Hub](https://www.linkedin.com/creators/).");
    let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
    assert!(joined.contains("Creator Hub"));
    assert!(!joined.contains("https://"));
}

#[test]
fn render_table_row() {
    let spans = render_markdown_line("| day | theme |");
    let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
    assert!(joined.contains("day"));
    assert!(joined.contains("│"));
}

#[test]
fn wrap_message_preserves_newlines() {
    let lines = wrap_message("line1\nline2", 100);
    assert_eq!(lines, ["line1", "line2"]);
}

#[test]
fn wrap_message_wraps_long_line() {
    let lines = wrap_message("hello world test", 8);
    assert_eq!(lines, ["hello", "world", "test"]);
}

#[test]
fn wrap_message_empty_lines() {
    let lines = wrap_message("a\n\nb", 100);
    assert_eq!(lines, ["a", "", "b"]);
}
