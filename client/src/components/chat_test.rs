use super::*;

#[test]
fn markdown_renders_emphasis_and_lists() {
    let html = render_markdown_html("**bold**\n\n- one\n- two");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn markdown_strips_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}

#[test]
fn markdown_renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}
