use super::*;

#[test]
fn renders_headings_and_lists() {
    let html = render_markdown_html("## Cookies\n\n- Block all cookies\n- Delete existing cookies\n");
    assert!(html.contains("<h2>Cookies</h2>"));
    assert!(html.contains("<li>Block all cookies</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("Hello <script>alert(1)</script>\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("Hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Cookie | Purpose |\n|---|---|\n| lang | Language |\n");
    assert!(html.contains("<table>"));
}
