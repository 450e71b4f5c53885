use page_clipper::{extract, extract_with_options, ContentItem, Options};
use std::time::{Duration, Instant};

fn text_of(items: &[ContentItem]) -> String {
    serde_json::to_string(items).unwrap()
}

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let text = text_of(&extract("<p>text<div>more"));
    assert!(text.contains("text"));
    assert!(text.contains("more"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let items = extract("<p><div></p></div>");
    assert!(items.iter().all(|item| !item.is_break()));
}

#[test]
fn extract_does_not_panic_on_malformed_html_missing_closing_tags() {
    let items = extract("<html><body><article><h2>Heading<p>content");
    assert!(text_of(&items).contains("Heading"));
}

#[test]
fn extract_does_not_panic_on_malformed_html_broken_attributes() {
    let _ = extract("<div class=\"test id=broken>");
    let _ = extract("<img src=\"https://x.com/a.png");
    let _ = extract("<a href='https://x.com>unterminated");
}

#[test]
fn extract_handles_incomplete_entities() {
    assert!(text_of(&extract("&amp text &lt;")).contains("text"));
}

#[test]
fn extract_returns_empty_for_blank_input() {
    for html in ["", "   \n\t  ", "<html></html>", "<body></body>", "<!-- only a comment -->"] {
        assert!(extract(html).is_empty(), "expected no items for {html:?}");
    }
}

#[test]
fn extract_handles_null_bytes_gracefully() {
    let items = extract("<p>text\x00more</p>");
    assert_eq!(items.len(), 1);
}

#[test]
fn extract_handles_large_html_without_panic() {
    let target_size = 2 * 1024 * 1024;
    let chunk = "<p>Some repeated content for stress testing.</p>";
    let mut html = String::with_capacity(target_size + 128);
    html.push_str("<html><body><article>");
    while html.len() < target_size {
        html.push_str(chunk);
    }
    html.push_str("</article></body></html>");

    let start = Instant::now();
    let items = extract(&html);
    let elapsed = start.elapsed();

    assert!(!items.is_empty());
    assert!(elapsed < Duration::from_secs(30), "large HTML extraction took {elapsed:?}");
}

#[test]
fn extract_stops_descending_past_depth_ceiling() {
    let depth = 1000;
    let html = format!("{}DEEP_TEXT{}", "<span>".repeat(depth), "</span>".repeat(depth));

    assert!(extract(&html).is_empty());

    let options = Options {
        max_tree_depth: 4096,
        ..Options::default()
    };
    assert!(text_of(&extract_with_options(&html, &options)).contains("DEEP_TEXT"));
}

#[test]
fn extract_node_budget_returns_partial_output() {
    let html: String = (0..1000).map(|i| format!("<h2>Section {i}</h2>")).collect();
    let options = Options {
        max_nodes: 50,
        ..Options::default()
    };

    let items = extract_with_options(&html, &options);
    assert!(!items.is_empty());
    assert!(items.len() < 50);
    assert_eq!(
        items[0],
        ContentItem::Heading {
            level: 2,
            text: "Section 0".to_string()
        }
    );
}

#[test]
fn extract_skips_script_content() {
    let html = r#"<html><body>
        <script>alert('xss')</script>
        <article><p>Safe content here</p></article>
    </body></html>"#;

    let text = text_of(&extract(html));
    assert!(!text.contains("alert"));
    assert!(text.contains("Safe content"));
}

#[test]
fn extract_handles_unicode_text() {
    let html = "<h1>日本語のタイトル</h1><p>Ünïcödé 🚀 text</p>";
    let text = text_of(&extract(html));

    assert!(text.contains("日本語のタイトル"));
    assert!(text.contains("🚀"));
}
