use page_clipper::{extract_bytes, extract_bytes_with_options, ContentItem, Options, RichRun};

fn paragraph_text(items: &[ContentItem]) -> String {
    items
        .iter()
        .filter_map(|item| match item {
            ContentItem::Paragraph { runs } => Some(runs.iter().map(|r| r.text.as_str()).collect::<String>()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn utf8_bytes_without_declaration() {
    let items = extract_bytes("<p>naïve café</p>".as_bytes());
    assert_eq!(paragraph_text(&items), "naïve café");
}

#[test]
fn latin1_meta_charset() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 cr\xE8me</p></body></html>";
    assert_eq!(paragraph_text(&extract_bytes(html)), "Café crème");
}

#[test]
fn gbk_http_equiv_declaration() {
    let mut html =
        b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=gbk\"></head><body><h2>"
            .to_vec();
    // "标题" in GBK
    html.extend_from_slice(&[0xB1, 0xEA, 0xCC, 0xE2]);
    html.extend_from_slice(b"</h2></body></html>");

    assert_eq!(
        extract_bytes(&html),
        vec![ContentItem::Heading {
            level: 2,
            text: "标题".to_string()
        }]
    );
}

#[test]
fn invalid_bytes_degrade_to_replacement_characters() {
    let items = extract_bytes(b"<p>ok \xFF\xFE still ok</p>");
    let text = paragraph_text(&items);

    assert!(text.starts_with("ok "));
    assert!(text.contains('\u{FFFD}'));
    assert!(text.ends_with(" still ok"));
}

#[test]
fn bytes_respect_options() {
    let options = Options {
        base_url: Some("https://x.com/a/".to_string()),
        ..Options::default()
    };
    let items = extract_bytes_with_options(br#"<p><a href="b">link</a></p>"#, &options);

    assert_eq!(
        items,
        vec![ContentItem::Paragraph {
            runs: vec![RichRun::new("link", false, Some("https://x.com/a/b".to_string()))]
        }]
    );
}

#[test]
fn utf16_meta_declaration_decodes_as_utf8() {
    let html = b"<html><head><meta charset=\"utf-16\"></head><body><p>Hello world</p></body></html>";
    assert_eq!(paragraph_text(&extract_bytes(html)), "Hello world");

    let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-16BE\"><p>caf\xC3\xA9</p>";
    assert_eq!(paragraph_text(&extract_bytes(html)), "café");
}
