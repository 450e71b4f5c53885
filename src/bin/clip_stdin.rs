//! Reads an HTML snapshot from stdin and prints the extracted content as JSON.
//!
//! Usage: `clip_stdin [--url <page-url>] [--blocks] < page.html`
//!
//! `--url` resolves relative links against the page address; `--blocks`
//! prints converted blocks instead of content items.

use page_clipper::{convert_all, extract_bytes_with_options, Options, Response};
use std::io::{self, Read};

fn usage() -> ! {
    eprintln!("usage: clip_stdin [--url <page-url>] [--blocks] < page.html");
    std::process::exit(2);
}

fn main() {
    let mut options = Options::default();
    let mut print_blocks = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => match args.next() {
                Some(url) => options.base_url = Some(url),
                None => usage(),
            },
            "--blocks" => print_blocks = true,
            _ => usage(),
        }
    }

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let content_items = extract_bytes_with_options(&html, &options);

    let output = if print_blocks {
        serde_json::to_string(&convert_all(&content_items))
    } else {
        serde_json::to_string(&Response { content_items })
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to encode output: {err}");
            std::process::exit(1);
        }
    }
}
