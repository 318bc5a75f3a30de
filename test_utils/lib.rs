pub mod constants;

use std::fs;
use std::path::Path;

use constants::{COMMENT_PREFIX, EXPECTED_PREFIX, PHRASE_PREFIX};
use plaintext_matcher::{highlight_phrases, TokenSequence, DEFAULT_HIGHLIGHT_CONFIG};

/// A document fixture: the body text, the phrases to highlight in it, and the
/// marked runs expected in the output, in document order.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub text: String,
    pub phrases: Vec<String>,
    pub expected: Vec<String>,
}

fn directive_values(content: &str, prefix: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            line.trim_start()
                .strip_prefix(prefix)
                .map(|value| value.trim().to_string())
        })
        .collect()
}

/// Load a fixture file, separating `PHRASE:`, `EXPECTED:` and `COMMENT:`
/// lines from the document body.
pub fn load_fixture(file_path: &Path) -> Fixture {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Filter out lines starting with 'PHRASE:', 'EXPECTED:', or 'COMMENT:'
    let text = content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(PHRASE_PREFIX)
                && !line.starts_with(EXPECTED_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Fixture {
        text,
        phrases: directive_values(&content, PHRASE_PREFIX),
        expected: directive_values(&content, EXPECTED_PREFIX),
    }
}

/// Pull the text between each `start_tag` / `end_tag` pair out of marked output.
pub fn extract_marked_runs(marked: &str, start_tag: &str, end_tag: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut rest = marked;

    while let Some(start) = rest.find(start_tag) {
        let after_start = &rest[start + start_tag.len()..];
        match after_start.find(end_tag) {
            Some(end) => {
                runs.push(after_start[..end].to_string());
                rest = &after_start[end + end_tag.len()..];
            }
            None => break,
        }
    }

    runs
}

/// Highlight a fixture's phrases and return the marked runs alongside the
/// expected ones.
pub fn run_test_for_file(file_path: &Path) -> (Vec<String>, Vec<String>) {
    let fixture = load_fixture(file_path);
    let source = TokenSequence::from_text(&fixture.text);

    let marked = highlight_phrases(&source, &fixture.phrases, &DEFAULT_HIGHLIGHT_CONFIG)
        .expect("Failed to highlight fixture phrases");

    let runs = extract_marked_runs(
        &marked,
        DEFAULT_HIGHLIGHT_CONFIG.start_tag,
        DEFAULT_HIGHLIGHT_CONFIG.end_tag,
    );

    (runs, fixture.expected)
}

/// Build a synthetic multi-page document for benchmarking.
pub fn synthetic_document(pages: usize, words_per_page: usize) -> String {
    const VOCABULARY: [&str; 12] = [
        "the", "proposal", "would", "improve", "access", "for", "rural", "communities", "we",
        "agree", "with", "funding",
    ];

    (0..pages)
        .map(|page| {
            (0..words_per_page)
                .map(|i| VOCABULARY[(page * 7 + i * 5) % VOCABULARY.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
