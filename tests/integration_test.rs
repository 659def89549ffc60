use std::io::Write;

use tempfile::NamedTempFile;
use textlens::analysis::{class_counts, TokenClass};
use textlens::input::LoadError;
use textlens::report::render_report;
use textlens::source::{load_source, parse_source};
use textlens::{analyze, tokenize, Analyzer, ReportConfig};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. \
The dog was not amused... it barked at the fox! Visit www.example.org or \
email fox@example.com; prices rose 10% to $30 in 2.5 days. #foxes are \
state-of-the-art tricksters, aren't they?";

#[test]
fn end_to_end_analysis() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let command = parse_source(&file.path().display().to_string());
    let doc = load_source(&command).expect("Should load file successfully");
    assert_eq!(doc.text, SAMPLE);

    let result = analyze(&doc.text);
    assert_eq!(result.sentence_count, 5);
    assert_eq!(result.word_count, tokenize(&doc.text).len());
    assert!(result.top_words.len() <= 10);
    // Case-sensitive, and ties keep first-seen order.
    let leaders: Vec<(&str, usize)> = result.top_words[..4]
        .iter()
        .map(|(t, c)| (t.as_str(), *c))
        .collect();
    assert_eq!(leaders, vec![("The", 2), ("fox", 2), ("the", 2), ("dog", 2)]);
    assert!(result.top_words.windows(2).all(|w| w[0].1 >= w[1].1));

    let report = render_report(&result, 10, &ReportConfig::default(), None);
    assert!(report.contains(&format!("Word count: {}", result.word_count)));
    assert!(report.contains(" 1. The                  -   2 occurrences"));
}

#[test]
fn special_tokens_survive_whole() {
    let tokens = tokenize(SAMPLE);
    for expected in [
        "www.example.org",
        "fox@example.com",
        "10%",
        "$30",
        "2.5",
        "#foxes",
        "state-of-the-art",
        "aren't",
    ] {
        assert!(
            tokens.iter().any(|t| t == expected),
            "missing token {expected}"
        );
    }
    for fragment in ["10", "30", "state", "art", "example", "foxes"] {
        assert!(
            !tokens.iter().any(|t| t == fragment),
            "fragment {fragment} should have been claimed by an earlier pass"
        );
    }
}

#[test]
fn every_class_is_reported() {
    let (_, tokens) = Analyzer::default().analyze_classified(
        "a@b.io https://x.y $1 2% #t 3.4 up-down word",
    );
    let classes: Vec<TokenClass> = class_counts(&tokens).into_iter().map(|(c, _)| c).collect();
    assert_eq!(classes, TokenClass::ALL.to_vec());
}

#[test]
fn empty_file_analyzes_to_zero() {
    let file = NamedTempFile::new().unwrap();
    let doc = load_source(&parse_source(&file.path().display().to_string())).unwrap();

    let result = analyze(&doc.text);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.sentence_count, 0);
    assert!(result.top_words.is_empty());
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let result = load_source(&parse_source("@does_not_exist_4242.txt"));
    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn analysis_is_thread_safe() {
    let analyzer = Analyzer::default();
    let expected = analyzer.analyze(SAMPLE);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyzer.analyze(SAMPLE)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
