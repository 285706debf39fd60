#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relex::{Classified, MatchMode, Rules, Scanner};

const FRAGMENTS: &[&str] = &[
    r"[a-z]+",
    r"[0-9]+(?:\.[0-9]+)?",
    r"\s+",
    r"[-+*/=<>!]=?",
    r#""[^"]*""#,
    r"\w+",
    r"[(){}\[\]]",
    r"(a)(b)?",
    r"x*",
    r".",
    r"(",
];

#[derive(Debug, Arbitrary)]
struct Case {
    mode: MatchMode,
    catchable: Vec<u8>,
    non_catchable: Vec<u8>,
    input: String,
}

struct Fuzzed {
    mode: MatchMode,
    catchable: Vec<&'static str>,
    non_catchable: Vec<&'static str>,
}

fn pick(indices: &[u8]) -> Vec<&'static str> {
    indices
        .iter()
        .take(4)
        .map(|i| FRAGMENTS[*i as usize % FRAGMENTS.len()])
        .collect()
}

impl Rules for Fuzzed {
    type Kind = usize;
    type Value = String;

    fn catchable_patterns(&self) -> &[&str] {
        &self.catchable
    }

    fn non_catchable_patterns(&self) -> &[&str] {
        &self.non_catchable
    }

    fn classify(&self, text: &str) -> Classified<usize, String> {
        Classified::new(text.len())
    }

    fn match_mode(&self) -> MatchMode {
        self.mode
    }
}

fuzz_target!(|case: Case| {
    let scanner = Scanner::new(Fuzzed {
        mode: case.mode,
        catchable: pick(&case.catchable),
        non_catchable: pick(&case.non_catchable),
    });
    let stream = scanner.tokenize(&case.input);

    let mut end = 0;
    for token in stream.iter() {
        assert!(!token.is_empty());
        assert!(token.position() >= end);
        assert_eq!(stream.slice(token), token.value().as_str());
        end = token.position() + token.len();
    }
    assert!(end <= case.input.len());

    if scanner.compile().is_err() && !case.input.is_empty() {
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.source(), stream.tokens()[0].value().as_str());
    }
});
