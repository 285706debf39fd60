use regex::Regex;

/// A piece of input awaiting classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Splits `input` against the composed expression.
///
/// For every match, the text since the previous match and each
/// participating capture group become candidates, in that order; the rest
/// of the match is dropped. Empty pieces are never emitted. Without an
/// expression the whole input is one candidate.
pub fn split<'a>(regex: Option<&Regex>, input: &'a str) -> Vec<Candidate<'a>> {
    let mut out = Vec::new();
    let mut push = |text: &'a str, offset: usize| {
        if !text.is_empty() {
            out.push(Candidate { text, offset });
        }
    };

    let Some(regex) = regex else {
        push(input, 0);
        return out;
    };

    let mut last = 0;
    for caps in regex.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push(&input[last..whole.start()], last);
        for group in caps.iter().skip(1).flatten() {
            push(group.as_str(), group.start());
        }
        last = whole.end();
    }
    push(&input[last..], last);

    out
}
