//! Splits a query into words.

/// A maximal run of non-whitespace characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    /// The word as typed.
    pub text: &'a str,
    /// Lowercase form, used for vocabulary lookups.
    pub lower: String,
    /// Byte range of the word in the query.
    pub span: (usize, usize),
}

/// Split `input` on whitespace, keeping byte spans.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(word(input, s, idx));
                start = None;
            },
            (false, None) => start = Some(idx),
            _ => {},
        }
    }
    if let Some(s) = start {
        words.push(word(input, s, input.len()));
    }

    words
}

fn word(input: &str, start: usize, end: usize) -> Word<'_> {
    let text = &input[start..end];
    Word {
        text,
        lower: text.to_lowercase(),
        span: (start, end),
    }
}
