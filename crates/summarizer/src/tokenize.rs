use unicode_segmentation::UnicodeSegmentation;

// Longest first within each apostrophe style.
const CLITICS: &[&str] = &[
    "n't", "n’t", "'re", "’re", "'ll", "’ll", "'ve", "’ve", "'s", "’s", "'d", "’d", "'m", "’m",
];

/// Lowercase `text` and split it into word and punctuation tokens.
///
/// Word boundaries come from Unicode UAX #29, then two corrections are applied:
/// - English clitics become their own token (`"rust's"` -> `["rust", "'s"]`,
///   `"don't"` -> `["do", "n't"]`)
/// - hyphenated compounds stay whole (`"well-known"`)
///
/// Whitespace is dropped; punctuation and symbols come back as their own tokens, so
/// `"Cats are great."` yields `["cats", "are", "great", "."]`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let segments: Vec<&str> = lowered.split_word_bounds().collect();
    let mut tokens = Vec::with_capacity(segments.len());

    let mut i = 0;
    while i < segments.len() {
        let segment = segments[i];
        i += 1;
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        if !is_word_segment(segment) {
            tokens.push(segment.to_string());
            continue;
        }

        let mut word = segment.to_string();
        while i + 1 < segments.len() && segments[i] == "-" && is_word_segment(segments[i + 1]) {
            word.push('-');
            word.push_str(segments[i + 1]);
            i += 2;
        }
        push_word(&mut tokens, word);
    }

    tokens
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

fn push_word(tokens: &mut Vec<String>, word: String) {
    let split = CLITICS.iter().find_map(|clitic| {
        word.strip_suffix(clitic)
            .filter(|stem| stem.chars().last().is_some_and(char::is_alphanumeric))
            .map(str::len)
    });
    match split {
        Some(at) => {
            tokens.push(word[..at].to_string());
            tokens.push(word[at..].to_string());
        }
        None => tokens.push(word),
    }
}

/// A token is alphanumeric when it is non-empty and every char is a letter or digit
#[must_use]
pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
