use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Optional leading punctuation, a run of capitals or digits, then any mix of
/// capitals, digits and punctuation.
const CAPITAL_WORD: &str = r"[\p{P}\p{S}]*[\p{Lu}\p{Nd}]+[\p{P}\p{S}\p{Lu}\p{Nd}]*";

lazy_static! {
    static ref CAPITAL_WORD_RE: Regex = Regex::new(&format!("^{}$", CAPITAL_WORD)).unwrap();
    static ref UPPER_SENTENCE_RE: Regex =
        Regex::new(&format!(r"^\s*{0}(?:\s+{0})*\s*$", CAPITAL_WORD)).unwrap();
}

/// Whether the token is made of capital letters and digits, possibly
/// surrounded or interspersed with punctuation, e.g. `NASA`, `(U.S.A.),` or `TEST???`.
pub fn is_capital_word(token: &str) -> bool {
    CAPITAL_WORD_RE.is_match(token)
}

/// Whether every whitespace-separated chunk of the sentence is a capital word.
pub fn is_upper_sentence(sentence: &str) -> bool {
    UPPER_SENTENCE_RE.is_match(sentence)
}

/// Split a sentence into tokens.
///
/// Outer whitespace is dropped and inner runs of whitespace act as a single
/// separator. Empty input yields a single empty token. When the sentence is
/// entirely in capitals, every token is normalized to lowercase.
pub(crate) fn tokenize(sentence: &str) -> Vec<Token> {
    let lowercase = is_upper_sentence(sentence);
    if lowercase {
        trace!("sentence is fully capitalized, lowercasing it");
    }

    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return vec![Token::new(trimmed, lowercase)];
    }

    trimmed
        .split_whitespace()
        .map(|word| Token::new(word, lowercase))
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    pub original: &'a str,
    pub normalized: Cow<'a, str>,
}

impl<'a> Token<'a> {
    pub fn new(original: &'a str, lowercase: bool) -> Self {
        let normalized = if lowercase {
            // titlecase letters such as `ǅ` are not uppercase but still fold
            let lowered = original.to_lowercase();
            if lowered == original {
                Cow::Borrowed(original)
            } else {
                Cow::Owned(lowered)
            }
        } else {
            Cow::Borrowed(original)
        };

        Self {
            original,
            normalized,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}
