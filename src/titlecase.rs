use std::borrow::Cow;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{OptionsLoadingError, OptionsSavingError};
use crate::exceptions::ExceptionSet;
use crate::tokenizer::{is_capital_word, tokenize, Token};
use crate::utils::{
    capitalize_word_parts, join_with_spaces, uppercase_first_letter,
    uppercase_first_lowercase_rest,
};

lazy_static! {
    static ref JUST_LETTERS: Regex = Regex::new(r"^\p{L}+$").unwrap();
}

/// Settings for a title case conversion.
///
/// The defaults are: no exception words, case-insensitive exception matching,
/// and fully capitalized words are converted like any other word.
///
/// Options can be stored as JSON:
///
/// ```json
/// {"exceptions": ["the", "of"], "caseSensitiveExceptions": false, "skipCapitalWords": true}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleCaseOptions {
    /// Words whose casing is kept (or lowercased) instead of being title cased.
    pub exceptions: Vec<String>,
    /// Match exception words with their exact casing and keep it in the output.
    pub case_sensitive_exceptions: bool,
    /// Leave fully capitalized words such as acronyms untouched.
    pub skip_capital_words: bool,
}

impl TitleCaseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exceptions<I>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exceptions = exceptions.into_iter().map(Into::into).collect();
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_exceptions = case_sensitive;
        self
    }

    pub fn skip_capital_words(mut self, skip: bool) -> Self {
        self.skip_capital_words = skip;
        self
    }

    /// Save these options into a file with the given filename, as JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OptionsSavingError> {
        let path = path.as_ref();
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized).map_err(|source| OptionsSavingError::WriteFile {
            path: path.to_owned(),
            source,
        })
    }

    /// Load previously saved options from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptionsLoadingError> {
        let path = path.as_ref();
        let string = fs::read_to_string(path).map_err(|source| OptionsLoadingError::ReadFile {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&string).map_err(|source| OptionsLoadingError::Deserialize {
            path: path.to_owned(),
            source,
        })
    }
}

/// How a single word is treated during conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordKind {
    /// A fully capitalized word, kept as is because capital words are skipped.
    Acronym,
    /// One of the configured exception words.
    Exception,
    /// Nothing but letters.
    Letters,
    /// Anything else: punctuation, digits, apostrophes, hyphens...
    Punctuated,
}

/// Title case converter bound to a fixed set of exceptions.
///
/// The exception set is built once, when the converter is created, and is
/// never modified afterwards, so a converter can be shared between threads.
///
/// ```
/// use titlecase::TitleCaser;
///
/// let caser = TitleCaser::with_exceptions(vec!["the"]);
/// assert_eq!(caser.title_case("the end of THE story"), "The End Of the Story");
/// ```
#[derive(Debug, Clone)]
pub struct TitleCaser {
    options: TitleCaseOptions,
    exceptions: ExceptionSet,
}

impl TitleCaser {
    pub fn new(options: TitleCaseOptions) -> Self {
        let exceptions = ExceptionSet::new(&options.exceptions, options.case_sensitive_exceptions);
        trace!(
            words = options.exceptions.len(),
            forms = exceptions.len(),
            "built exception set"
        );

        Self {
            options,
            exceptions,
        }
    }

    /// Converter with case-insensitive exceptions that does not skip capital words.
    pub fn with_exceptions<I>(exceptions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(TitleCaseOptions::new().with_exceptions(exceptions))
    }

    pub fn options(&self) -> &TitleCaseOptions {
        &self.options
    }

    /// Convert a sentence according to all of this converter's options.
    pub fn convert(&self, sentence: &str) -> String {
        title_case_tokens(
            tokenize(sentence),
            &self.exceptions,
            self.options.skip_capital_words,
        )
    }

    /// Convert a sentence respecting the exceptions, converting capital words too.
    pub fn title_case(&self, sentence: &str) -> String {
        title_case_tokens(tokenize(sentence), &self.exceptions, false)
    }

    /// Convert a sentence respecting the exceptions and leaving capital words alone.
    pub fn title_case_skipping_capitals(&self, sentence: &str) -> String {
        title_case_tokens(tokenize(sentence), &self.exceptions, true)
    }
}

impl Default for TitleCaser {
    fn default() -> Self {
        Self::new(TitleCaseOptions::default())
    }
}

impl From<TitleCaseOptions> for TitleCaser {
    fn from(options: TitleCaseOptions) -> Self {
        Self::new(options)
    }
}

fn title_case_tokens(
    tokens: Vec<Token<'_>>,
    exceptions: &ExceptionSet,
    skip_capital_words: bool,
) -> String {
    // acronyms are detected on the original text, before any lowercasing
    let words: Vec<_> = tokens
        .iter()
        .map(|token| {
            if skip_capital_words && is_capital_word(token.original) {
                Cow::Borrowed(token.original)
            } else {
                transform_word(&token.normalized, exceptions, skip_capital_words)
            }
        })
        .collect();

    let sentence = join_with_spaces(words.iter());

    // with exceptions around, the first word may have been left in lowercase
    if exceptions.is_empty() {
        sentence
    } else {
        uppercase_first_letter(&sentence)
    }
}

/// Decide how a word is going to be converted.
///
/// Capital words are only recognized as acronyms when `skip_capital_words` is set.
pub fn classify(word: &str, exceptions: &ExceptionSet, skip_capital_words: bool) -> WordKind {
    if skip_capital_words && is_capital_word(word) {
        WordKind::Acronym
    } else if exceptions.contains(word) {
        WordKind::Exception
    } else if JUST_LETTERS.is_match(word) {
        WordKind::Letters
    } else {
        WordKind::Punctuated
    }
}

/// Convert a single word.
///
/// Acronyms are returned unchanged. Exceptions are returned unchanged when they
/// are spelled exactly as given or capital words are skipped, and lowercased
/// otherwise.
/// Other words get their first letter, and every letter following punctuation,
/// uppercased and the rest lowercased.
pub fn transform_word<'a>(
    word: &'a str,
    exceptions: &ExceptionSet,
    skip_capital_words: bool,
) -> Cow<'a, str> {
    match classify(word, exceptions, skip_capital_words) {
        WordKind::Acronym => Cow::Borrowed(word),
        WordKind::Exception if skip_capital_words || exceptions.contains_exact(word) => {
            Cow::Borrowed(word)
        }
        WordKind::Exception => Cow::Owned(word.to_lowercase()),
        WordKind::Letters => Cow::Owned(uppercase_first_lowercase_rest(word)),
        WordKind::Punctuated => Cow::Owned(capitalize_word_parts(word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_exceptions() -> ExceptionSet {
        ExceptionSet::default()
    }

    #[test]
    fn classification_order() {
        let exceptions = ExceptionSet::new(&["NASA", "mc.beth"], false);

        assert_eq!(classify("NASA", &exceptions, true), WordKind::Acronym);
        assert_eq!(classify("NASA", &exceptions, false), WordKind::Exception);
        assert_eq!(classify("Mc.Beth,", &exceptions, false), WordKind::Exception);
        assert_eq!(classify("FBI", &exceptions, false), WordKind::Letters);
        assert_eq!(classify("Élan", &exceptions, false), WordKind::Letters);
        assert_eq!(classify("d'marco", &exceptions, false), WordKind::Punctuated);
        assert_eq!(classify("x2", &exceptions, false), WordKind::Punctuated);
        assert_eq!(classify("FBI,", &exceptions, true), WordKind::Acronym);
    }

    #[test]
    fn letters_only() {
        let none = no_exceptions();
        assert_eq!(transform_word("tEsT", &none, false), "Test");
        assert_eq!(transform_word("TEST", &none, false), "Test");
        assert_eq!(transform_word("a", &none, false), "A");
        assert_eq!(transform_word("ÀPROPOS", &none, false), "Àpropos");
        assert_eq!(transform_word("łódź", &none, false), "Łódź");
    }

    #[test]
    fn punctuated_words() {
        let none = no_exceptions();
        assert_eq!(transform_word("tEsT,", &none, false), "Test,");
        assert_eq!(transform_word("(TEST.TEST),", &none, false), "(Test.Test),");
        assert_eq!(transform_word("<<teSt<<,", &none, false), "<<Test<<,");
        assert_eq!(transform_word("teSt_tEst,", &none, false), "Test_Test,");
        assert_eq!(transform_word("tes!te,", &none, false), "Tes!Te,");
        assert_eq!(transform_word("`test`", &none, false), "`Test`");
        assert_eq!(transform_word("\"test\"", &none, false), "\"Test\"");
    }

    #[test]
    fn all_punctuation_is_unchanged() {
        let none = no_exceptions();
        assert_eq!(transform_word("...", &none, false), "...");
        assert_eq!(transform_word("--", &none, false), "--");
    }

    #[test]
    fn case_insensitive_exceptions_are_lowercased() {
        let exceptions = ExceptionSet::new(&["the", "<<teSt<<"], false);
        assert_eq!(transform_word("The", &exceptions, false), "the");
        assert_eq!(transform_word("(THE)", &exceptions, false), "(the)");
        assert_eq!(transform_word("<<TEST<<,", &exceptions, false), "<<test<<,");
    }

    #[test]
    fn case_insensitive_exceptions_spelled_as_given_are_kept() {
        let exceptions = ExceptionSet::new(&["<<teSt<<", "NASA"], false);
        assert_eq!(transform_word("<<teSt<<,", &exceptions, false), "<<teSt<<,");
        assert_eq!(transform_word("(NASA)", &exceptions, false), "(NASA)");
        assert_eq!(transform_word("Nasa", &exceptions, false), "nasa");
    }

    #[test]
    fn case_sensitive_exceptions_are_preserved() {
        let exceptions = ExceptionSet::new(&["teSt_tEst"], true);
        assert_eq!(transform_word("teSt_tEst", &exceptions, false), "teSt_tEst");
        assert_eq!(transform_word("'teSt_tEst'", &exceptions, false), "'teSt_tEst'");
        assert_eq!(transform_word("test_test", &exceptions, false), "Test_Test");
    }

    #[test]
    fn exceptions_are_kept_when_skipping_capitals() {
        let exceptions = ExceptionSet::new(&["the"], false);
        assert_eq!(transform_word("The", &exceptions, true), "The");
    }

    #[test]
    fn acronyms() {
        let none = no_exceptions();
        assert_eq!(transform_word("TEST???", &none, true), "TEST???");
        assert_eq!(transform_word("TEST???", &none, false), "Test???");
        assert_eq!(transform_word("tEsT!!", &none, true), "Test!!");
    }

    #[test]
    fn converter_entry_points() {
        let caser = TitleCaser::new(
            TitleCaseOptions::new()
                .with_exceptions(vec!["<<teSt<<", "teSt_tEst"])
                .case_sensitive(true)
                .skip_capital_words(true),
        );
        let input = "TEST <<teSt<<, teSt_tEst mc.beTh";

        assert_eq!(caser.convert(input), "TEST <<teSt<<, teSt_tEst Mc.Beth");
        assert_eq!(caser.title_case_skipping_capitals(input), "TEST <<teSt<<, teSt_tEst Mc.Beth");
        assert_eq!(caser.title_case(input), "Test <<teSt<<, teSt_tEst Mc.Beth");
        assert!(caser.options().skip_capital_words);
    }

    #[test]
    fn default_converter() {
        let caser = TitleCaser::default();
        assert_eq!(caser.convert("hello  WORLD "), "Hello World");
        assert_eq!(caser.convert(""), "");
    }

    #[test]
    fn options_from_json() {
        let options: TitleCaseOptions =
            serde_json::from_str(r#"{"exceptions": ["the"], "skipCapitalWords": true}"#).unwrap();
        assert_eq!(
            options,
            TitleCaseOptions::new()
                .with_exceptions(vec!["the"])
                .skip_capital_words(true)
        );

        let options: TitleCaseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TitleCaseOptions::default());
    }
}
