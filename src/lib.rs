//! Convert arbitrary text into Title Case.
//!
//! Every word gets its first letter uppercased and the rest lowercased. Words
//! with inner punctuation, like `mc.beth` or `d'marco`, get a capital after
//! every punctuation mark too. Sentences written entirely in capitals are
//! treated as if they were written in lowercase.
//!
//! # Basic usage
//!
//! ```
//! use titlecase::title_case;
//!
//! assert_eq!(title_case("   the  QUICK brown fox "), "The Quick Brown Fox");
//! assert_eq!(title_case("d'marcO'aires, hU-zIn-xun"), "D'Marco'Aires, Hu-Zin-Xun");
//! assert_eq!(title_case("TEST TEST"), "Test Test");
//! ```
//!
//! # Exceptions
//!
//! Exception words are left out of the conversion. By default they are matched
//! regardless of case: a word spelled exactly like the exception keeps its
//! casing, any other spelling is written in lowercase. The very first letter
//! of the sentence is always capitalized. They are also recognized when
//! wrapped in brackets or quotes, or followed by a punctuation mark.
//!
//! ```
//! use titlecase::title_case_with_exceptions;
//!
//! let converted = title_case_with_exceptions("the other words will be the words", &["the"]);
//! assert_eq!(converted, "The Other Words Will Be the Words");
//! ```
//!
//! Case-sensitive exceptions keep their exact spelling, and capital words such
//! as acronyms can be left untouched:
//!
//! ```
//! use titlecase::{title_case_with, TitleCaseOptions};
//!
//! let options = TitleCaseOptions::new()
//!     .with_exceptions(vec!["iPhone"])
//!     .case_sensitive(true)
//!     .skip_capital_words(true);
//!
//! assert_eq!(
//!     title_case_with("the NASA (iPhone) app", &options),
//!     "The NASA (iPhone) App"
//! );
//! ```
//!
//! To convert many sentences with the same options, build a [`TitleCaser`]
//! once and reuse it.

mod errors;
mod exceptions;
mod titlecase;
mod tokenizer;
mod utils;

pub use crate::errors::{OptionsLoadingError, OptionsSavingError};
pub use crate::exceptions::ExceptionSet;
pub use crate::titlecase::{classify, transform_word, TitleCaseOptions, TitleCaser, WordKind};
pub use crate::tokenizer::{is_capital_word, is_upper_sentence};

/// Convert a sentence to title case, without exceptions.
pub fn title_case(text: &str) -> String {
    TitleCaser::default().convert(text)
}

/// Convert a sentence to title case, matching the exception words regardless of case.
pub fn title_case_with_exceptions<I>(text: &str, exceptions: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let options = TitleCaseOptions::new()
        .with_exceptions(exceptions.into_iter().map(|word| word.as_ref().to_owned()));
    TitleCaser::new(options).convert(text)
}

/// Convert a sentence to title case with the given options.
pub fn title_case_with(text: &str, options: &TitleCaseOptions) -> String {
    TitleCaser::new(options.clone()).convert(text)
}
