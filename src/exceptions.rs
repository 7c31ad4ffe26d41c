use indexmap::IndexSet;

const TRAILING_PUNCTUATION: [char; 8] = ['!', ',', '.', '/', '\\', ':', ';', '?'];
const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Set of words whose casing the title caser must not compute on its own.
///
/// Every word is also registered in its decorated forms: wrapped in `()`,
/// `[]`, `{}` or one of the quotes `"`, `'`, `` ` ``, or followed by one of
/// `! , . / \ : ; ?`. Lookups are whole-token comparisons, so `(word),` is not
/// recognized while `(word)` is.
///
/// A case-insensitive set also remembers the forms exactly as they were given,
/// so that tokens spelled like the exception can keep their casing.
#[derive(Debug, Clone, Default)]
pub struct ExceptionSet {
    exact: IndexSet<String>,
    folded: IndexSet<String>,
    words: usize,
    case_sensitive: bool,
}

impl ExceptionSet {
    /// Build the set from exception words.
    ///
    /// Unless `case_sensitive` is set, both the set and every lookup are lowercased.
    pub fn new<I>(words: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut set = Self {
            case_sensitive,
            ..Self::default()
        };

        for word in words {
            set.add_word(word.as_ref());
        }

        set
    }

    fn add_word(&mut self, word: &str) {
        self.words += 1;

        for form in decorated_forms(word) {
            if !self.case_sensitive {
                self.folded.insert(form.to_lowercase());
            }
            self.exact.insert(form);
        }
    }

    /// Whether the token is one of the exceptions, in any of its decorated forms.
    pub fn contains(&self, token: &str) -> bool {
        if self.case_sensitive {
            self.exact.contains(token)
        } else {
            self.folded.contains(&token.to_lowercase())
        }
    }

    /// Whether the token is spelled exactly like one of the exceptions,
    /// casing included, whatever the comparison mode.
    pub fn contains_exact(&self, token: &str) -> bool {
        self.exact.contains(token)
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True when no exception words were given at all.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of distinct registered forms, decorated ones included.
    pub fn len(&self) -> usize {
        if self.case_sensitive {
            self.exact.len()
        } else {
            self.folded.len()
        }
    }
}

fn decorated_forms(word: &str) -> Vec<String> {
    let mut forms =
        Vec::with_capacity(1 + BRACKETS.len() + TRAILING_PUNCTUATION.len() + QUOTES.len());

    forms.push(word.to_owned());
    for &(open, close) in &BRACKETS {
        forms.push(format!("{}{}{}", open, word, close));
    }
    for &punctuation in &TRAILING_PUNCTUATION {
        forms.push(format!("{}{}", word, punctuation));
    }
    for &quote in &QUOTES {
        forms.push(format!("{}{}{}", quote, word, quote));
    }

    forms
}
