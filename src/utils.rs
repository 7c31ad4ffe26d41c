use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOUNDARY: Regex = Regex::new(r"^[\p{P}\p{S}\s]$").unwrap();
}

/// Whether a character ends a "word part", so that the next one gets capitalized.
pub(crate) fn is_word_boundary(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() || c.is_ascii_whitespace();
    }

    let mut buffer = [0; 4];
    BOUNDARY.is_match(c.encode_utf8(&mut buffer))
}

/// Append the titlecase form of a character: `ß` becomes `Ss`, `ǆ` becomes `ǅ`.
///
/// Unlike uppercasing, this never turns a single letter into several capitals.
fn push_titlecase(string: &mut String, c: char) {
    let before = string.len();
    string.extend(
        unicode_case_mapping::to_titlecase(c)
            .iter()
            .take_while(|&&code| code != 0)
            .filter_map(|&code| char::from_u32(code)),
    );

    if string.len() == before {
        string.extend(c.to_uppercase());
    }
}

pub(crate) fn uppercase_first_letter(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            let mut string = String::with_capacity(s.len());
            push_titlecase(&mut string, f);
            string.push_str(c.as_str());
            string
        }
    }
}

pub(crate) fn uppercase_first_lowercase_rest(s: &str) -> String {
    let mut string = String::with_capacity(s.len());
    let mut c = s.chars();
    if let Some(f) = c.next() {
        push_titlecase(&mut string, f);
        string.extend(c.flat_map(char::to_lowercase));
    }
    string
}

/// Titlecase every character that starts the word or follows a boundary
/// character in the output, lowercase everything else.
pub(crate) fn capitalize_word_parts(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        let at_start = result.chars().next_back().map_or(true, is_word_boundary);
        if at_start {
            push_titlecase(&mut result, c);
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

pub(crate) fn join_with_spaces<I>(mut iter: I) -> String
where
    I: Iterator + Clone,
    I::Item: AsRef<str>,
{
    let length: usize = iter
        .clone()
        .map(|item| item.as_ref().len() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    let mut string = String::with_capacity(length);

    match iter.next() {
        Some(item) => string.push_str(item.as_ref()),
        None => return string,
    };

    for item in iter {
        string.push(' ');
        string.push_str(item.as_ref());
    }
    string
}
