//! Text ordering for column sorting.
//!
//! Approximates the root-locale collation used by browser `localeCompare`.
//! Text is decomposed (NFD) and compared in three passes:
//!
//! 1. base characters, case-insensitively, with whitespace and punctuation
//!    ahead of digits and digits ahead of letters,
//! 2. accents, an unaccented letter first,
//! 3. case, lowercase first.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Other,
}

fn class_of(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_ascii_punctuation() || (!ch.is_alphanumeric() && !ch.is_control()) {
        CharClass::Punctuation
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// One base character with the combining marks that follow it.
#[derive(Debug)]
struct Element {
    class: CharClass,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

fn elements(text: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(text.len());
    for ch in text.nfd() {
        if is_combining_mark(ch)
            && let Some(last) = out.last_mut()
        {
            last.marks.push(ch);
            continue;
        }
        out.push(Element {
            class: class_of(ch),
            base: fold(ch),
            marks: Vec::new(),
            upper: ch.is_uppercase(),
        });
    }
    out
}

pub fn compare(left: &str, right: &str) -> Ordering {
    let left_elements = elements(left);
    let right_elements = elements(right);

    let primary = left_elements
        .iter()
        .map(|element| (element.class, element.base))
        .cmp(right_elements.iter().map(|element| (element.class, element.base)));
    let secondary = || {
        left_elements
            .iter()
            .map(|element| element.marks.as_slice())
            .cmp(right_elements.iter().map(|element| element.marks.as_slice()))
    };
    let tertiary = || {
        left_elements
            .iter()
            .map(|element| element.upper)
            .cmp(right_elements.iter().map(|element| element.upper))
    };

    primary
        .then_with(secondary)
        .then_with(tertiary)
        .then_with(|| left.cmp(right))
}
