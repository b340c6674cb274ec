//! UTF-16 characters and strings.
//!
//! Both kinds hold raw UTF-16 code units rather than a `String`: the point
//! is to check input that may contain unpaired surrogates, which a Rust
//! string cannot represent.

use std::fmt;
use std::iter::FusedIterator;

use super::{Kind, UnicodeCharacter16, UnicodeString16, ValueProperty};
use crate::error::FormatError;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

const NULL_CHARACTER: &str = "Null string is not Unicode Character";
const NULL_STRING: &str = "Null string is not a Unicode string";
const LONE_HIGH: &str = "Invalid single high surrogate code point.";
const LONE_LOW: &str = "Invalid single low surrogate code point.";
const NOT_SINGLE: &str = "This is not a single Unicode character.";

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// What is wrong with `units` as a single character, if anything.
fn character_problem(units: &[u16]) -> Option<String> {
    match *units {
        [unit] if unit == 0xFFFE || unit == 0xFFFF => {
            Some(format!("Disallowed end code point {unit:X}"))
        }
        [unit] if is_high_surrogate(unit) => Some(LONE_HIGH.to_owned()),
        [unit] if is_low_surrogate(unit) => Some(LONE_LOW.to_owned()),
        [_] => None,
        [high, _] if !is_high_surrogate(high) => Some(NOT_SINGLE.to_owned()),
        [_, low] if !is_low_surrogate(low) => Some(LONE_LOW.to_owned()),
        [_, _] => None,
        _ => Some(format!(
            "A Unicode 16 character should contain 1 or 2 code points. This has {}.",
            units.len()
        )),
    }
}

/// Rules for [`UnicodeCharacter16`].
///
/// One code unit that is neither a surrogate nor U+FFFE/U+FFFF, or a high
/// surrogate followed by a low surrogate.
#[derive(Debug)]
pub struct Utf16Character;

impl Kind for Utf16Character {
    type Held = Vec<u16>;
    const NAME: &'static str = "Unicode character";

    fn validate(input: Maybe<Vec<u16>>) -> Outcome<Vec<u16>> {
        let Some(units) = input.into_option() else {
            return Outcome::fail(NULL_CHARACTER);
        };
        match character_problem(&units) {
            Some(problem) => Outcome::fail(problem),
            None => Outcome::ok(units),
        }
    }

    fn fmt_held(value: &Vec<u16>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(value))
    }
}

impl UnicodeCharacter16 {
    /// The character `c`, which is always valid.
    ///
    /// ```
    /// use trackline::property::UnicodeCharacter16;
    ///
    /// let crab = UnicodeCharacter16::from_char('🦀');
    /// assert_eq!(crab.code_units(), &[0xD83Eu16, 0xDD80]);
    /// assert_eq!(crab.utf32(), 0x1F980);
    /// ```
    ///
    /// U+FFFE and U+FFFF are rejected by [`create`](Self::create) but
    /// accepted here, since a `char` is already a legal scalar value.
    pub fn from_char(c: char) -> Self {
        let mut buffer = [0u16; 2];
        Self::from_validated(c.encode_utf16(&mut buffer).to_vec())
    }

    /// The UTF-16 code units.
    pub fn code_units(&self) -> &[u16] {
        self.value()
    }

    /// The scalar value as a `char`.
    pub fn scalar(&self) -> char {
        char::decode_utf16(self.value().iter().copied())
            .next()
            .and_then(Result::ok)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// The scalar value as a UTF-32 code point.
    pub fn utf32(&self) -> u32 {
        u32::from(self.scalar())
    }

    /// The character encoded as UTF-8.
    pub fn utf8(&self) -> String {
        self.scalar().to_string()
    }
}

/// Rules for [`UnicodeString16`]: every character must be legal.
#[derive(Debug)]
pub struct Utf16Text;

impl Kind for Utf16Text {
    type Held = Vec<u16>;
    const NAME: &'static str = "Unicode string";

    fn validate(input: Maybe<Vec<u16>>) -> Outcome<Vec<u16>> {
        let Some(units) = input.into_option() else {
            return Outcome::fail(NULL_STRING);
        };
        let problem = Utf16Characters::new(&units).find_map(Result::err);
        match problem {
            Some(err) => Outcome::fail(err.message()),
            None => Outcome::ok(units),
        }
    }

    fn fmt_held(value: &Vec<u16>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf16_lossy(value))
    }
}

impl UnicodeString16 {
    /// Split raw code units into characters, lazily.
    ///
    /// The iterator yields one [`UnicodeCharacter16`] per character and
    /// stops for good after the first illegal code unit, which it reports
    /// as an error.
    ///
    /// ```
    /// use trackline::property::UnicodeString16;
    ///
    /// let units = [0x0061u16, 0xD83D, 0xDE00, 0xDC00, 0x0062];
    /// let mut chars = UnicodeString16::characters(&units);
    ///
    /// assert_eq!(chars.next().unwrap().unwrap().utf8(), "a");
    /// assert_eq!(chars.next().unwrap().unwrap().utf32(), 0x1F600);
    /// assert!(chars.next().unwrap().is_err());
    /// assert!(chars.next().is_none());
    /// ```
    pub fn characters(units: &[u16]) -> Utf16Characters<'_> {
        Utf16Characters::new(units)
    }

    /// The characters of this string.
    pub fn chars(&self) -> impl Iterator<Item = UnicodeCharacter16> + '_ {
        Utf16Characters::new(self.value()).map_while(Result::ok)
    }

    /// The UTF-16 code units.
    pub fn code_units(&self) -> &[u16] {
        self.value()
    }

    /// The string as UTF-32 code points.
    pub fn utf32(&self) -> Vec<u32> {
        self.chars().map(|c| c.utf32()).collect()
    }

    /// The string encoded as UTF-8.
    pub fn utf8(&self) -> String {
        self.chars().map(|c| c.scalar()).collect()
    }
}

/// Iterator returned by [`UnicodeString16::characters`].
#[derive(Debug, Clone)]
pub struct Utf16Characters<'a> {
    units: &'a [u16],
    failed: bool,
}

impl<'a> Utf16Characters<'a> {
    fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            failed: false,
        }
    }

    fn fail(&mut self, message: impl Into<String>) -> FormatError {
        self.failed = true;
        FormatError::new(Utf16Text::NAME, message)
    }
}

impl Iterator for Utf16Characters<'_> {
    type Item = Result<UnicodeCharacter16, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let units = self.units;
        let width = match *units {
            [] => return None,
            [first, ..] if is_low_surrogate(first) => return Some(Err(self.fail(LONE_LOW))),
            [first, second, ..] if is_high_surrogate(first) && is_low_surrogate(second) => 2,
            [first, ..] if is_high_surrogate(first) => return Some(Err(self.fail(LONE_HIGH))),
            _ => 1,
        };
        let (head, rest) = units.split_at(width);
        if let Some(problem) = character_problem(head) {
            return Some(Err(self.fail(problem)));
        }
        self.units = rest;
        Some(Ok(ValueProperty::from_validated(head.to_vec())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // The first item may be an error that ends the iteration.
            (usize::from(!self.units.is_empty()), Some(self.units.len()))
        }
    }
}

impl FusedIterator for Utf16Characters<'_> {}
