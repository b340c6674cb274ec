//! Validated value properties.
//!
//! A value property is an immutable domain primitive holding exactly one
//! validated value: an email address, a file extension, a single Unicode
//! character. The rules live in a [`Kind`]; [`ValueProperty<K>`] supplies
//! construction, equality, hashing and display for every kind.
//!
//! Validation runs once, at the boundary. After that the type carries the
//! guarantee.
//!
//! # Construction
//!
//! Each property offers two entry points:
//!
//! - [`ValueProperty::create`] returns an [`Outcome`], for input that is
//!   expected to be wrong sometimes (user input, files);
//! - [`ValueProperty::parse`] (and `FromStr` / `TryFrom<&str>` for text
//!   kinds) returns a [`FormatError`] for code that trusts its input and
//!   wants a loud error when that trust is misplaced.
//!
//! ```
//! use trackline::property::{EmailAddress, FileExtension};
//!
//! let email = EmailAddress::create("ada@example.com");
//! assert!(email.is_success());
//!
//! let rejected = EmailAddress::create("ada.example.com");
//! assert_eq!(rejected.error(), "No preceding name before @ sign in EmailAddress");
//!
//! let ext: FileExtension = "*.Jpeg".parse().unwrap();
//! assert_eq!(ext, "JPEG");
//! ```
//!
//! # Defining a kind
//!
//! ```
//! use trackline::property::{Kind, ValueProperty};
//! use trackline::{Maybe, Outcome};
//!
//! #[derive(Debug)]
//! pub struct Port;
//!
//! impl Kind for Port {
//!     type Held = u16;
//!     const NAME: &'static str = "port";
//!
//!     fn validate(input: Maybe<u16>) -> Outcome<u16> {
//!         Outcome::initialize(input, "Port is missing")
//!             .ensure(|port| *port != 0, "Port 0 is reserved")
//!     }
//!
//!     fn fmt_held(port: &u16, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, ":{port}")
//!     }
//! }
//!
//! let port = ValueProperty::<Port>::create(Some(8080u16)).into_value();
//! assert_eq!(*port.value(), 8080);
//! assert!(ValueProperty::<Port>::parse(Some(0u16)).is_err());
//! ```

mod email;
mod file_extension;
#[cfg(feature = "serde")]
mod serde_impl;
mod unicode;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::FormatError;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

pub use email::Email;
pub use file_extension::Extension;
pub use unicode::{Utf16Character, Utf16Characters, Utf16Text};

/// A validated email address.
pub type EmailAddress = ValueProperty<Email>;

/// A validated, upper-cased file extension without the leading dot.
pub type FileExtension = ValueProperty<Extension>;

/// Exactly one Unicode scalar value, as one or two UTF-16 code units.
pub type UnicodeCharacter16 = ValueProperty<Utf16Character>;

/// A sequence of UTF-16 code units forming only legal Unicode characters.
pub type UnicodeString16 = ValueProperty<Utf16Text>;

/// The rules of one kind of value property.
pub trait Kind: 'static {
    /// The type of the validated value.
    type Held: Clone + Eq + Hash + fmt::Debug;

    /// Human-readable name of the kind, used in [`FormatError`]s.
    const NAME: &'static str;

    /// Check `input`, returning the value to store on success.
    ///
    /// The returned value may be a normalised form of the input.
    fn validate(input: Maybe<Self::Held>) -> Outcome<Self::Held>;

    /// Equality of two held values.
    fn equals_core(a: &Self::Held, b: &Self::Held) -> bool {
        a == b
    }

    /// Hash of a held value. Must agree with [`equals_core`](Self::equals_core).
    fn hash_core<H: Hasher>(value: &Self::Held, state: &mut H) {
        value.hash(state);
    }

    /// Write a held value for display.
    fn fmt_held(value: &Self::Held, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A value that passed the rules of `K`.
pub struct ValueProperty<K: Kind> {
    value: K::Held,
    _kind: PhantomData<fn() -> K>,
}

impl<K: Kind> ValueProperty<K> {
    /// Validate `input` and wrap it, reporting failure as data.
    #[track_caller]
    pub fn create(input: impl Into<Maybe<K::Held>>) -> Outcome<Self> {
        K::validate(input.into()).on_success(Self::from_validated)
    }

    /// Validate `input` and wrap it, or fail with a [`FormatError`].
    #[track_caller]
    pub fn parse(input: impl Into<Maybe<K::Held>>) -> Result<Self, FormatError> {
        Self::create(input)
            .into_result()
            .map_err(|err| FormatError::new(K::NAME, err.message()))
    }

    /// Run the rules of `K` without building a property.
    pub fn validate(input: impl Into<Maybe<K::Held>>) -> Outcome<K::Held> {
        K::validate(input.into())
    }

    /// Wrap a value already known to satisfy `K`.
    pub(crate) fn from_validated(value: K::Held) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    /// Borrow the held value.
    pub fn value(&self) -> &K::Held {
        &self.value
    }

    /// Take the held value.
    pub fn into_inner(self) -> K::Held {
        self.value
    }

    /// `true` when the held value equals `other` under the rules of `K`.
    pub fn eq_held(&self, other: &K::Held) -> bool {
        K::equals_core(&self.value, other)
    }
}

impl<K: Kind<Held = String>> ValueProperty<K> {
    /// Borrow the held text.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: Kind> Clone for ValueProperty<K> {
    fn clone(&self) -> Self {
        Self::from_validated(self.value.clone())
    }
}

impl<K: Kind> PartialEq for ValueProperty<K> {
    fn eq(&self, other: &Self) -> bool {
        K::equals_core(&self.value, &other.value)
    }
}

impl<K: Kind> Eq for ValueProperty<K> {}

impl<K: Kind> Hash for ValueProperty<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        K::hash_core(&self.value, state);
    }
}

/// An absent value is never equal to a property.
impl<K: Kind> PartialEq<Maybe<K::Held>> for ValueProperty<K> {
    fn eq(&self, other: &Maybe<K::Held>) -> bool {
        other.as_option().is_some_and(|held| self.eq_held(held))
    }
}

impl<K: Kind> PartialEq<ValueProperty<K>> for Maybe<K::Held> {
    fn eq(&self, other: &ValueProperty<K>) -> bool {
        other == self
    }
}

impl<K: Kind<Held = String>> PartialEq<str> for ValueProperty<K> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<K: Kind<Held = String>> PartialEq<&str> for ValueProperty<K> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<K: Kind> fmt::Debug for ValueProperty<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProperty")
            .field("kind", &K::NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: Kind> fmt::Display for ValueProperty<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        K::fmt_held(&self.value, f)
    }
}

impl<K: Kind<Held = String>> FromStr for ValueProperty<K> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: Kind<Held = String>> TryFrom<&str> for ValueProperty<K> {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<K: Kind<Held = String>> TryFrom<String> for ValueProperty<K> {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
