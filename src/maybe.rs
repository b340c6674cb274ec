//! `Maybe<T>`: an explicit zero-or-one container.
//!
//! `Maybe` documents at the type level that a value is allowed to be
//! missing, and makes reading a missing value a loud programmer error
//! instead of a silent default.
//!
//! # Examples
//!
//! ```
//! use trackline::Maybe;
//!
//! let present = Maybe::some(3);
//! let absent = Maybe::<i32>::none();
//!
//! assert!(present.has_value());
//! assert!(absent.has_no_value());
//! assert_eq!(absent.unwrap_or(7), 7);
//! assert!(present.eq_value(&3));
//! assert_eq!(Maybe::<i32>::none(), Maybe::none());
//! ```

use std::fmt;

use crate::error::StateError;
use crate::outcome::Outcome;

/// A value that may or may not be present.
///
/// Equality is structural: two empty values are equal, an empty value is
/// never equal to a present one, and two present values compare their
/// contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Wrap a possibly absent value.
    #[inline]
    pub const fn new(value: Option<T>) -> Self {
        Maybe(value)
    }

    /// A present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe(Some(value))
    }

    /// An absent value.
    #[inline]
    pub const fn none() -> Self {
        Maybe(None)
    }

    /// `true` when a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// `true` when no value is present.
    #[inline]
    pub fn has_no_value(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::NoValue`] when the value is absent. Use
    /// [`try_value`](Self::try_value) where absence is expected.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => panic!("{}", StateError::NoValue),
        }
    }

    /// Borrow the value, or report that there is none.
    pub fn try_value(&self) -> Result<&T, StateError> {
        self.0.as_ref().ok_or(StateError::NoValue)
    }

    /// Take the value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// `true` when a value is present and equal to `other`.
    pub fn eq_value(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.as_ref().is_some_and(|value| value == other)
    }

    /// Borrow the inner option.
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unwrap into the inner option.
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Borrow the contents as a `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref())
    }

    /// Transform a present value.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe(self.0.map(f))
    }

    /// Turn this value into an outcome: absent becomes a failure with
    /// `error_message`, present becomes a success holding the value.
    ///
    /// ```
    /// use trackline::Maybe;
    ///
    /// let found = Maybe::some("row").into_outcome("no such row");
    /// assert_eq!(*found.value(), "row");
    ///
    /// let missing = Maybe::<&str>::none().into_outcome("no such row");
    /// assert_eq!(missing.error(), "no such row");
    /// ```
    #[track_caller]
    pub fn into_outcome(self, error_message: impl Into<String>) -> Outcome<T> {
        match self.0 {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(error_message),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe(None)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.0
    }
}

impl From<&str> for Maybe<String> {
    fn from(value: &str) -> Self {
        Maybe(Some(value.to_owned()))
    }
}

impl From<String> for Maybe<String> {
    fn from(value: String) -> Self {
        Maybe(Some(value))
    }
}

impl From<Option<&str>> for Maybe<String> {
    fn from(value: Option<&str>) -> Self {
        Maybe(value.map(str::to_owned))
    }
}

impl<T: Clone> From<&[T]> for Maybe<Vec<T>> {
    fn from(value: &[T]) -> Self {
        Maybe(Some(value.to_vec()))
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for Maybe<Vec<T>> {
    fn from(value: &[T; N]) -> Self {
        Maybe(Some(value.to_vec()))
    }
}

impl<T: Clone> From<Option<&[T]>> for Maybe<Vec<T>> {
    fn from(value: Option<&[T]>) -> Self {
        Maybe(value.map(<[T]>::to_vec))
    }
}

impl<T> From<Vec<T>> for Maybe<Vec<T>> {
    fn from(value: Vec<T>) -> Self {
        Maybe(Some(value))
    }
}

/// Prints the value, or nothing when absent.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_queries() {
        let present = Maybe::some("x");
        let absent = Maybe::<&str>::none();

        assert!(present.has_value());
        assert!(!present.has_no_value());
        assert!(absent.has_no_value());
        assert!(!absent.has_value());
    }

    #[test]
    fn test_value_returns_inner() {
        assert_eq!(*Maybe::some(5).value(), 5);
    }

    #[test]
    #[should_panic(expected = "no value present")]
    fn test_value_on_absent_panics() {
        let absent = Maybe::<u8>::none();
        let _ = absent.value();
    }

    #[test]
    fn test_try_value() {
        assert_eq!(Maybe::some(1).try_value(), Ok(&1));
        assert_eq!(Maybe::<i32>::none().try_value(), Err(StateError::NoValue));
    }

    #[test]
    fn test_equality_rules() {
        assert_eq!(Maybe::<i32>::none(), Maybe::none());
        assert_ne!(Maybe::some(1), Maybe::none());
        assert_ne!(Maybe::none(), Maybe::some(1));
        assert_eq!(Maybe::some(1), Maybe::some(1));
        assert_ne!(Maybe::some(1), Maybe::some(2));
    }

    #[test]
    fn test_eq_value() {
        assert!(Maybe::some("a".to_string()).eq_value(&"a".to_string()));
        assert!(!Maybe::some("a".to_string()).eq_value(&"b".to_string()));
        assert!(!Maybe::<String>::none().eq_value(&String::new()));
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Maybe::some(1).unwrap_or(9), 1);
        assert_eq!(Maybe::none().unwrap_or(9), 9);
    }

    #[test]
    fn test_conversions() {
        let from_str: Maybe<String> = "abc".into();
        assert!(from_str.eq_value(&"abc".to_string()));

        let from_none: Maybe<String> = Option::<&str>::None.into();
        assert!(from_none.has_no_value());

        let units: Maybe<Vec<u16>> = (&[0x41u16, 0x42][..]).into();
        assert_eq!(units.into_option(), Some(vec![0x41, 0x42]));

        let back: Option<i32> = Maybe::some(4).into();
        assert_eq!(back, Some(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Maybe::some(12).to_string(), "12");
        assert_eq!(Maybe::<i32>::none().to_string(), "");
    }

    #[test]
    fn test_map_and_as_ref() {
        let m = Maybe::some(String::from("abc"));
        assert_eq!(m.as_ref().map(|s| s.len()), Maybe::some(3));
        assert_eq!(m.as_option(), Some(&"abc".to_string()));
    }

    #[test]
    fn test_into_outcome() {
        let ok = Maybe::some(10).into_outcome("missing");
        assert!(ok.is_success());
        assert_eq!(*ok.value(), 10);

        let failed = Maybe::<i32>::none().into_outcome("missing");
        assert!(failed.is_failure());
        assert_eq!(failed.error(), "missing");
    }
}
