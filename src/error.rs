//! Error types for programmer mistakes and rejected conversions.
//!
//! Validation failures are not errors in this crate: they travel as failed
//! [`Outcome`](crate::Outcome)s. The types here cover the two places where
//! a failure has to leave the railway:
//!
//! - [`StateError`]: reading a value that is not there. This is a bug in the
//!   caller, so the panicking accessors (`Maybe::value`, `Outcome::value`)
//!   panic with it, and the `try_*` accessors hand it back.
//! - [`FormatError`]: a value property refused its input on the fail-loud
//!   construction path (`parse`, `FromStr`).
//!
//! [`OutcomeError`] is the owned error side of [`Outcome::into_result`](crate::Outcome::into_result).

use std::error::Error as StdError;
use std::fmt;

use crate::outcome::ErrorInfo;

/// Access to a value that does not exist.
///
/// # Examples
///
/// ```
/// use trackline::{Maybe, StateError};
///
/// let empty = Maybe::<i32>::none();
/// assert_eq!(empty.try_value(), Err(StateError::NoValue));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateError {
    /// A `Maybe` was read while empty.
    NoValue,
    /// An `Outcome` value was read while failed.
    FailedOutcome,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::NoValue => write!(f, "invalid state: no value present"),
            StateError::FailedOutcome => {
                write!(f, "invalid state: a failed outcome holds no value")
            }
        }
    }
}

impl StdError for StateError {}

/// A value property rejected its input.
///
/// Carries the name of the property kind and the validation message of the
/// first rule that failed.
///
/// # Examples
///
/// ```
/// use trackline::property::FileExtension;
///
/// let err = FileExtension::parse("a.b").unwrap_err();
/// assert_eq!(err.message(), "The extension should not contain full stops.");
/// assert_eq!(
///     err.to_string(),
///     "Input string is not a valid file extension. Error: The extension should not contain full stops."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    kind: &'static str,
    message: String,
}

impl FormatError {
    /// Create a format error for the named property kind.
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Human-readable name of the property kind that refused the input.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The validation message of the rule that failed.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Input string is not a valid {}. Error: {}",
            self.kind, self.message
        )
    }
}

impl StdError for FormatError {}

/// The failure side of an [`Outcome`](crate::Outcome) once it leaves the railway.
///
/// Keeps the rendered error text, the notes gathered along the pipeline
/// and, for exception failures, the original error as its `source()`.
#[derive(Debug, Clone)]
pub struct OutcomeError {
    message: String,
    notes: Vec<String>,
    exception: Option<ErrorInfo>,
}

impl OutcomeError {
    pub(crate) fn new(message: String, notes: Vec<String>, exception: Option<ErrorInfo>) -> Self {
        Self {
            message,
            notes,
            exception,
        }
    }

    /// The error text of the failed outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Notes that travelled with the failed outcome.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// The underlying error for exception failures.
    pub fn exception(&self) -> Option<&ErrorInfo> {
        self.exception.as_ref()
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for OutcomeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.exception.as_ref().map(|info| info.error() as &(dyn StdError + 'static))
    }
}
