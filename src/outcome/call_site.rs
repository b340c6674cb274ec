//! Provenance of an outcome.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Where an [`Outcome`](super::Outcome) was built.
///
/// Constructors and combinators are `#[track_caller]`, so by default this is
/// the source location of the user code that asked for the outcome, not a
/// location inside this crate. Callers that prefer a logical name can supply
/// one with [`Outcome::called_from`](super::Outcome::called_from).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallSite {
    /// A captured source location.
    Location(&'static Location<'static>),
    /// A caller-supplied name.
    Named(Cow<'static, str>),
}

impl CallSite {
    /// The location of the caller of the function this is called from.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        CallSite::Location(Location::caller())
    }

    /// An explicit name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        CallSite::Named(name.into())
    }

    /// The source location, when one was captured.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        match self {
            CallSite::Location(location) => Some(location),
            CallSite::Named(_) => None,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallSite::Location(location) => write!(
                f,
                "{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            CallSite::Named(name) => f.write_str(name),
        }
    }
}
