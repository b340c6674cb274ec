//! Testing utilities for code built on trackline
//!
//! This module provides a [`LogSink`] that records what outcome construction
//! reports, assertion macros for [`Outcome`](crate::Outcome), and, with the
//! `proptest` feature, `Arbitrary` implementations for [`Maybe`] and
//! [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ## Recording sink
//!
//! ```rust
//! use std::sync::Arc;
//! use trackline::sink::{self, Level};
//! use trackline::testing::RecordingSink;
//! use trackline::Outcome;
//!
//! let recorder = Arc::new(RecordingSink::new());
//! sink::with_sink(recorder.clone(), || {
//!     let _ = Outcome::ok(1).with_note("cached").on_success(|n| n + 1);
//! });
//!
//! assert!(recorder.contains(Level::Information, "cached"));
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use trackline::{assert_error, assert_failure, assert_success, Outcome};
//!
//! assert_success!(Outcome::ok(42));
//! assert_failure!(Outcome::<i32>::fail("nope"));
//! assert_error!(Outcome::<i32>::fail("nope"), "nope");
//! ```

use std::sync::{Mutex, PoisonError};

use crate::sink::{Level, LogSink};

#[cfg(feature = "proptest")]
use crate::maybe::Maybe;

/// A sink that keeps every record in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The messages recorded so far, without their levels.
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    /// `true` when a record at `level` contains `fragment`.
    pub fn contains(&self, level: Level, fragment: &str) -> bool {
        self.records()
            .iter()
            .any(|(l, message)| *l == level && message.contains(fragment))
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_owned()));
    }
}

/// Assert that an outcome succeeded.
///
/// This macro will panic with the error text if the outcome is a failure.
///
/// # Example
///
/// ```rust
/// use trackline::{assert_success, Outcome};
///
/// assert_success!(Outcome::ok("ready"));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        let outcome = &$outcome;
        if $crate::Outcome::is_failure(outcome) {
            panic!(
                "Expected Success, got Failure: {}",
                $crate::Outcome::error(outcome)
            );
        }
    };
}

/// Assert that an outcome failed.
///
/// # Example
///
/// ```rust
/// use trackline::{assert_failure, Outcome};
///
/// assert_failure!(Outcome::<()>::fail("offline"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        let outcome = &$outcome;
        if $crate::Outcome::is_success(outcome) {
            panic!("Expected Failure, got Success");
        }
    };
}

/// Assert that an outcome failed with exactly the given error text.
///
/// # Example
///
/// ```rust
/// use trackline::{assert_error, property::EmailAddress};
///
/// assert_error!(EmailAddress::create("a@"), "No domain name after @ sign in EmailAddress");
/// ```
#[macro_export]
macro_rules! assert_error {
    ($outcome:expr, $expected:expr) => {
        let outcome = &$outcome;
        if $crate::Outcome::is_success(outcome) {
            panic!("Expected Failure with error {:?}, got Success", $expected);
        }
        assert_eq!($crate::Outcome::error(outcome), $expected);
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(Maybe::new)
            .boxed()
    }
}

/// Non-blank error texts, for generating failures.
#[cfg(feature = "proptest")]
pub fn error_messages() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,30}"
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Outcome<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(crate::Outcome::ok),
            error_messages().prop_map(|message| crate::Outcome::fail(message)),
        ]
        .boxed()
    }
}
