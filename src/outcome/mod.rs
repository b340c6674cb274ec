//! Railway-oriented outcomes.
//!
//! An [`Outcome<T>`] is either a success holding a `T` or a failure holding a
//! human-readable error text, optionally the error object that caused it,
//! and a list of notes. Every outcome also remembers where it was built.
//!
//! Unlike `std::result::Result`, the failure side is uniform: pipelines of
//! differently typed stages share one failure shape, so diagnostics (error
//! text, the original error, notes) survive every stage of the pipeline.
//!
//! # Examples
//!
//! ```
//! use trackline::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::from(raw.parse::<u16>())
//!         .ensure(|port| *port >= 1024, "Port must not be privileged")
//! }
//!
//! assert_eq!(*parse_port("8080").value(), 8080);
//! assert_eq!(parse_port("80").error(), "Port must not be privileged");
//! assert!(parse_port("eighty").exception().is_some());
//! ```
//!
//! Building an outcome reports it to the [`sink`](crate::sink): failures at
//! error level, successes at verbose level.

mod call_site;
mod combinators;
mod ensure;
mod error_info;

use std::error::Error as StdError;
use std::fmt;

use crate::error::{OutcomeError, StateError};
use crate::maybe::Maybe;
use crate::sink::{self, Level};

pub use call_site::CallSite;
pub use error_info::ErrorInfo;

/// The message logged at verbose level for every successful outcome.
pub const OK_MESSAGE: &str = "OK";

#[derive(Clone)]
enum State<T> {
    Success(T),
    Failure {
        error: String,
        exception: Option<ErrorInfo>,
    },
}

/// A success holding a `T`, or a failure with diagnostics.
///
/// `Outcome` on its own (`T = ()`) is the value-less form.
///
/// Equality compares success/failure, the value or error text, the type of
/// the underlying error, and the notes. Where an outcome was built is not
/// part of its identity.
#[must_use = "an Outcome may be a failure that should be inspected"]
#[derive(Clone)]
pub struct Outcome<T = ()> {
    state: State<T>,
    notes: Vec<String>,
    call_site: CallSite,
}

impl<T> Outcome<T> {
    fn build(state: State<T>, notes: Vec<String>, call_site: CallSite) -> Self {
        if let State::Failure { error, .. } = &state {
            assert!(
                !error.trim().is_empty(),
                "{}: a failed outcome needs a non-blank error message",
                StateError::FailedOutcome
            );
        }
        let outcome = Self {
            state,
            notes,
            call_site,
        };
        outcome.report();
        outcome
    }

    fn report(&self) {
        match &self.state {
            State::Success(_) => sink::emit(Level::Verbose, OK_MESSAGE),
            State::Failure { error, exception } => {
                sink::emit(Level::Error, error);
                if let Some(info) = exception {
                    sink::emit(Level::Error, &format!("{:?}", info.error()));
                }
            }
        }
        for note in &self.notes {
            sink::emit(Level::Information, note);
        }
    }

    /// A success holding `value`.
    #[track_caller]
    pub fn ok(value: T) -> Self {
        Self::build(State::Success(value), Vec::new(), CallSite::caller())
    }

    /// A failure with `message` as its error text.
    ///
    /// # Panics
    ///
    /// Panics when `message` is empty or only whitespace: a failure must say
    /// what went wrong.
    #[track_caller]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::fail_at(message.into(), CallSite::caller())
    }

    /// A failure caused by `error`.
    ///
    /// The error text names the call site, the error's type and message, and
    /// the message of every error in its `source()` chain. The error itself
    /// is kept and available through [`exception`](Self::exception).
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let err = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
    /// let failed = Outcome::<()>::fail_error(err).called_from("send");
    /// assert!(failed.error().contains("It threw exception 'Error', with error message 'socket closed'"));
    /// assert!(failed.exception().unwrap().is::<std::io::Error>());
    /// ```
    #[track_caller]
    pub fn fail_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::fail_info(ErrorInfo::new(error))
    }

    /// A failure caused by an already wrapped error.
    #[track_caller]
    pub fn fail_info(info: ErrorInfo) -> Self {
        let call_site = CallSite::caller();
        let error = info.render(&call_site);
        Self::build(
            State::Failure {
                error,
                exception: Some(info),
            },
            Vec::new(),
            call_site,
        )
    }

    pub(crate) fn fail_at(error: String, call_site: CallSite) -> Self {
        Self::build(
            State::Failure {
                error,
                exception: None,
            },
            Vec::new(),
            call_site,
        )
    }

    /// A success when `value` is present, otherwise a failure with
    /// `error_message`.
    ///
    /// Accepts a [`Maybe`] or anything convertible into one, such as an
    /// `Option`.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// assert!(Outcome::initialize(Some(1), "missing").is_success());
    /// assert_eq!(Outcome::<i32>::initialize(None, "missing").error(), "missing");
    /// ```
    #[track_caller]
    pub fn initialize(value: impl Into<Maybe<T>>, error_message: impl Into<String>) -> Self {
        match value.into().into_option() {
            Some(value) => Self::ok(value),
            None => Self::fail(error_message),
        }
    }

    /// A failure rebuilt from the parts of another one, typically under a
    /// different value type.
    fn failure_from_parts(
        error: String,
        exception: Option<ErrorInfo>,
        notes: Vec<String>,
        call_site: CallSite,
    ) -> Self {
        Self::build(State::Failure { error, exception }, notes, call_site)
    }

    /// Replace the call site with an explicit name.
    pub fn called_from(mut self, name: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        self.call_site = CallSite::named(name);
        self
    }

    /// Append a note.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let outcome = Outcome::ok(3).with_note("read from cache");
    /// assert!(outcome.has_notes());
    /// assert_eq!(outcome.notes(), &["read from cache".to_string()]);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append several notes in order.
    pub fn with_notes<I>(mut self, notes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));
        self
    }

    /// `true` for a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// `true` for a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error text; empty for a success.
    pub fn error(&self) -> &str {
        match &self.state {
            State::Success(_) => "",
            State::Failure { error, .. } => error,
        }
    }

    /// The error that caused the failure, for failures built from one.
    pub fn exception(&self) -> Option<&ErrorInfo> {
        match &self.state {
            State::Success(_) => None,
            State::Failure { exception, .. } => exception.as_ref(),
        }
    }

    /// `true` once a note has been added.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Notes in the order they were added.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Where this outcome was built.
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::FailedOutcome`] on a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure { error, .. } => panic!("{}: {}", StateError::FailedOutcome, error),
        }
    }

    /// Borrow the success value, or report that there is none.
    pub fn try_value(&self) -> Result<&T, StateError> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure { .. } => Err(StateError::FailedOutcome),
        }
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`StateError::FailedOutcome`] on a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure { error, .. } => panic!("{}: {}", StateError::FailedOutcome, error),
        }
    }

    /// Take the success value, or report that there is none.
    pub fn try_into_value(self) -> Result<T, StateError> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure { .. } => Err(StateError::FailedOutcome),
        }
    }

    /// Leave the railway: a success becomes `Ok`, a failure becomes an
    /// [`OutcomeError`] carrying the error text, notes and underlying error.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure { error, exception } => {
                Err(OutcomeError::new(error, self.notes, exception))
            }
        }
    }
}

impl Outcome<()> {
    /// A value-less success.
    #[track_caller]
    pub fn success() -> Self {
        Self::ok(())
    }

    /// A success when `predicate` holds, otherwise a failure with
    /// `error_message`.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let limit = 10;
    /// assert!(Outcome::from_predicate(limit > 5, "limit too low").is_success());
    /// assert!(Outcome::from_predicate(limit > 50, "limit too low").is_failure());
    /// ```
    #[track_caller]
    pub fn from_predicate(predicate: bool, error_message: impl Into<String>) -> Self {
        if predicate {
            Self::ok(())
        } else {
            Self::fail(error_message)
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: StdError + Send + Sync + 'static,
{
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail_error(error),
        }
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_state = match (&self.state, &other.state) {
            (State::Success(a), State::Success(b)) => a == b,
            (
                State::Failure {
                    error: a,
                    exception: ea,
                },
                State::Failure {
                    error: b,
                    exception: eb,
                },
            ) => {
                a == b
                    && ea.as_ref().map(ErrorInfo::type_name)
                        == eb.as_ref().map(ErrorInfo::type_name)
            }
            _ => false,
        };
        same_state && self.notes == other.notes
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = match &self.state {
            State::Success(value) => {
                let mut d = f.debug_struct("Success");
                d.field("value", value);
                d
            }
            State::Failure { error, exception } => {
                let mut d = f.debug_struct("Failure");
                d.field("error", error);
                if let Some(info) = exception {
                    d.field("exception", info);
                }
                d
            }
        };
        if !self.notes.is_empty() {
            debug.field("notes", &self.notes);
        }
        debug.field("call_site", &format_args!("{}", self.call_site));
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;
    use std::sync::Arc;

    #[test]
    fn test_ok_is_success() {
        let outcome = Outcome::success();
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error(), "");
        assert!(outcome.exception().is_none());
        assert!(!outcome.has_notes());
    }

    #[test]
    fn test_ok_with_value() {
        let outcome = Outcome::ok("abc");
        assert_eq!(*outcome.value(), "abc");
        assert_eq!(outcome.try_value(), Ok(&"abc"));
        assert_eq!(outcome.into_value(), "abc");
    }

    #[test]
    fn test_fail_keeps_message() {
        let outcome = Outcome::<i32>::fail("not found");
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), "not found");
        assert!(outcome.exception().is_none());
    }

    #[test]
    #[should_panic(expected = "non-blank error message")]
    fn test_fail_with_empty_message_panics() {
        let _ = Outcome::<()>::fail("");
    }

    #[test]
    #[should_panic(expected = "non-blank error message")]
    fn test_fail_with_whitespace_message_panics() {
        let _ = Outcome::<()>::fail(" \t");
    }

    #[test]
    #[should_panic(expected = "a failed outcome holds no value")]
    fn test_value_on_failure_panics() {
        let outcome = Outcome::<i32>::fail("broken");
        let _ = outcome.value();
    }

    #[test]
    fn test_try_value_on_failure() {
        let outcome = Outcome::<i32>::fail("broken");
        assert_eq!(outcome.try_value(), Err(StateError::FailedOutcome));
        assert_eq!(outcome.try_into_value(), Err(StateError::FailedOutcome));
    }

    #[test]
    fn test_call_site_is_the_caller() {
        let outcome = Outcome::ok(1);
        let location = outcome.call_site().location().unwrap();
        assert!(location.file().ends_with("mod.rs"));
        assert_eq!(location.line(), line!() - 3);
    }

    #[test]
    fn test_called_from_overrides_call_site() {
        let outcome = Outcome::ok(1).called_from("load_user");
        assert_eq!(outcome.call_site().to_string(), "load_user");
    }

    #[test]
    fn test_fail_error_renders_chain_and_keeps_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let outcome = Outcome::<String>::fail_error(io);

        assert!(outcome.is_failure());
        assert!(outcome.error().starts_with("Exception thrown by "));
        assert!(outcome
            .error()
            .contains("It threw exception 'Error', with error message 'no such file'"));
        let info = outcome.exception().unwrap();
        assert_eq!(
            info.downcast_ref::<std::io::Error>().map(|e| e.kind()),
            Some(std::io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_initialize_from_option_and_maybe() {
        assert_eq!(*Outcome::initialize(Some(2), "none").value(), 2);
        assert_eq!(Outcome::<i32>::initialize(None, "none").error(), "none");
        assert!(Outcome::initialize(Maybe::some('x'), "none").is_success());
        assert!(Outcome::initialize(Maybe::<char>::none(), "none").is_failure());
    }

    #[test]
    fn test_from_predicate() {
        assert!(Outcome::from_predicate(true, "unused").is_success());
        assert_eq!(Outcome::from_predicate(false, "false").error(), "false");
    }

    #[test]
    fn test_from_std_result() {
        let ok: Outcome<i32> = "12".parse::<i32>().into();
        assert_eq!(*ok.value(), 12);

        let failed: Outcome<i32> = "x".parse::<i32>().into();
        assert!(failed.is_failure());
        assert!(failed.exception().unwrap().is::<std::num::ParseIntError>());
        assert!(failed.error().contains("ParseIntError"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::ok(5).into_result().unwrap(), 5);

        let err = Outcome::<i32>::fail("bad").with_note("n1").into_result().unwrap_err();
        assert_eq!(err.message(), "bad");
        assert_eq!(err.notes(), &["n1".to_string()]);
    }

    #[test]
    fn test_notes_accumulate_in_order() {
        let outcome = Outcome::ok(1).with_note("a").with_notes(["b", "c"]);
        assert!(outcome.has_notes());
        assert_eq!(outcome.notes(), &["a", "b", "c"]);
    }

    #[test]
    fn test_equality_ignores_call_site() {
        let a = Outcome::ok(1);
        let b = Outcome::ok(1).called_from("elsewhere");
        assert_eq!(a, b);
        assert_ne!(Outcome::ok(1), Outcome::ok(2));
        assert_eq!(Outcome::<i32>::fail("x"), Outcome::<i32>::fail("x"));
        assert_ne!(Outcome::<i32>::fail("x"), Outcome::<i32>::fail("y"));
        assert_ne!(Outcome::ok(1), Outcome::ok(1).with_note("n"));
    }

    #[test]
    fn test_construction_is_reported() {
        let recorder = Arc::new(RecordingSink::new());
        sink::with_sink(recorder.clone(), || {
            let _ = Outcome::ok(1);
            let _ = Outcome::<i32>::fail("gone wrong");
        });

        assert_eq!(
            recorder.records(),
            vec![
                (Level::Verbose, OK_MESSAGE.to_string()),
                (Level::Error, "gone wrong".to_string()),
            ]
        );
    }

    #[test]
    fn test_exception_failure_reports_error_twice() {
        let recorder = Arc::new(RecordingSink::new());
        sink::with_sink(recorder.clone(), || {
            let _ = Outcome::<()>::fail_error(std::fmt::Error);
        });

        let records = recorder.records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|(level, _)| *level == Level::Error));
        assert!(records[0].1.contains("It threw exception 'Error'"));
        assert_eq!(records[1].1, "Error");
    }

    #[test]
    fn test_debug_output() {
        let debug = format!("{:?}", Outcome::ok(7).with_note("n"));
        assert!(debug.starts_with("Success"));
        assert!(debug.contains("7"));
        assert!(debug.contains("notes"));

        let debug = format!("{:?}", Outcome::<i32>::fail("broken"));
        assert!(debug.starts_with("Failure"));
        assert!(debug.contains("broken"));
    }
}
