//! The logging seam used by [`Outcome`](crate::Outcome) construction.
//!
//! Building an outcome is an observable event: failures are reported at
//! [`Level::Error`], successes at [`Level::Verbose`], and notes carried into
//! a new outcome at [`Level::Information`]. Those records go to a
//! [`LogSink`].
//!
//! By default every record is forwarded to [`tracing`] through
//! [`TracingSink`], so the installed subscriber decides where it ends up.
//! A different sink can be injected for the current thread with
//! [`with_sink`]:
//!
//! ```
//! use std::sync::Arc;
//! use trackline::sink::{self, Level, LogSink};
//! use trackline::Outcome;
//! use trackline::testing::RecordingSink;
//!
//! let recorder = Arc::new(RecordingSink::new());
//! sink::with_sink(recorder.clone(), || {
//!     let _ = Outcome::<i32>::fail("disk full");
//! });
//!
//! assert!(recorder.contains(Level::Error, "disk full"));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

/// Severity of a log record, from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Routine success chatter.
    Verbose,
    /// Diagnostics for developers.
    Debug,
    /// Notes and other noteworthy events.
    Information,
    /// Something looks wrong but processing continues.
    Warning,
    /// A failure was recorded.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Information => "information",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        f.write_str(name)
    }
}

/// Receiver for the records emitted while outcomes are built.
///
/// Implementations must not panic; logging is fire-and-forget.
pub trait LogSink: Send + Sync {
    /// Record `message` at `level`.
    fn log(&self, level: Level, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Forwards records to the `tracing` macros under the `trackline` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Verbose => tracing::trace!(target: "trackline", "{}", message),
            Level::Debug => tracing::debug!(target: "trackline", "{}", message),
            Level::Information => tracing::info!(target: "trackline", "{}", message),
            Level::Warning => tracing::warn!(target: "trackline", "{}", message),
            Level::Error => tracing::error!(target: "trackline", "{}", message),
        }
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Passes on records at or above `min` and drops the rest.
///
/// ```
/// use trackline::sink::{Level, LevelFilter, LogSink};
/// use trackline::testing::RecordingSink;
///
/// let recorder = RecordingSink::new();
/// let filtered = LevelFilter::new(Level::Warning, &recorder);
/// filtered.log(Level::Verbose, "OK");
/// filtered.log(Level::Error, "broken");
///
/// assert_eq!(recorder.records().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LevelFilter<S> {
    min: Level,
    inner: S,
}

impl<S: LogSink> LevelFilter<S> {
    /// Wrap `inner`, keeping records at `min` or more severe.
    pub fn new(min: Level, inner: S) -> Self {
        Self { min, inner }
    }

    /// The lowest level that is passed on.
    pub fn min_level(&self) -> Level {
        self.min
    }
}

impl<S: LogSink> LogSink for LevelFilter<S> {
    fn log(&self, level: Level, message: &str) {
        if level >= self.min {
            self.inner.log(level, message);
        }
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

thread_local! {
    static SCOPED: RefCell<Vec<Arc<dyn LogSink>>> = const { RefCell::new(Vec::new()) };
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPED.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Run `f` with `sink` receiving every record emitted on this thread.
///
/// Scopes nest; the previous sink is restored when `f` returns or panics.
pub fn with_sink<R>(sink: Arc<dyn LogSink>, f: impl FnOnce() -> R) -> R {
    SCOPED.with(|stack| stack.borrow_mut().push(sink));
    let _guard = ScopeGuard;
    f()
}

/// Emit a record to the sink in scope, or to [`TracingSink`] if none is.
pub(crate) fn emit(level: Level, message: &str) {
    // Clone out of the cell first so a sink may itself build outcomes.
    let scoped = SCOPED.with(|stack| stack.borrow().last().cloned());
    match scoped {
        Some(sink) => sink.log(level, message),
        None => TracingSink.log(level, message),
    }
}
