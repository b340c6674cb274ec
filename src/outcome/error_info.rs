//! The error carried by an exception failure.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::CallSite;

/// A shared handle on the error that caused a failure.
///
/// Keeps the original error object, so callers can downcast and branch on
/// its type, together with the name of its concrete type captured when it
/// was wrapped. Cloning is cheap.
///
/// # Examples
///
/// ```
/// use std::io;
/// use trackline::ErrorInfo;
///
/// let info = ErrorInfo::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
/// assert_eq!(info.type_name(), "Error");
/// assert_eq!(info.message(), "gone");
/// assert!(info.downcast_ref::<io::Error>().is_some());
/// ```
#[derive(Clone)]
pub struct ErrorInfo {
    type_name: &'static str,
    error: Arc<dyn StdError + Send + Sync + 'static>,
}

impl ErrorInfo {
    /// Wrap a concrete error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            type_name: short_type_name(std::any::type_name::<E>()),
            error: Arc::new(error),
        }
    }

    /// Wrap an already boxed error. Its concrete type is no longer known, so
    /// the type name is reported as `dyn Error`.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            type_name: "dyn Error",
            error: Arc::from(error),
        }
    }

    /// Unqualified name of the wrapped error's type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The wrapped error's `Display` text.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Borrow the wrapped error.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }

    /// Borrow the wrapped error as `E`, if that is its type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// `true` when the wrapped error is an `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.error.is::<E>()
    }

    /// The errors this one wraps, outermost first, not including itself.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.error.source(), |&err| err.source())
    }

    /// The failure text of an outcome built from this error at `site`.
    pub(crate) fn render(&self, site: &CallSite) -> String {
        let mut text = format!(
            "Exception thrown by {}. It threw exception '{}', with error message '{}'",
            site,
            self.type_name,
            self.error
        );
        for cause in self.causes() {
            text.push_str(&format!("\n  caused by '{}' ({:?})", cause, cause));
        }
        text
    }
}

impl fmt::Debug for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorInfo")
            .field("type_name", &self.type_name)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.error)
    }
}

/// `alloc::string::String` -> `String`, `Wrapper<foo::Bar>` -> `Wrapper<foo::Bar>`.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}
