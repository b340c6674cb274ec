//! # Trackline
//!
//! Railway-oriented error handling that keeps its diagnostics.
//!
//! A pipeline of [`Outcome`]s runs its stages while everything succeeds and
//! slides past them once something fails. The failure carries its error
//! text, the error object that caused it (if any), the notes gathered along
//! the way, and where it was built, so the end of the pipeline can report
//! exactly what went wrong.
//!
//! ## Quick Example
//!
//! ```rust
//! use trackline::prelude::*;
//!
//! fn register(email: &str, extension: &str) -> Outcome<String> {
//!     EmailAddress::create(email)
//!         .with_note(format!("registering {email}"))
//!         .on_success_try(|owner| {
//!             FileExtension::create(extension)
//!                 .on_success(|ext| format!("{owner} uploads {ext} files"))
//!         })
//! }
//!
//! assert_eq!(*register("ada@example.com", "*.png").value(), "ada@example.com uploads PNG files");
//!
//! let failed = register("ada@example.com", "tar.gz");
//! assert_eq!(failed.error(), "The extension should not contain full stops.");
//! assert_eq!(failed.notes(), &["registering ada@example.com".to_string()]);
//! ```
//!
//! ## Core types
//!
//! - [`Outcome<T>`]: success holding a `T`, or failure with diagnostics
//! - [`Maybe<T>`]: a value that may be absent, bridged with
//!   [`Maybe::into_outcome`]
//! - [`property::ValueProperty`]: validated domain primitives such as
//!   [`property::EmailAddress`] and [`property::FileExtension`]
//!
//! ## Logging
//!
//! Building an outcome reports it through [`sink`]: failures at error level,
//! successes at verbose level, carried notes at information level. The
//! default sink forwards to [`tracing`]; tests can capture records with
//! [`testing::RecordingSink`].
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Maybe`] and value properties,
//!   validating on deserialize
//! - `proptest`: `Arbitrary` for [`Maybe`] and [`Outcome`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod property;
pub mod sink;
pub mod testing;

// Re-exports
pub use error::{FormatError, OutcomeError, StateError};
pub use maybe::Maybe;
pub use outcome::{CallSite, ErrorInfo, Outcome, OK_MESSAGE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{FormatError, OutcomeError, StateError};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::{CallSite, ErrorInfo, Outcome};
    pub use crate::property::{
        EmailAddress, FileExtension, UnicodeCharacter16, UnicodeString16, ValueProperty,
    };
}
