//! Guards: turn a success into a failure when a condition does not hold.
//!
//! All variants pass a failure through untouched without evaluating
//! anything, so a chain of guards reports the first one that failed.

use super::{CallSite, Outcome, State};

impl<T> Outcome<T> {
    /// Fail with `error_message` unless `predicate` holds for the value.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let name = Outcome::ok("ada")
    ///     .ensure(|n| !n.is_empty(), "Name is empty")
    ///     .ensure(|n| n.len() <= 16, "Name is too long");
    /// assert!(name.is_success());
    /// ```
    #[track_caller]
    pub fn ensure<F>(self, predicate: F, error_message: impl Into<String>) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        let call_site = CallSite::caller();
        if self.is_failure() {
            return self;
        }
        let holds = match &self.state {
            State::Success(value) => predicate(value),
            State::Failure { .. } => true,
        };
        self.guard(holds, error_message, call_site)
    }

    /// Fail with `error_message` unless `predicate` is `true`.
    #[track_caller]
    pub fn ensure_that(self, predicate: bool, error_message: impl Into<String>) -> Self {
        let call_site = CallSite::caller();
        if self.is_failure() {
            return self;
        }
        self.guard(predicate, error_message, call_site)
    }

    /// Fail with `error_message` unless `predicate()` returns `true`.
    ///
    /// `predicate` only runs on a success.
    #[track_caller]
    pub fn ensure_with<F>(self, predicate: F, error_message: impl Into<String>) -> Self
    where
        F: FnOnce() -> bool,
    {
        let call_site = CallSite::caller();
        if self.is_failure() {
            return self;
        }
        self.guard(predicate(), error_message, call_site)
    }

    /// Like [`ensure_that`](Self::ensure_that), also handing back `predicate`
    /// and recording `error_message` in `errors` when this guard is the one
    /// that failed.
    ///
    /// Useful where every check must be reported, not just the first:
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let mut errors = Vec::new();
    /// let (_, has_digit) = Outcome::success()
    ///     .ensure_recorded("hunter".contains(char::is_numeric), "needs a digit", Some(&mut errors));
    /// let (_, long_enough) = Outcome::success()
    ///     .ensure_recorded("hunter".len() >= 8, "needs 8 characters", Some(&mut errors));
    ///
    /// assert!(!has_digit && !long_enough);
    /// assert_eq!(errors, ["needs a digit", "needs 8 characters"]);
    /// ```
    #[track_caller]
    pub fn ensure_recorded(
        self,
        predicate: bool,
        error_message: impl Into<String>,
        errors: Option<&mut Vec<String>>,
    ) -> (Self, bool) {
        let call_site = CallSite::caller();
        if self.is_failure() {
            return (self, predicate);
        }
        if predicate {
            return (self, true);
        }
        let error_message = error_message.into();
        if let Some(errors) = errors {
            errors.push(error_message.clone());
        }
        (self.guard(false, error_message, call_site), false)
    }

    /// Compare two optional slices element by element.
    ///
    /// Checks, in order:
    /// 1. both absent: pass;
    /// 2. one absent: fail with `null_message(1)` or `null_message(2)`,
    ///    naming the absent side;
    /// 3. different lengths: fail with `length_message(first_len, second_len)`;
    /// 4. the first index where `predicate` is false: fail with
    ///    `mismatch_message(index, a, b)`;
    ///
    /// otherwise pass.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let expected = [1, 2, 3];
    /// let actual = [1, 5, 3];
    /// let checked = Outcome::success().ensure_pairwise(
    ///     Some(&expected[..]),
    ///     Some(&actual[..]),
    ///     |a, b| a == b,
    ///     |side| format!("array {side} is missing"),
    ///     |a, b| format!("lengths differ: {a} vs {b}"),
    ///     |i, a, b| format!("index {i}: expected {a}, got {b}"),
    /// );
    /// assert_eq!(checked.error(), "index 1: expected 2, got 5");
    /// ```
    #[track_caller]
    pub fn ensure_pairwise<A, B, P, N, L, M>(
        self,
        first: Option<&[A]>,
        second: Option<&[B]>,
        predicate: P,
        null_message: N,
        length_message: L,
        mismatch_message: M,
    ) -> Self
    where
        P: Fn(&A, &B) -> bool,
        N: FnOnce(usize) -> String,
        L: FnOnce(usize, usize) -> String,
        M: FnOnce(usize, &A, &B) -> String,
    {
        let call_site = CallSite::caller();
        if self.is_failure() {
            return self;
        }
        let problem = match (first, second) {
            (None, None) => None,
            (None, Some(_)) => Some(null_message(1)),
            (Some(_), None) => Some(null_message(2)),
            (Some(first), Some(second)) if first.len() != second.len() => {
                Some(length_message(first.len(), second.len()))
            }
            (Some(first), Some(second)) => first
                .iter()
                .zip(second)
                .enumerate()
                .find(|(_, (a, b))| !predicate(a, b))
                .map(|(index, (a, b))| mismatch_message(index, a, b)),
        };
        match problem {
            Some(message) => self.guard(false, message, call_site),
            None => self,
        }
    }

    /// Replace a success with a failure when `holds` is false, keeping the
    /// notes gathered so far.
    fn guard(self, holds: bool, error_message: impl Into<String>, call_site: CallSite) -> Self {
        if holds {
            return self;
        }
        let mut failed = Outcome::fail_at(error_message.into(), call_site);
        failed.notes = self.notes;
        failed
    }
}
