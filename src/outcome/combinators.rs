//! Pipeline combinators: `on_success*`, `on_failure*`, `on_both*`.
//!
//! Every combinator consumes the outcome and returns one. A failure
//! short-circuits the `on_success*` family: their callbacks never run, and
//! the failure travels on with its error text, underlying error and notes.
//! When a stage changes the value type, the failure is rebuilt under the new
//! type with all three carried over and the stage's call site stamped on it.

use super::{CallSite, Outcome, State};

impl<T> Outcome<T> {
    /// Run `action` on a success; pass the outcome on unchanged.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let mut flushed = false;
    /// let outcome = Outcome::success().on_success_do(|| flushed = true);
    /// assert!(flushed && outcome.is_success());
    /// ```
    pub fn on_success_do<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_success() {
            action();
        }
        self
    }

    /// Run `action` with the success value; pass the outcome on unchanged.
    pub fn on_success_tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            action(value);
        }
        self
    }

    /// Transform the success value.
    ///
    /// `f` cannot fail; its result is wrapped in a new success that keeps the
    /// notes gathered so far. A failure is carried over to `Outcome<U>`.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let length = Outcome::ok("hello").with_note("trimmed").on_success(str::len);
    /// assert_eq!(*length.value(), 5);
    /// assert_eq!(length.notes(), &["trimmed".to_string()]);
    /// ```
    #[track_caller]
    pub fn on_success<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        let call_site = CallSite::caller();
        match self.state {
            State::Success(value) => {
                Outcome::build(State::Success(f(value)), self.notes, call_site)
            }
            State::Failure { error, exception } => {
                Outcome::failure_from_parts(error, exception, self.notes, call_site)
            }
        }
    }

    /// Continue with a stage that may itself fail.
    ///
    /// On success the outcome of `f` is returned with the notes gathered so
    /// far placed before its own. A failure is carried over to `Outcome<U>`
    /// without calling `f`.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     Outcome::from_predicate(n % 2 == 0, "odd").on_success(|_| n / 2)
    /// }
    ///
    /// assert_eq!(*Outcome::ok(8).on_success_try(half).value(), 4);
    /// assert_eq!(Outcome::ok(7).on_success_try(half).error(), "odd");
    /// ```
    #[track_caller]
    pub fn on_success_try<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        let call_site = CallSite::caller();
        match self.state {
            State::Success(value) => {
                let mut next = f(value);
                if !self.notes.is_empty() {
                    let mut notes = self.notes;
                    notes.append(&mut next.notes);
                    next.notes = notes;
                }
                next
            }
            State::Failure { error, exception } => {
                Outcome::failure_from_parts(error, exception, self.notes, call_site)
            }
        }
    }

    /// Run a check against the success value, keeping the value.
    ///
    /// When the check fails, its failure replaces this outcome; otherwise the
    /// outcome passes on with the check's notes appended.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let checked = Outcome::ok(3)
    ///     .on_success_check(|n| Outcome::from_predicate(*n < 10, "too large"));
    /// assert_eq!(*checked.value(), 3);
    /// ```
    #[track_caller]
    pub fn on_success_check<U, F>(mut self, check: F) -> Self
    where
        F: FnOnce(&T) -> Outcome<U>,
    {
        let call_site = CallSite::caller();
        let checked = match &self.state {
            State::Success(value) => check(value),
            State::Failure { .. } => return self,
        };
        match checked.state {
            State::Success(_) => {
                self.notes.extend(checked.notes);
                self
            }
            State::Failure { error, exception } => {
                let mut notes = self.notes;
                notes.extend(checked.notes);
                Outcome::failure_from_parts(error, exception, notes, call_site)
            }
        }
    }

    /// Run `action` on a failure; pass the outcome on unchanged.
    pub fn on_failure_do<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_failure() {
            action();
        }
        self
    }

    /// Run `action` with the error text of a failure; pass the outcome on
    /// unchanged.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let mut reported = String::new();
    /// let _ = Outcome::<i32>::fail("timeout").on_failure(|e| reported = e.to_string());
    /// assert_eq!(reported, "timeout");
    /// ```
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let State::Failure { error, .. } = &self.state {
            action(error);
        }
        self
    }

    /// Replace a failure with the outcome generated by `fallback`; pass a
    /// success on unchanged.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let port = Outcome::<u16>::fail("PORT unset")
    ///     .on_failure_generated_default(|| Outcome::ok(8080));
    /// assert_eq!(*port.value(), 8080);
    /// ```
    pub fn on_failure_generated_default<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        if self.is_failure() {
            fallback()
        } else {
            self
        }
    }

    /// Run `action` with the outcome, whatever it is; pass it on unchanged.
    pub fn on_both<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Run `action`, whatever the outcome; pass it on unchanged.
    pub fn on_both_do<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        action();
        self
    }

    /// Finish a pipeline by handing the outcome to `f`.
    ///
    /// ```
    /// use trackline::Outcome;
    ///
    /// let status = Outcome::<i32>::fail("no route")
    ///     .on_both_into(|o| if o.is_success() { 200 } else { 404 });
    /// assert_eq!(status, 404);
    /// ```
    pub fn on_both_into<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Drop the success value, keeping success or failure, the error text,
    /// the underlying error and the notes.
    #[track_caller]
    pub fn strip_data(self) -> Outcome<()> {
        let call_site = CallSite::caller();
        match self.state {
            State::Success(_) => Outcome::build(State::Success(()), self.notes, call_site),
            State::Failure { error, exception } => {
                Outcome::failure_from_parts(error, exception, self.notes, call_site)
            }
        }
    }
}
