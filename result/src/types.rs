//! The two-variant result type and its instance combinators.

use {
    std::{
        fmt::{self, Debug, Display},
        result::Result as StdResult,
    },
    twofold_error::error::{raise, TwofoldError},
};

/// The outcome of an operation that either succeeded or failed.
///
/// Both variants carry a payload. A `Result` is never mutated by its
/// combinators: every transformation consumes the receiver and produces a
/// new value, so a failure flows unchanged through any chain that does not
/// explicitly branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may be a `Failure` variant, which should be handled"]
pub enum Result<S, F> {
    /// The operation completed with a value.
    Success(S),
    /// The operation failed with a value.
    Failure(F),
}

impl<S, F> Result<S, F> {
    /// Returns `true` if this is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success payload, if any.
    pub const fn success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, if any.
    pub const fn failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    pub const fn as_ref(&self) -> Result<&S, &F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut S, &mut F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Returns `true` if this is a success holding `expected`.
    pub fn has_success(&self, expected: &S) -> bool
    where
        S: PartialEq,
    {
        self.success() == Some(expected)
    }

    /// Returns `true` if this is a failure holding `expected`.
    pub fn has_failure(&self, expected: &F) -> bool
    where
        F: PartialEq,
    {
        self.failure() == Some(expected)
    }

    /// Transform the success payload. A failure passes through.
    pub fn map<S2>(self, success_fn: impl FnOnce(S) -> S2) -> Result<S2, F> {
        self.map_both(success_fn, |failure| failure)
    }

    /// Transform whichever payload is present.
    pub fn map_both<S2, F2>(
        self,
        success_fn: impl FnOnce(S) -> S2,
        failure_fn: impl FnOnce(F) -> F2,
    ) -> Result<S2, F2> {
        match self {
            Self::Success(value) => Result::Success(success_fn(value)),
            Self::Failure(value) => Result::Failure(failure_fn(value)),
        }
    }

    /// Transform the failure payload. A success passes through.
    pub fn map_failure<F2>(self, failure_fn: impl FnOnce(F) -> F2) -> Result<S, F2> {
        self.map_both(|success| success, failure_fn)
    }

    /// Chain a computation that may itself fail. A failure passes through.
    pub fn flat_map<S2>(self, success_fn: impl FnOnce(S) -> Result<S2, F>) -> Result<S2, F> {
        self.flat_map_both(success_fn, Result::Failure)
    }

    /// Chain whichever branch is active into a new result. Both functions
    /// must agree on the resulting types, which lets a pipeline migrate to a
    /// different failure type.
    pub fn flat_map_both<S2, F2>(
        self,
        success_fn: impl FnOnce(S) -> Result<S2, F2>,
        failure_fn: impl FnOnce(F) -> Result<S2, F2>,
    ) -> Result<S2, F2> {
        match self {
            Self::Success(value) => success_fn(value),
            Self::Failure(value) => failure_fn(value),
        }
    }

    /// Chain a fallback computation on failure. A success passes through.
    pub fn flat_map_failure<F2>(
        self,
        failure_fn: impl FnOnce(F) -> Result<S, F2>,
    ) -> Result<S, F2> {
        self.flat_map_both(Result::Success, failure_fn)
    }

    /// Turn a success that does not satisfy `predicate` into a failure built
    /// from its payload.
    pub fn filter(
        self,
        predicate: impl FnOnce(&S) -> bool,
        failure_fn: impl FnOnce(S) -> F,
    ) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(failure_fn(value))
                }
            }
            failure => failure,
        }
    }

    /// Turn a failure that satisfies `predicate` into a success built from
    /// its payload.
    pub fn recover(
        self,
        predicate: impl FnOnce(&F) -> bool,
        success_fn: impl FnOnce(F) -> S,
    ) -> Self {
        match self {
            Self::Failure(value) => {
                if predicate(&value) {
                    Self::Success(success_fn(value))
                } else {
                    Self::Failure(value)
                }
            }
            success => success,
        }
    }

    /// Observe the success payload.
    pub fn handle(&self, success_consumer: impl FnOnce(&S)) -> &Self {
        if let Self::Success(value) = self {
            success_consumer(value);
        }
        self
    }

    pub fn handle_both(
        &self,
        success_consumer: impl FnOnce(&S),
        failure_consumer: impl FnOnce(&F),
    ) -> &Self {
        match self {
            Self::Success(value) => success_consumer(value),
            Self::Failure(value) => failure_consumer(value),
        }
        self
    }

    /// Observe the failure payload.
    pub fn handle_failure(&self, failure_consumer: impl FnOnce(&F)) -> &Self {
        if let Self::Failure(value) = self {
            failure_consumer(value);
        }
        self
    }

    pub fn or_else(self, default: S) -> S {
        self.or_else_map(|_| default)
    }

    pub fn or_else_map(self, failure_fn: impl FnOnce(F) -> S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => failure_fn(value),
        }
    }

    /// Take the success payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure, with a message rendering the failure
    /// payload.
    #[track_caller]
    pub fn or_else_throw(self) -> S
    where
        F: Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => raise(TwofoldError::NotASuccess(&value)),
        }
    }

    /// Take the success payload, or the error built from the failure payload
    /// so the caller can propagate it with `?`.
    pub fn or_else_throw_with<E>(self, failure_fn: impl FnOnce(F) -> E) -> StdResult<S, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => Err(failure_fn(value)),
        }
    }

    /// Take the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn get_failure_or_else_throw(self) -> F
    where
        S: Debug,
    {
        match self {
            Self::Success(value) => raise(TwofoldError::NotAFailure(&value)),
            Self::Failure(value) => value,
        }
    }

    /// Iterate over the success payload: one element, or none.
    pub fn iter_success(&self) -> std::option::IntoIter<&S> {
        self.success().into_iter()
    }

    /// Iterate over the failure payload: one element, or none.
    pub fn iter_failure(&self) -> std::option::IntoIter<&F> {
        self.failure().into_iter()
    }

    pub fn into_std(self) -> StdResult<S, F> {
        self.into()
    }
}

impl<S, F> From<StdResult<S, F>> for Result<S, F> {
    fn from(result: StdResult<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

impl<S, F> From<Result<S, F>> for StdResult<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(value) => Err(value),
        }
    }
}

impl<S: Display, F: Display> Display for Result<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "success[{}]", value),
            Self::Failure(value) => write!(f, "failure[{}]", value),
        }
    }
}
