//! Construction, aggregation and conversion of results.

use {
    crate::{lazy::LazyResult, types::Result},
    log::debug,
    std::{
        any::Any,
        convert::identity,
        panic::{self, UnwindSafe},
        result::Result as StdResult,
    },
    thiserror::Error,
};

/// A panic captured by [`DefaultResult::catch`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("computation panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        Self { message }
    }

    /// The message the computation panicked with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Factory and utility functions for [`Result`].
///
/// This type cannot be instantiated; every operation is an associated
/// function.
pub enum DefaultResult {}

impl DefaultResult {
    pub fn success<S, F>(value: S) -> Result<S, F> {
        Result::Success(value)
    }

    pub fn failure<S, F>(value: F) -> Result<S, F> {
        Result::Failure(value)
    }

    /// Succeed with a present value, or fail with `()` when it is absent.
    ///
    /// Accepts either a bare value or an `Option`.
    pub fn of_nullable<S>(value: impl Into<Option<S>>) -> Result<S, ()> {
        Self::of_optional(value.into())
    }

    /// Succeed with a present value, or fail with the supplied payload when
    /// it is absent. `failure_supplier` only runs when the value is absent.
    pub fn of_nullable_or_else<S, F>(
        value: impl Into<Option<S>>,
        failure_supplier: impl FnOnce() -> F,
    ) -> Result<S, F> {
        Self::of_optional_or_else(value.into(), failure_supplier)
    }

    pub fn of_optional<S>(value: Option<S>) -> Result<S, ()> {
        Self::of_optional_or_else(value, || ())
    }

    pub fn of_optional_or_else<S, F>(
        value: Option<S>,
        failure_supplier: impl FnOnce() -> F,
    ) -> Result<S, F> {
        match value {
            Some(value) => Result::Success(value),
            None => Result::Failure(failure_supplier()),
        }
    }

    /// Run a fallible computation, capturing its error as the failure.
    pub fn wrap<S, E>(callable: impl FnOnce() -> StdResult<S, E>) -> Result<S, E> {
        Self::wrap_with(callable, identity)
    }

    /// Run a fallible computation, mapping its error into the failure.
    pub fn wrap_with<S, E, F>(
        callable: impl FnOnce() -> StdResult<S, E>,
        exception_mapper: impl FnOnce(E) -> F,
    ) -> Result<S, F> {
        match callable() {
            Ok(value) => Result::Success(value),
            Err(err) => {
                debug!("Wrapped computation returned an error, capturing it as a failure");
                Result::Failure(exception_mapper(err))
            }
        }
    }

    /// Run a computation, capturing a panic as the failure.
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    pub fn catch<S>(callable: impl FnOnce() -> S + UnwindSafe) -> Result<S, CaughtPanic> {
        Self::catch_with(callable, identity)
    }

    pub fn catch_with<S, F>(
        callable: impl FnOnce() -> S + UnwindSafe,
        panic_mapper: impl FnOnce(CaughtPanic) -> F,
    ) -> Result<S, F> {
        match panic::catch_unwind(callable) {
            Ok(value) => Result::Success(value),
            Err(payload) => {
                let caught = CaughtPanic::from_payload(payload);
                debug!("Caught panic in wrapped computation: {}", caught.message());
                Result::Failure(panic_mapper(caught))
            }
        }
    }

    /// Aggregate results in order.
    ///
    /// Succeeds with every success payload when all inputs succeed. Otherwise
    /// fails with every failure payload, in input order; the success payloads
    /// are dropped. No input at all is a success with no values.
    ///
    /// See [`combine!`](crate::combine) for the variadic form.
    pub fn combine<S, F>(
        results: impl IntoIterator<Item = Result<S, F>>,
    ) -> Result<Vec<S>, Vec<F>> {
        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Result::Success(value) if failures.is_empty() => successes.push(value),
                Result::Success(_) => {}
                Result::Failure(value) => failures.push(value),
            }
        }
        if failures.is_empty() {
            Result::Success(successes)
        } else {
            Result::Failure(failures)
        }
    }

    pub fn to_optional<S, F>(result: Result<S, F>) -> Option<S> {
        result.into_success()
    }

    pub fn to_optional_failure<S, F>(result: Result<S, F>) -> Option<F> {
        result.into_failure()
    }

    /// Defer a computation until its result is first needed.
    pub fn lazy<S, F>(
        supplier: impl FnOnce() -> Result<S, F> + Send + 'static,
    ) -> LazyResult<S, F> {
        LazyResult::new(supplier)
    }
}

/// Aggregate any number of results, as [`DefaultResult::combine`] does.
///
/// ```rust
/// use twofold::{combine, DefaultResult, Result};
///
/// let all: Result<Vec<i32>, Vec<&str>> = combine![
///     DefaultResult::success(1),
///     DefaultResult::success(2),
///     DefaultResult::success(3),
/// ];
/// assert_eq!(all, Result::Success(vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! combine {
    ($($result:expr),* $(,)?) => {
        $crate::DefaultResult::combine([$($result),*])
    };
}

#[cfg(test)]
mod tests {
    use {super::*, std::cell::Cell};

    #[test]
    fn test_of_nullable() {
        assert_eq!(DefaultResult::of_nullable("x"), Result::Success("x"));
        assert_eq!(DefaultResult::of_nullable::<&str>(Some("x")), Result::Success("x"));
        assert_eq!(DefaultResult::of_nullable::<&str>(None), Result::Failure(()));
    }

    #[test]
    fn test_failure_supplier_runs_only_when_absent() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            "missing"
        };

        assert_eq!(
            DefaultResult::of_nullable_or_else(5, supplier),
            Result::Success(5)
        );
        assert_eq!(calls.get(), 0);

        assert_eq!(
            DefaultResult::of_optional_or_else(None::<i32>, supplier),
            Result::Failure("missing")
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_wrap_with_maps_only_errors() {
        let mapped = Cell::new(false);
        let ok: Result<u8, usize> = DefaultResult::wrap_with(
            || "42".parse::<u8>(),
            |err| {
                mapped.set(true);
                err.to_string().len()
            },
        );
        assert_eq!(ok, Result::Success(42));
        assert!(!mapped.get());

        let failed: Result<u8, String> =
            DefaultResult::wrap_with(|| "x".parse::<u8>(), |err| err.to_string());
        assert_eq!(
            failed,
            Result::Failure("invalid digit found in string".to_string())
        );
    }

    #[test]
    fn test_caught_panic_payloads() {
        let from_str = CaughtPanic::from_payload(Box::new("static"));
        assert_eq!(from_str.message(), "static");

        let from_string = CaughtPanic::from_payload(Box::new(String::from("owned")));
        assert_eq!(from_string.message(), "owned");

        let opaque = CaughtPanic::from_payload(Box::new(17u32));
        assert_eq!(opaque.message(), "Box<dyn Any>");
        assert_eq!(opaque.to_string(), "computation panicked: Box<dyn Any>");
    }

    #[test]
    fn test_combine_collects_all_failures() {
        let combined = DefaultResult::combine(vec![
            Result::Failure("a"),
            Result::Success(1),
            Result::Failure("b"),
        ]);
        assert_eq!(combined, Result::<Vec<i32>, _>::Failure(vec!["a", "b"]));
    }

    #[test]
    fn test_combine_empty() {
        let combined = DefaultResult::combine(Vec::<Result<i32, ()>>::new());
        assert_eq!(combined, Result::Success(vec![]));
    }
}
