//! Results whose backing value is computed on first use.

use {
    crate::types::Result,
    log::trace,
    std::{
        fmt::{self, Debug},
        sync::{Mutex, OnceLock},
    },
    twofold_error::error::{TwofoldError, TwofoldPanic},
};

type Supplier<S, F> = Box<dyn FnOnce() -> Result<S, F> + Send>;

/// A [`Result`] produced by a supplier the first time it is needed.
///
/// The supplier runs at most once, even when several threads demand the
/// value at the same time. Combinators such as [`LazyResult::map`] do not
/// evaluate anything; they return a new lazy result that will apply the
/// transformation once it is evaluated.
pub struct LazyResult<S, F> {
    supplier: Mutex<Option<Supplier<S, F>>>,
    backing: OnceLock<Result<S, F>>,
}

impl<S, F> LazyResult<S, F> {
    pub fn new(supplier: impl FnOnce() -> Result<S, F> + Send + 'static) -> Self {
        Self {
            supplier: Mutex::new(Some(Box::new(supplier))),
            backing: OnceLock::new(),
        }
    }

    /// Returns `true` once the supplier has run.
    pub fn is_evaluated(&self) -> bool {
        self.backing.get().is_some()
    }

    /// Evaluate the supplier if needed and borrow the backing result.
    ///
    /// # Panics
    ///
    /// Panics if an earlier evaluation panicked.
    pub fn get(&self) -> &Result<S, F> {
        self.backing.get_or_init(|| {
            // The lock is only held to take the supplier, never while it runs.
            let supplier = self
                .supplier
                .lock()
                .ok()
                .and_then(|mut supplier| supplier.take())
                .or_panic_with(TwofoldError::LazyResultPoisoned);
            trace!("Evaluating lazy result");
            supplier()
        })
    }

    /// Evaluate the supplier if needed and take the backing result.
    pub fn into_result(self) -> Result<S, F> {
        let Self { supplier, backing } = self;
        if let Some(result) = backing.into_inner() {
            return result;
        }
        let supplier = supplier
            .into_inner()
            .ok()
            .flatten()
            .or_panic_with(TwofoldError::LazyResultPoisoned);
        trace!("Evaluating lazy result");
        supplier()
    }

    pub fn is_success(&self) -> bool {
        self.get().is_success()
    }

    pub fn is_failure(&self) -> bool {
        self.get().is_failure()
    }

    /// Evaluate now and observe the success payload.
    pub fn handle(&self, success_consumer: impl FnOnce(&S)) -> &Self {
        self.get().handle(success_consumer);
        self
    }

    /// Evaluate now and observe the failure payload.
    pub fn handle_failure(&self, failure_consumer: impl FnOnce(&F)) -> &Self {
        self.get().handle_failure(failure_consumer);
        self
    }
}

impl<S: Send + 'static, F: Send + 'static> LazyResult<S, F> {
    pub fn map<S2>(self, success_fn: impl FnOnce(S) -> S2 + Send + 'static) -> LazyResult<S2, F> {
        LazyResult::new(move || self.into_result().map(success_fn))
    }

    pub fn map_both<S2, F2>(
        self,
        success_fn: impl FnOnce(S) -> S2 + Send + 'static,
        failure_fn: impl FnOnce(F) -> F2 + Send + 'static,
    ) -> LazyResult<S2, F2> {
        LazyResult::new(move || self.into_result().map_both(success_fn, failure_fn))
    }

    pub fn map_failure<F2>(
        self,
        failure_fn: impl FnOnce(F) -> F2 + Send + 'static,
    ) -> LazyResult<S, F2> {
        LazyResult::new(move || self.into_result().map_failure(failure_fn))
    }

    pub fn flat_map<S2>(
        self,
        success_fn: impl FnOnce(S) -> Result<S2, F> + Send + 'static,
    ) -> LazyResult<S2, F> {
        LazyResult::new(move || self.into_result().flat_map(success_fn))
    }

    pub fn flat_map_both<S2, F2>(
        self,
        success_fn: impl FnOnce(S) -> Result<S2, F2> + Send + 'static,
        failure_fn: impl FnOnce(F) -> Result<S2, F2> + Send + 'static,
    ) -> LazyResult<S2, F2> {
        LazyResult::new(move || self.into_result().flat_map_both(success_fn, failure_fn))
    }

    pub fn flat_map_failure<F2>(
        self,
        failure_fn: impl FnOnce(F) -> Result<S, F2> + Send + 'static,
    ) -> LazyResult<S, F2> {
        LazyResult::new(move || self.into_result().flat_map_failure(failure_fn))
    }

    pub fn filter(
        self,
        predicate: impl FnOnce(&S) -> bool + Send + 'static,
        failure_fn: impl FnOnce(S) -> F + Send + 'static,
    ) -> Self {
        LazyResult::new(move || self.into_result().filter(predicate, failure_fn))
    }

    /// Defer observing the success payload until the returned result is
    /// evaluated.
    pub fn handle_lazily(self, success_consumer: impl FnOnce(&S) + Send + 'static) -> Self {
        LazyResult::new(move || {
            let result = self.into_result();
            result.handle(success_consumer);
            result
        })
    }

    /// Defer observing the failure payload until the returned result is
    /// evaluated.
    pub fn handle_failure_lazily(self, failure_consumer: impl FnOnce(&F) + Send + 'static) -> Self {
        LazyResult::new(move || {
            let result = self.into_result();
            result.handle_failure(failure_consumer);
            result
        })
    }
}

impl<S, F> From<Result<S, F>> for LazyResult<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Self {
            supplier: Mutex::new(None),
            backing: OnceLock::from(result),
        }
    }
}

impl<S: Debug, F: Debug> Debug for LazyResult<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.backing.get() {
            Some(result) => write!(f, "lazy-result[{:?}]", result),
            None => write!(f, "lazy-result[<pending>]"),
        }
    }
}
