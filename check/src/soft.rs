//! Soft checks: collect every failure across many results, report once.

use {
    crate::{
        check::{evaluate, Check},
        config::{Config, Reporter},
    },
    std::fmt::Debug,
    twofold::{LazyResult, Result},
    twofold_error::error::{raise, TwofoldError},
};

/// Runs checks against any number of results without panicking, then
/// reports all the failed checks together with [`SoftChecks::assert_all`].
///
/// ```rust
/// use twofold::{Failure, Result, Success};
/// use twofold_check::{Check, SoftChecks};
///
/// let parsed: Result<u16, String> = Success(8080);
/// let rejected: Result<u16, String> = Failure("privileged".to_string());
///
/// let mut soft = SoftChecks::default();
/// soft.check(&parsed, &[Check::success(), Check::success_eq(&8080)])
///     .check(&rejected, &[Check::failure()]);
/// soft.assert_all();
/// ```
pub struct SoftChecks {
    config: Config,
    failures: Vec<String>,
}

impl Default for SoftChecks {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SoftChecks {
    /// With `verbose`, each failed check is also logged as it happens.
    pub fn new(verbose: bool) -> Self {
        Self {
            config: Config {
                panic: false,
                verbose,
            },
            failures: Vec::new(),
        }
    }

    pub fn check<S, F>(&mut self, result: &Result<S, F>, checks: &[Check<S, F>]) -> &mut Self
    where
        S: Debug + PartialEq,
        F: Debug + PartialEq,
    {
        evaluate(
            result,
            checks,
            &mut Reporter::new(&self.config, &mut self.failures),
        );
        self
    }

    pub fn check_lazy<S, F>(
        &mut self,
        result: &LazyResult<S, F>,
        checks: &[Check<S, F>],
    ) -> &mut Self
    where
        S: Debug + PartialEq,
        F: Debug + PartialEq,
    {
        self.check(result.get(), checks)
    }

    /// Messages of every failed check so far, in the order they failed.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Panic if any check failed, listing all of them.
    #[track_caller]
    pub fn assert_all(self) {
        if self.failures.is_empty() {
            return;
        }
        let report = self.failures.join("\n");
        raise(TwofoldError::CheckFailed(self.failures.len(), &report));
    }
}
