//! Check system for validating individual results.

use {
    crate::config::{compare, throw, Config, Reporter},
    std::fmt::Debug,
    twofold::{LazyResult, Result},
};

enum CheckType<'a, S, F> {
    /// Check that the result is a success.
    IsSuccess,
    /// Check that the result is a failure.
    IsFailure,
    /// Check the success payload.
    Success(&'a S),
    /// Check the failure payload.
    Failure(&'a F),
    /// Check that the success payload satisfies a named requirement.
    SuccessSatisfies(&'a str, Box<dyn Fn(&S) -> bool + 'a>),
    /// Check that the failure payload satisfies a named requirement.
    FailureSatisfies(&'a str, Box<dyn Fn(&F) -> bool + 'a>),
}

pub struct Check<'a, S, F> {
    check: CheckType<'a, S, F>,
}

impl<'a, S, F> Check<'a, S, F> {
    fn new(check: CheckType<'a, S, F>) -> Self {
        Self { check }
    }

    /// Assert that the result is a success.
    pub fn success() -> Self {
        Check::new(CheckType::IsSuccess)
    }

    /// Assert that the result is a failure.
    pub fn failure() -> Self {
        Check::new(CheckType::IsFailure)
    }

    /// Assert that the result is a success holding `expected`.
    pub fn success_eq(expected: &'a S) -> Self {
        Check::new(CheckType::Success(expected))
    }

    /// Assert that the result is a failure holding `expected`.
    pub fn failure_eq(expected: &'a F) -> Self {
        Check::new(CheckType::Failure(expected))
    }

    /// Assert that the result is a success whose payload satisfies
    /// `requirement`. `name` identifies the requirement in reports.
    pub fn success_satisfies(name: &'a str, requirement: impl Fn(&S) -> bool + 'a) -> Self {
        Check::new(CheckType::SuccessSatisfies(name, Box::new(requirement)))
    }

    /// Assert that the result is a failure whose payload satisfies
    /// `requirement`. `name` identifies the requirement in reports.
    pub fn failure_satisfies(name: &'a str, requirement: impl Fn(&F) -> bool + 'a) -> Self {
        Check::new(CheckType::FailureSatisfies(name, Box::new(requirement)))
    }
}

fn variant<S, F>(result: &Result<S, F>) -> &'static str {
    if result.is_success() {
        "success"
    } else {
        "failure"
    }
}

pub(crate) fn evaluate<S, F>(
    result: &Result<S, F>,
    checks: &[Check<S, F>],
    reporter: &mut Reporter,
) -> bool
where
    S: Debug + PartialEq,
    F: Debug + PartialEq,
{
    let r = reporter;
    let mut pass = true;
    for check in checks {
        match &check.check {
            CheckType::IsSuccess => {
                pass &= compare!(r, "variant", "success", variant(result));
            }
            CheckType::IsFailure => {
                pass &= compare!(r, "variant", "failure", variant(result));
            }
            CheckType::Success(expected) => {
                let Some(actual) = result.success() else {
                    pass &= throw!(
                        r,
                        "CHECK: success: expected success[{:?}], got {:?}",
                        expected,
                        result,
                    );
                    continue;
                };
                pass &= compare!(r, "success", *expected, actual);
            }
            CheckType::Failure(expected) => {
                let Some(actual) = result.failure() else {
                    pass &= throw!(
                        r,
                        "CHECK: failure: expected failure[{:?}], got {:?}",
                        expected,
                        result,
                    );
                    continue;
                };
                pass &= compare!(r, "failure", *expected, actual);
            }
            CheckType::SuccessSatisfies(name, requirement) => {
                let Some(actual) = result.success() else {
                    pass &= throw!(r, "CHECK: {}: expected a success, got {:?}", name, result);
                    continue;
                };
                if !requirement(actual) {
                    pass &= throw!(
                        r,
                        "CHECK: {}: success[{:?}] does not satisfy the requirement",
                        name,
                        actual,
                    );
                }
            }
            CheckType::FailureSatisfies(name, requirement) => {
                let Some(actual) = result.failure() else {
                    pass &= throw!(r, "CHECK: {}: expected a failure, got {:?}", name, result);
                    continue;
                };
                if !requirement(actual) {
                    pass &= throw!(
                        r,
                        "CHECK: {}: failure[{:?}] does not satisfy the requirement",
                        name,
                        actual,
                    );
                }
            }
        }
    }
    pass
}

/// Run checks against a result.
pub trait RunChecks<S, F> {
    /// Perform checks on the result, reporting failures as `config` asks.
    /// Returns `true` if every check passed.
    fn run_checks(&self, checks: &[Check<S, F>], config: &Config) -> bool;

    /// Perform checks on the result, panicking on the first failure.
    fn validate(&self, checks: &[Check<S, F>]) {
        self.run_checks(checks, &Config::default());
    }
}

impl<S, F> RunChecks<S, F> for Result<S, F>
where
    S: Debug + PartialEq,
    F: Debug + PartialEq,
{
    fn run_checks(&self, checks: &[Check<S, F>], config: &Config) -> bool {
        let mut failures = Vec::new();
        evaluate(self, checks, &mut Reporter::new(config, &mut failures))
    }
}

impl<S, F> RunChecks<S, F> for LazyResult<S, F>
where
    S: Debug + PartialEq,
    F: Debug + PartialEq,
{
    fn run_checks(&self, checks: &[Check<S, F>], config: &Config) -> bool {
        self.get().run_checks(checks, config)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, twofold::{Failure, Success}};

    fn quiet() -> Config {
        Config {
            panic: false,
            verbose: false,
        }
    }

    #[test]
    fn test_variant_checks() {
        let ok: Result<i32, &str> = Success(1);
        let err: Result<i32, &str> = Failure("e");

        assert!(ok.run_checks(&[Check::success()], &quiet()));
        assert!(!ok.run_checks(&[Check::failure()], &quiet()));
        assert!(err.run_checks(&[Check::failure()], &quiet()));
        assert!(!err.run_checks(&[Check::success()], &quiet()));
    }

    #[test]
    fn test_payload_checks() {
        let ok: Result<i32, &str> = Success(1);
        let err: Result<i32, &str> = Failure("e");

        assert!(ok.run_checks(&[Check::success(), Check::success_eq(&1)], &quiet()));
        assert!(!ok.run_checks(&[Check::success_eq(&2)], &quiet()));
        assert!(!ok.run_checks(&[Check::failure_eq(&"e")], &quiet()));
        assert!(err.run_checks(&[Check::failure_eq(&"e")], &quiet()));
        assert!(!err.run_checks(&[Check::success_eq(&1)], &quiet()));
    }

    #[test]
    fn test_requirement_checks() {
        let ok: Result<i32, &str> = Success(10);
        let err: Result<i32, &str> = Failure("timeout");

        let even = Check::success_satisfies("even", |v: &i32| v % 2 == 0);
        let small = Check::success_satisfies("small", |v: &i32| *v < 5);
        assert!(ok.run_checks(&[even], &quiet()));
        assert!(!ok.run_checks(&[small], &quiet()));

        let retryable = Check::failure_satisfies("retryable", |f: &&str| *f == "timeout");
        assert!(err.run_checks(&[retryable], &quiet()));
        assert!(!ok.run_checks(
            &[Check::failure_satisfies("retryable", |_: &&str| true)],
            &quiet()
        ));
    }

    #[test]
    fn test_all_checks_run_without_panic() {
        let err: Result<i32, &str> = Failure("e");
        let mut failures = Vec::new();
        let pass = evaluate(
            &err,
            &[Check::success(), Check::failure_eq(&"e"), Check::success_eq(&3)],
            &mut Reporter::new(&quiet(), &mut failures),
        );
        assert!(!pass);
        assert_eq!(
            failures,
            vec![
                "CHECK: variant: expected \"success\", got \"failure\"".to_string(),
                "CHECK: success: expected success[3], got Failure(\"e\")".to_string(),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "CHECK: success: expected 2, got 1")]
    fn test_validate_panics() {
        Success::<i32, ()>(1).validate(&[Check::success(), Check::success_eq(&2)]);
    }

    #[test]
    fn test_lazy_result_checks() {
        let lazy = LazyResult::new(|| Failure::<i32, String>("late".to_string()));
        let expected = "late".to_string();
        assert!(lazy.run_checks(&[Check::failure(), Check::failure_eq(&expected)], &quiet()));
        assert!(lazy.is_evaluated());
    }
}
