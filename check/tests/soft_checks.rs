use {
    twofold::{DefaultResult, Failure, LazyResult, Result, Success},
    twofold_check::{Check, Config, RunChecks, SoftChecks},
};

#[derive(Debug, PartialEq)]
enum FetchError {
    NotFound,
    Timeout(u32),
}

fn fetch(id: u32) -> Result<String, FetchError> {
    match id {
        0 => Failure(FetchError::NotFound),
        id if id > 100 => Failure(FetchError::Timeout(id)),
        id => Success(format!("record-{}", id)),
    }
}

#[test]
fn test_soft_checks_collect_every_failure() {
    solana_logger::setup_with_default("twofold_check=warn");

    let mut soft = SoftChecks::new(true);
    soft.check(&fetch(1), &[Check::success()])
        .check(&fetch(0), &[Check::success()])
        .check(&fetch(101), &[Check::failure_eq(&FetchError::Timeout(5))])
        .check(
            &fetch(7),
            &[Check::success_satisfies("prefixed", |record: &String| {
                record.starts_with("record-")
            })],
        );

    assert_eq!(
        soft.failures(),
        &[
            "CHECK: variant: expected \"success\", got \"failure\"".to_string(),
            "CHECK: failure: expected Timeout(5), got Timeout(101)".to_string(),
        ]
    );
}

#[test]
fn test_soft_checks_pass() {
    let mut soft = SoftChecks::default();
    soft.check(&fetch(3), &[Check::success(), Check::success_eq(&"record-3".to_string())])
        .check(&fetch(0), &[Check::failure_eq(&FetchError::NotFound)]);
    assert!(soft.failures().is_empty());
    soft.assert_all();
}

#[test]
#[should_panic(expected = "2 check(s) failed:\nCHECK: variant")]
fn test_soft_checks_assert_all() {
    let mut soft = SoftChecks::default();
    soft.check(&fetch(0), &[Check::success()])
        .check(&fetch(200), &[Check::failure_eq(&FetchError::NotFound)]);
    soft.assert_all();
}

#[test]
fn test_soft_checks_on_lazy_results() {
    let lazy = LazyResult::new(|| fetch(150)).map_failure(|err| match err {
        FetchError::Timeout(after) => after,
        FetchError::NotFound => 0,
    });

    let mut soft = SoftChecks::default();
    soft.check_lazy(
        &lazy,
        &[
            Check::failure(),
            Check::failure_satisfies("long wait", |after: &u32| *after >= 100),
        ],
    );
    assert!(soft.failures().is_empty());
}

#[test]
fn test_run_checks_with_combined_results() {
    let combined = DefaultResult::combine((1..=3).map(fetch));
    let expected = vec![
        "record-1".to_string(),
        "record-2".to_string(),
        "record-3".to_string(),
    ];
    combined.validate(&[Check::success(), Check::success_eq(&expected)]);

    let combined = DefaultResult::combine([0, 5, 500].map(fetch));
    let expected = vec![FetchError::NotFound, FetchError::Timeout(500)];
    assert!(combined.run_checks(&[Check::failure_eq(&expected)], &Config::default()));
}

#[test]
#[should_panic(expected = "CHECK: variant: expected \"failure\", got \"success\"")]
fn test_validate_panics_on_first_failure() {
    fetch(9).validate(&[Check::failure(), Check::success()]);
}
