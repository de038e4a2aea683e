//! Validation checks for Twofold results.
//!
//! This crate offers a declarative way to assert on the variant and payload
//! of a [`twofold::Result`] or [`twofold::LazyResult`], mostly for tests.
//!
//! # Validation
//!
//! * [`Check`] - A single expectation about a result
//! * [`RunChecks`] - Run a list of checks against a result
//! * [`Config`] - Whether failed checks panic and whether they are logged
//! * [`SoftChecks`] - Collect failures across many results and report once
//!
//! # Example
//!
//! ```rust
//! use twofold::{Failure, Result};
//! use twofold_check::{Check, Config, RunChecks};
//!
//! let result: Result<u32, &str> = Failure("denied");
//! let checks = [Check::failure(), Check::failure_eq(&"denied")];
//!
//! assert!(result.run_checks(&checks, &Config::default()));
//! ```

pub mod check;
pub mod config;
pub mod soft;

pub use {
    check::{Check, RunChecks},
    config::Config,
    soft::SoftChecks,
};
