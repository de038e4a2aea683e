//! A two-variant result type with a combinator algebra.
//!
//! A [`Result`] is either a [`Success`] or a [`Failure`], and both variants
//! carry a payload. Expected failures travel through a pipeline as data:
//! combinators transform or chain the active branch and pass the other one
//! through untouched.
//!
//! # Core Types
//!
//! * [`Result`] - The outcome of an operation, with its instance combinators
//! * [`DefaultResult`] - Factories, aggregation and conversions
//! * [`LazyResult`] - A result computed on first use
//! * [`CaughtPanic`] - The failure payload produced by [`DefaultResult::catch`]
//!
//! # Example
//!
//! ```rust
//! use twofold::{DefaultResult, Result};
//!
//! let parsed: Result<u16, String> =
//!     DefaultResult::wrap_with(|| "8080".parse::<u16>(), |err| err.to_string());
//!
//! let port = parsed
//!     .filter(|port| *port >= 1024, |port| format!("privileged port {}", port))
//!     .map(|port| port + 1)
//!     .or_else(8000);
//!
//! assert_eq!(port, 8081);
//! ```
//!
//! Contract violations, such as taking the failure payload of a success,
//! panic at the call site with a `twofold_error::error::TwofoldError`.

pub mod factory;
pub mod lazy;
pub mod types;

pub use {
    factory::{CaughtPanic, DefaultResult},
    lazy::LazyResult,
    types::Result::{self, Failure, Success},
};
