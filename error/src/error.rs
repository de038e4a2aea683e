//! Contract violations and the helpers used to raise them.

use {std::fmt::Debug, thiserror::Error};

#[derive(Debug, Error)]
pub enum TwofoldError<'a> {
    /// A success payload was requested from a failed result.
    #[error("    [TWOFOLD]: Not a successful result: failure[{0:?}]")]
    NotASuccess(&'a dyn Debug),
    /// A failure payload was requested from a successful result.
    #[error("    [TWOFOLD]: Not a failed result: success[{0:?}]")]
    NotAFailure(&'a dyn Debug),
    /// The supplier of a lazy result panicked while it was being evaluated.
    #[error("    [TWOFOLD]: Lazy result supplier panicked during a previous evaluation")]
    LazyResultPoisoned,
    /// One or more checks against a result did not pass.
    #[error("    [TWOFOLD]: {0} check(s) failed:\n{1}")]
    CheckFailed(usize, &'a str),
}

/// Raise a contract violation at the caller's location.
#[cold]
#[track_caller]
pub fn raise(error: TwofoldError) -> ! {
    panic!("{}", error)
}

pub trait TwofoldPanic<T> {
    fn or_panic_with(self, error: TwofoldError) -> T;
}

impl<T, E: Debug> TwofoldPanic<T> for Result<T, E> {
    #[track_caller]
    fn or_panic_with(self, error: TwofoldError) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{}: {:?}", error, err),
        }
    }
}

impl<T> TwofoldPanic<T> for Option<T> {
    #[track_caller]
    fn or_panic_with(self, error: TwofoldError) -> T {
        match self {
            Some(value) => value,
            None => raise(error),
        }
    }
}
