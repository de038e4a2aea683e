//! Configuration for how failed checks are reported.

use {
    log::warn,
    std::fmt,
    twofold_error::error::{raise, TwofoldError},
};

pub struct Config {
    /// Panic on the first failed check.
    pub panic: bool,
    /// Log every failed check at `warn` level.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panic: true,
            verbose: false,
        }
    }
}

/// Receives the outcome of each check and applies the [`Config`].
pub(crate) struct Reporter<'a> {
    config: &'a Config,
    failures: &'a mut Vec<String>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(config: &'a Config, failures: &'a mut Vec<String>) -> Self {
        Self { config, failures }
    }

    /// Record a failed check. Always returns `false`.
    #[track_caller]
    pub(crate) fn fail(&mut self, message: fmt::Arguments) -> bool {
        let message = message.to_string();
        if self.config.panic {
            raise(TwofoldError::CheckFailed(1, &message));
        }
        if self.config.verbose {
            warn!("{}", message);
        }
        self.failures.push(message);
        false
    }
}

macro_rules! compare {
    ($r:expr, $check:expr, $left:expr, $right:expr $(,)?) => {{
        if $left == $right {
            true
        } else {
            $r.fail(format_args!(
                "CHECK: {}: expected {:?}, got {:?}",
                $check, $left, $right
            ))
        }
    }};
}

macro_rules! throw {
    ($r:expr, $($arg:tt)+) => {{
        $r.fail(format_args!($($arg)+))
    }};
}

pub(crate) use {compare, throw};
