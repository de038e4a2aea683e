//! Errors raised by Twofold when a caller violates an operation's contract.

pub mod error;
