//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TdError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The base error type for `td-core` and a common variant for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum TdError {
    #[error("{what}: empty or inverted range [{min}, {max})")]
    InvalidRange {
        what: &'static str,
        min:  f32,
        max:  f32,
    },

    #[error("{what} must be positive, got {value}")]
    NotPositive {
        what:  &'static str,
        value: f32,
    },
}

/// Shorthand result type for all `td-*` crates.
pub type TdResult<T> = Result<T, TdError>;
