//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`GridError`, `SimError`, …) and
//! keep this one for the shared primitives: parsing positions and
//! directions from text.

use thiserror::Error;

/// The top-level error type for `gc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `gc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
