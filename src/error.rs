//! Error types for the transform engine.

use thiserror::Error;

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the call that caused them. None are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Wrong argument arity or shape, e.g. a sequence without exactly three entries.
    #[error("invalid arguments: {0}")]
    Argument(String),

    /// The selector matched no element.
    #[error("no element matches selector `{0}`")]
    Lookup(String),

    /// Lookup was given something that is neither a selector nor an element.
    #[error("expected a selector string or an element, got {0}")]
    Type(String),

    /// The host refused the style write.
    #[error("failed to write style: {0}")]
    Style(String),
}
