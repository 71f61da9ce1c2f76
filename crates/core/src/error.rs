use thiserror::Error;

/// Errors raised by `SessionStore` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// A progress action kind that has no entry in the increment table.
    #[error("unrecognized progress action: {0}")]
    InvalidAction(String),
}
