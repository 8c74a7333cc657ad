use thiserror::Error;

/// Errors raised while building a [`Pattern`](crate::Pattern).
///
/// Compiling and matching are total; only construction from text can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("literal must be exactly one character, got {0:?}")]
    InvalidLiteral(String),
}

pub type Result<T> = std::result::Result<T, PatternError>;
