//! Errors raised when building compositions at runtime.

/// Misuse of [`compose_all`](super::compose_all).
///
/// # Examples
///
/// ```rust
/// use adequate::compose::{ComposeError, compose_all};
///
/// let error = compose_all::<i32>(Vec::new()).unwrap_err();
/// assert_eq!(error, ComposeError::Empty);
/// assert_eq!(format!("{error}"), "compose_all: at least one function is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    /// No functions were supplied.
    Empty,
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(formatter, "compose_all: at least one function is required"),
        }
    }
}

impl std::error::Error for ComposeError {}
