//! Matrix construction errors.

use thiserror::Error;

/// Errors building a [`crate::DependencyMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// `rows * cols` does not fit in `usize`.
    #[error("{rows}x{cols} matrix is too large")]
    TooLarge { rows: usize, cols: usize },
}
