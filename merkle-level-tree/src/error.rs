use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from Merkle level tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A level index outside `0..=depth` was queried.
    #[error("level {index} out of range, deepest level is {depth}")]
    LevelOutOfRange {
        /// The requested level index.
        index: usize,
        /// The leaf level index of the tree (its deepest valid level).
        depth: usize,
    },
    /// The injected hasher reported a failure; no tree was built.
    #[error("hasher failure: {0}")]
    HasherFailure(String),
    /// Malformed node data (hex decoding).
    #[error("invalid data: {0}")]
    InvalidData(String),
}
