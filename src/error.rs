use thiserror::Error;

/// Errors returned by [`OrderedTree`](crate::OrderedTree) mutators.
///
/// Queries report absence with `None` instead, since a miss is an expected
/// outcome there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No stored value compared equal to the one asked for.
    #[error("value not found in tree")]
    NotFound,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
