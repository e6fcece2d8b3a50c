//! Round start errors

use thiserror::Error;

/// Errors that prevent a round from starting
///
/// Per-submission rejections are not errors; see [`super::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The word pool had no usable (non-blank) entries
    #[error("word pool is empty, cannot choose a root word")]
    EmptyPool,

    /// A root word was supplied but was blank after trimming
    #[error("root word must not be blank")]
    BlankRootWord,
}
