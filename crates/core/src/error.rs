//! Errors for the length-checked entry points
//!
//! The array-typed hash functions cannot fail. These errors only come out of
//! the slice-based helpers, name parsing and the known-answer self-test.

use crate::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input must be exactly {expected} bytes, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    #[error("output buffer must be exactly {expected} bytes, got {actual}")]
    InvalidOutputLength { expected: usize, actual: usize },

    #[error("unknown hash algorithm (expected one of: blake, groestl, jh, skein)")]
    UnknownAlgorithm,

    #[error("{algorithm} does not reproduce its known-answer digest")]
    KnownAnswerMismatch { algorithm: Algorithm },
}
