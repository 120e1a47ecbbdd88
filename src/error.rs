//! Error types for k2psl.

use thiserror::Error;

use crate::Authority;

/// Error type for k2psl operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A rule line could not be parsed
    #[error("malformed rule at line {line} ({content:?}): {reason}")]
    MalformedRule {
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    /// Section BEGIN/END markers do not pair up
    #[error("unbalanced section marker at line {line}: {marker}")]
    UnbalancedSection { line: usize, marker: String },

    /// Input ended while a section was still open
    #[error("unterminated {0} section")]
    UnterminatedSection(Authority),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// List bytes are not valid UTF-8
    #[error("suffix list is not valid UTF-8")]
    InvalidEncoding,

    /// Gzip stream could not be decoded
    #[error("gzip decompression failed: {0}")]
    Decompress(String),

    /// Global engine not initialized
    #[error("suffix engine not initialized")]
    NotInitialized,

    /// Global engine initialized twice
    #[error("suffix engine already initialized")]
    AlreadyInitialized,

    /// Unknown output name
    #[error("unknown output: {0}")]
    UnknownOutput(String),
}

/// Result type alias for k2psl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single rule line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Rule has an empty label (leading, trailing or doubled dot)
    #[error("empty label")]
    EmptyLabel,

    /// `*` used anywhere but as the whole leftmost label
    #[error("wildcard is only allowed as the leftmost label")]
    MisplacedWildcard,

    /// `!` and `*` combined in one rule
    #[error("exception rules cannot contain a wildcard")]
    WildcardException,

    /// Exception rule with a single label
    #[error("exception rules need at least two labels")]
    ShortException,

    /// A lone `*` with nothing to its right
    #[error("bare wildcard rule")]
    BareWildcard,
}
