//! Error types for cache construction and operation
//!
//! The taxonomy is deliberately minimal: the simulator is a closed,
//! pure-computation core, so the only failure surfaces synchronously at
//! construction time. Arbitrary block identifiers, repeated accesses and
//! mode switches are all valid inputs; absence of a block drives the miss
//! path rather than an error.

/// Cache operation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOperationError {
    /// Configuration rejected at construction; no partial cache is created
    InvalidConfiguration(String),
}

impl std::fmt::Display for CacheOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheOperationError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for CacheOperationError {}

impl CacheOperationError {
    /// Create invalid configuration error
    #[inline(always)]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
