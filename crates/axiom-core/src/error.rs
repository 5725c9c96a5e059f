//! Error taxonomy for AXIOM.
//!
//! Detection and scoring never fail. Errors only arise while building a
//! detector or scorer from user-supplied configuration.

/// AXIOM configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum AxiomError {
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("invalid core weights: {0}")]
    InvalidWeights(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for AXIOM operations.
pub type Result<T> = std::result::Result<T, AxiomError>;
