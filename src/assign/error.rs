use thiserror::Error;

/// Errors raised by the assignment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// Empty or malformed engineer roster, or assignments naming unknown engineers.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Similarity backend failure. Absorbed by `SimilarityScorer::score`.
    #[error("scoring error: {0}")]
    Scoring(String),
    /// Unrecognized mode or plan component name.
    #[error("mode error: {0}")]
    Mode(String),
}
