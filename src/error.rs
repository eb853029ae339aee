use thiserror::Error;

/// Errors surfaced by puzzle generation.
///
/// Occupied cells are never errors; placement slides past them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no room for '{word}' after {probes} probes")]
    PlacementExhausted { word: String, probes: usize },

    #[error("image encoding failed: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
