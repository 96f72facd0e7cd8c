use thiserror::Error;

use crate::catalog::level::Level;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    #[error("level {0} has no words in the catalog")]
    InvalidLevel(Level),
    #[error("unknown level `{0}` (expected one of A1, A2, B1, B2, mixed)")]
    UnknownLevel(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed word catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Level(#[from] DrillError),
    #[error("`mixed` is derived from the graded levels and cannot be listed in a catalog")]
    MixedKey,
    #[error("blank word pair at index {index} in level {level}")]
    BlankEntry { level: Level, index: usize },
    #[error("translation at index {index} in level {level} has more than one word")]
    MultiWordTarget { level: Level, index: usize },
}
