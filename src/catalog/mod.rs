pub mod dictionary;
pub mod level;
pub mod shuffle;

use serde::{Deserialize, Serialize};

use crate::catalog::level::Level;

/// One drill item: a Turkish word and its English translation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "tr")]
    pub source: String,
    #[serde(rename = "en")]
    pub target: String,
}

impl WordPair {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Length of the translation in characters, the unit hints reveal.
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }
}

pub trait WordCatalog {
    /// Ordered word list for a graded level. Empty for levels the catalog lacks.
    fn words(&self, level: Level) -> Vec<WordPair>;

    /// Every graded level concatenated in level order.
    fn all(&self) -> Vec<WordPair> {
        Level::GRADED
            .iter()
            .flat_map(|&level| self.words(level))
            .collect()
    }
}

/// Words eligible for a session at `level`. The mixed pool draws from every graded level.
pub fn words_for<C: WordCatalog + ?Sized>(catalog: &C, level: Level) -> Vec<WordPair> {
    match level {
        Level::Mixed => catalog.all(),
        graded => catalog.words(graded),
    }
}
