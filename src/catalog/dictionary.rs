use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_embed::Embed;

use crate::catalog::level::Level;
use crate::catalog::{WordCatalog, WordPair};
use crate::error::CatalogError;

#[derive(Embed)]
#[folder = "assets/words/"]
struct WordAssets;

/// Word lists keyed by graded level.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    levels: BTreeMap<Level, Vec<WordPair>>,
}

impl Dictionary {
    /// The word lists bundled with the binary.
    pub fn embedded() -> Self {
        let mut levels = BTreeMap::new();
        for level in Level::GRADED {
            let Some(name) = level.asset_name() else {
                continue;
            };
            let words = match WordAssets::get(name) {
                Some(file) => decode_bundled(name, file.data.as_ref()),
                None => {
                    log::warn!("bundled word list {name} is missing");
                    Vec::new()
                }
            };
            if words.is_empty() {
                log::warn!("bundled word list {name} is empty");
            }
            levels.insert(level, words);
        }
        Self { levels }
    }

    /// Parse a catalog of the form `{"A1": [{"tr": "elma", "en": "apple"}], ...}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<WordPair>> = serde_json::from_str(json)?;
        let mut levels = BTreeMap::new();
        for (key, words) in raw {
            let level: Level = key.parse()?;
            if !level.is_graded() {
                return Err(CatalogError::MixedKey);
            }
            if let Some(index) = words
                .iter()
                .position(|w| w.source.trim().is_empty() || w.target.trim().is_empty())
            {
                return Err(CatalogError::BlankEntry { level, index });
            }
            if let Some(index) = words
                .iter()
                .position(|w| w.target.trim().contains(char::is_whitespace))
            {
                return Err(CatalogError::MultiWordTarget { level, index });
            }
            levels.insert(level, words);
        }
        Ok(Self { levels })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading word catalog {}", path.display()))?;
        let dictionary = Self::from_json(&content)
            .with_context(|| format!("parsing word catalog {}", path.display()))?;
        log::info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode_bundled(name: &str, data: &[u8]) -> Vec<WordPair> {
    match serde_json::from_slice(data) {
        Ok(words) => words,
        Err(err) => {
            log::warn!("bundled word list {name} is malformed: {err}");
            Vec::new()
        }
    }
}

impl WordCatalog for Dictionary {
    fn words(&self, level: Level) -> Vec<WordPair> {
        self.levels.get(&level).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::words_for;

    #[test]
    fn every_bundled_level_has_words() {
        let dictionary = Dictionary::embedded();
        for level in Level::GRADED {
            assert!(
                !dictionary.words(level).is_empty(),
                "level {level} has no bundled words"
            );
        }
    }

    #[test]
    fn bundled_sources_are_unique_within_a_level() {
        let dictionary = Dictionary::embedded();
        for level in Level::GRADED {
            let words = dictionary.words(level);
            let sources: HashSet<&str> = words.iter().map(|w| w.source.as_str()).collect();
            assert_eq!(sources.len(), words.len(), "duplicate source in {level}");
        }
    }

    #[test]
    fn bundled_targets_are_single_words() {
        // Space submits the answer, so a target containing one could never be typed.
        let dictionary = Dictionary::embedded();
        for pair in dictionary.all() {
            assert!(!pair.target.contains(char::is_whitespace), "{pair:?}");
        }
    }

    #[test]
    fn mixed_pool_is_union_of_graded_levels() {
        let dictionary = Dictionary::embedded();
        let graded: usize = Level::GRADED
            .iter()
            .map(|&l| dictionary.words(l).len())
            .sum();
        assert_eq!(words_for(&dictionary, Level::Mixed).len(), graded);
        assert_eq!(dictionary.len(), graded);
    }

    #[test]
    fn parses_user_catalog() {
        let json = r#"{
            "A1": [{"tr": "elma", "en": "apple"}, {"tr": "kitap", "en": "book"}],
            "b2": [{"tr": "kanıt", "en": "evidence"}]
        }"#;
        let dictionary = Dictionary::from_json(json).unwrap();
        assert_eq!(dictionary.words(Level::A1).len(), 2);
        assert_eq!(dictionary.words(Level::B2)[0].target, "evidence");
        assert!(dictionary.words(Level::A2).is_empty());
    }

    #[test]
    fn rejects_unknown_level_key() {
        let err = Dictionary::from_json(r#"{"C1": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Level(_)));
    }

    #[test]
    fn rejects_mixed_key() {
        let err = Dictionary::from_json(r#"{"mixed": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::MixedKey));
    }

    #[test]
    fn rejects_blank_entries() {
        let err =
            Dictionary::from_json(r#"{"A1": [{"tr": "elma", "en": "apple"}, {"tr": "ev", "en": "  "}]}"#)
                .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::BlankEntry {
                level: Level::A1,
                index: 1
            }
        ));
    }

    #[test]
    fn rejects_multi_word_targets() {
        let json = r#"{"B1": [{"tr": "dondurma", "en": "ice cream"}]}"#;
        let err = Dictionary::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MultiWordTarget {
                level: Level::B1,
                index: 0
            }
        ));
    }

    #[test]
    fn padded_single_word_target_is_accepted() {
        let dictionary = Dictionary::from_json(r#"{"A1": [{"tr": "su", "en": " water "}]}"#).unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn malformed_bundled_list_decodes_to_empty() {
        assert!(decode_bundled("a1.json", b"{not json").is_empty());
        assert_eq!(
            decode_bundled("a1.json", br#"[{"tr": "elma", "en": "apple"}]"#),
            vec![WordPair::new("elma", "apple")]
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Dictionary::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"{"A2": [{"tr": "bahçe", "en": "garden"}]}"#).unwrap();
        let dictionary = Dictionary::load(&path).unwrap();
        assert_eq!(dictionary.words(Level::A2), vec![WordPair::new("bahçe", "garden")]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Dictionary::load(&dir.path().join("nope.json")).is_err());
    }
}
