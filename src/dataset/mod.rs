//! Kanji table lookup.
//!
//! A small table covering every grade ships inside the binary. A larger table
//! with the same JSON schema can be loaded from disk instead.

pub mod radicals;

pub use radicals::RadicalMap;

use crate::model::{Grade, Kanji};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_JSON: &str = include_str!("../../data/kanji.json");

/// Errors loading a kanji table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Failed to read kanji table at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Invalid kanji table: {0}")]
    ParseError(String),

    #[error("Kanji entry {index} has an empty character")]
    EmptyCharacter { index: usize },

    #[error("Kanji '{0}' appears more than once")]
    DuplicateCharacter(String),
}

/// Ordered table of kanji records.
#[derive(Debug, Clone, PartialEq)]
pub struct KanjiDataset {
    kanji: Vec<Kanji>,
}

impl KanjiDataset {
    /// The table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only if the embedded table is malformed.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Parses and validates a JSON array of kanji records.
    ///
    /// Radicals are resolved through [`RadicalMap::builtin`]; a record's own
    /// `radical` is kept only for kanji the common-radical table lacks.
    ///
    /// # Errors
    ///
    /// Returns error for malformed JSON, an out-of-range grade, an empty
    /// character, or a character listed twice.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let mut kanji: Vec<Kanji> =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError(e.to_string()))?;
        let resolved = RadicalMap::builtin()?.apply(&mut kanji);
        tracing::debug!(resolved, "Resolved radicals from common-radical table");
        Self::new(kanji)
    }

    /// Loads a table from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or fails [`Self::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let dataset = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), kanji = dataset.len(), "Loaded kanji table");
        Ok(dataset)
    }

    /// Wraps already-built records, with the same validation as
    /// [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Returns error for an empty or duplicated character.
    pub fn new(kanji: Vec<Kanji>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(kanji.len());
        for (index, k) in kanji.iter().enumerate() {
            if k.character.trim().is_empty() {
                return Err(DatasetError::EmptyCharacter { index });
            }
            if !seen.insert(k.character.as_str()) {
                return Err(DatasetError::DuplicateCharacter(k.character.clone()));
            }
        }
        Ok(Self { kanji })
    }

    pub fn len(&self) -> usize {
        self.kanji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kanji.is_empty()
    }

    pub fn all(&self) -> &[Kanji] {
        &self.kanji
    }

    pub fn get(&self, character: &str) -> Option<&Kanji> {
        self.kanji.iter().find(|k| k.character == character)
    }

    /// Kanji of one grade, in table order.
    pub fn by_grade(&self, grade: Grade) -> Vec<&Kanji> {
        self.kanji.iter().filter(|k| k.grade == grade).collect()
    }

    /// Kanji of one grade minus `excluded`, in table order.
    pub fn by_grade_filtered(&self, grade: Grade, excluded: &[String]) -> Vec<&Kanji> {
        self.kanji
            .iter()
            .filter(|k| k.grade == grade && !excluded.contains(&k.character))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(kanji: &[&Kanji]) -> Vec<String> {
        kanji.iter().map(|k| k.character.clone()).collect()
    }

    #[test]
    fn builtin_table_loads() {
        let dataset = KanjiDataset::builtin().unwrap();
        assert!(!dataset.is_empty());
    }

    #[test]
    fn builtin_table_covers_every_grade() {
        let dataset = KanjiDataset::builtin().unwrap();
        for grade in Grade::all() {
            assert!(
                !dataset.by_grade(grade).is_empty(),
                "grade {grade} has no kanji"
            );
        }
    }

    #[test]
    fn builtin_examples_contain_their_kanji() {
        let dataset = KanjiDataset::builtin().unwrap();
        for k in dataset.all() {
            assert!(!k.examples.is_empty(), "{} has no examples", k.character);
            for example in &k.examples {
                assert!(
                    example.word.contains(&k.character),
                    "{} not in example {}",
                    k.character,
                    example.word
                );
            }
            for ok in &k.okurigana_examples {
                assert_eq!(format!("{}{}", ok.stem, ok.okurigana), ok.word);
            }
        }
    }

    #[test]
    fn builtin_relations_point_into_the_same_grade() {
        let dataset = KanjiDataset::builtin().unwrap();
        for k in dataset.all() {
            for other in k.antonyms.iter().chain(&k.synonyms) {
                let target = dataset.get(other).unwrap();
                assert_eq!(target.grade, k.grade, "{} -> {}", k.character, other);
            }
        }
    }

    #[test]
    fn by_grade_keeps_table_order() {
        let dataset = KanjiDataset::builtin().unwrap();
        let first = chars(&dataset.by_grade(Grade::FIRST));
        assert_eq!(&first[..3], ["一", "上", "下"]);
    }

    #[test]
    fn by_grade_filtered_drops_excluded() {
        let dataset = KanjiDataset::builtin().unwrap();
        let excluded = vec!["上".to_string(), "大".to_string()];
        let filtered = chars(&dataset.by_grade_filtered(Grade::FIRST, &excluded));
        assert!(!filtered.contains(&"上".to_string()));
        assert!(!filtered.contains(&"大".to_string()));
        assert_eq!(filtered.len(), dataset.by_grade(Grade::FIRST).len() - 2);
    }

    #[test]
    fn from_json_rejects_bad_grade() {
        let json = r#"[{"char":"字","grade":7,"readings":{"on":["ジ"]},"strokeCount":6,"examples":[]}]"#;
        assert!(matches!(
            KanjiDataset::from_json(json),
            Err(DatasetError::ParseError(_))
        ));
    }

    #[test]
    fn from_json_rejects_duplicates() {
        let json = r#"[
            {"char":"字","grade":1,"readings":{},"strokeCount":6,"examples":[]},
            {"char":"字","grade":1,"readings":{},"strokeCount":6,"examples":[]}
        ]"#;
        assert_eq!(
            KanjiDataset::from_json(json),
            Err(DatasetError::DuplicateCharacter("字".to_string()))
        );
    }

    #[test]
    fn from_json_rejects_empty_character() {
        let json = r#"[{"char":" ","grade":1,"readings":{},"strokeCount":1,"examples":[]}]"#;
        assert_eq!(
            KanjiDataset::from_json(json),
            Err(DatasetError::EmptyCharacter { index: 0 })
        );
    }

    #[test]
    fn builtin_radicals_prefer_common_radical_table() {
        let data = KanjiDataset::builtin().unwrap();

        let dai = data.get("大").unwrap().radical.as_ref().unwrap();
        assert_eq!(dai.character, "人");
        assert_eq!(dai.name, "ひと");

        let rest = data.get("休").unwrap().radical.as_ref().unwrap();
        assert_eq!(rest.character, "亻");
        assert_eq!(rest.name, "にんべん");
    }

    #[test]
    fn unlisted_kanji_keep_their_own_radical() {
        let json = r#"[{"char": "正", "grade": 1, "readings": {"on": [], "kun": []},
            "strokeCount": 5, "examples": [],
            "radical": {"char": "止", "name": "とめる", "position": "bottom"}}]"#;
        let data = KanjiDataset::from_json(json).unwrap();
        assert_eq!(data.get("正").unwrap().radical.as_ref().unwrap().character, "止");
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = KanjiDataset::from_path("/nonexistent/kanji.json");
        assert!(matches!(result, Err(DatasetError::ReadError { .. })));
    }
}
