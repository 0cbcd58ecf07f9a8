//! Common-radical table.
//!
//! Maps kanji to one of the radicals taught in elementary school. When a
//! kanji is listed here the table wins over the radical carried in the kanji
//! record itself; the record's radical is only a fallback.

use super::DatasetError;
use crate::model::{Kanji, Radical, RadicalPosition};
use serde::Deserialize;
use std::collections::HashMap;

const BUILTIN_JSON: &str = include_str!("../../data/radical_map.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadicalName {
    #[serde(rename = "char")]
    character: String,
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct Mapping {
    radical: String,
    #[serde(default)]
    position: Option<RadicalPosition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadicalMapFile {
    radicals: Vec<RadicalName>,
    kanji: HashMap<String, Mapping>,
}

/// Kanji → radical lookup with radical names.
#[derive(Debug, Clone, Default)]
pub struct RadicalMap {
    names: HashMap<String, String>,
    kanji: HashMap<String, Mapping>,
}

impl RadicalMap {
    /// The table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only if the embedded table is malformed.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// # Errors
    ///
    /// Returns error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let file: RadicalMapFile =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError(e.to_string()))?;

        Ok(Self {
            names: file
                .radicals
                .into_iter()
                .map(|r| (r.character, r.name))
                .collect(),
            kanji: file.kanji,
        })
    }

    pub fn len(&self) -> usize {
        self.kanji.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kanji.is_empty()
    }

    /// Radical for `kanji`: the table entry if it names a known radical,
    /// otherwise whatever the record carries.
    pub fn resolve(&self, kanji: &Kanji) -> Option<Radical> {
        self.lookup(&kanji.character)
            .or_else(|| kanji.radical.clone())
    }

    fn lookup(&self, character: &str) -> Option<Radical> {
        let mapping = self.kanji.get(character)?;
        let name = self.names.get(&mapping.radical)?;
        Some(Radical {
            character: mapping.radical.clone(),
            name: name.clone(),
            position: mapping.position,
        })
    }

    /// Rewrites each record's radical to the resolved one.
    ///
    /// Returns how many records the table overrode or filled in.
    pub fn apply(&self, kanji: &mut [Kanji]) -> usize {
        let mut changed = 0;
        for k in kanji.iter_mut() {
            let resolved = self.resolve(k);
            if resolved != k.radical {
                k.radical = resolved;
                changed += 1;
            }
        }
        changed
    }
}
