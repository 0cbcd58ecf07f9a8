//! Kanji records as stored in the dataset.

use super::Grade;
use serde::{Deserialize, Serialize};

/// One kanji with everything the question generators draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Kanji {
    /// The character itself.
    #[serde(rename = "char")]
    pub character: String,
    pub grade: Grade,
    pub readings: Readings,
    pub stroke_count: u8,
    pub examples: Vec<Example>,
    #[serde(default)]
    pub sentences: Vec<String>,
    #[serde(default)]
    pub radical: Option<Radical>,
    #[serde(default)]
    pub okurigana_examples: Vec<OkuriganaExample>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// On and kun readings.
///
/// Kun readings mark the okurigana boundary with a dot: `あ.がる`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Readings {
    #[serde(default)]
    pub on: Vec<String>,
    #[serde(default)]
    pub kun: Vec<String>,
}

/// Example word containing the kanji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Example {
    pub word: String,
    pub reading: String,
}

/// Where the radical sits inside the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadicalPosition {
    Left,
    Right,
    Top,
    Bottom,
    Enclosing,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Radical {
    #[serde(rename = "char")]
    pub character: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<RadicalPosition>,
}

/// Stem + okurigana split of a word, e.g. 上 + がる = 上がる.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OkuriganaExample {
    pub stem: String,
    pub okurigana: String,
    pub word: String,
    pub reading: String,
}

impl Kanji {
    /// First on reading, else first kun reading, else empty.
    pub fn primary_reading(&self) -> &str {
        self.readings
            .on
            .first()
            .or_else(|| self.readings.kun.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Text used to disambiguate the kanji among homophones:
    /// first sentence, else first example word, else the character.
    pub fn context(&self) -> &str {
        self.sentences
            .first()
            .map(String::as_str)
            .or_else(|| self.examples.first().map(|e| e.word.as_str()))
            .unwrap_or(&self.character)
    }
}

/// Drops the okurigana part of a kun reading: `あ.がる` → `あ`.
pub fn kun_stem(reading: &str) -> &str {
    match reading.split('.').next() {
        Some(stem) if !stem.is_empty() => stem,
        _ => reading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(on: &[&str], kun: &[&str]) -> Kanji {
        Kanji {
            character: "上".to_string(),
            grade: Grade::FIRST,
            readings: Readings {
                on: on.iter().map(|s| s.to_string()).collect(),
                kun: kun.iter().map(|s| s.to_string()).collect(),
            },
            stroke_count: 3,
            examples: vec![Example {
                word: "上手".to_string(),
                reading: "じょうず".to_string(),
            }],
            sentences: vec![],
            radical: None,
            okurigana_examples: vec![],
            antonyms: vec![],
            synonyms: vec![],
        }
    }

    #[test]
    fn primary_reading_prefers_on() {
        assert_eq!(sample(&["ジョウ"], &["うえ"]).primary_reading(), "ジョウ");
        assert_eq!(sample(&[], &["うえ"]).primary_reading(), "うえ");
        assert_eq!(sample(&[], &[]).primary_reading(), "");
    }

    #[test]
    fn context_falls_back_to_example_then_char() {
        let mut kanji = sample(&["ジョウ"], &[]);
        assert_eq!(kanji.context(), "上手");
        kanji.examples.clear();
        assert_eq!(kanji.context(), "上");
        kanji.sentences.push("上を見る。".to_string());
        assert_eq!(kanji.context(), "上を見る。");
    }

    #[test]
    fn kun_stem_strips_okurigana() {
        assert_eq!(kun_stem("あ.がる"), "あ");
        assert_eq!(kun_stem("うえ"), "うえ");
        assert_eq!(kun_stem(".x"), ".x");
    }

    #[test]
    fn deserializes_dataset_record() {
        let json = r#"{
            "char": "休",
            "grade": 1,
            "readings": { "on": ["キュウ"], "kun": ["やす.む"] },
            "strokeCount": 6,
            "examples": [{ "word": "休む", "reading": "やすむ" }],
            "radical": { "char": "亻", "name": "にんべん", "position": "left" }
        }"#;
        let kanji: Kanji = serde_json::from_str(json).unwrap();
        assert_eq!(kanji.character, "休");
        assert_eq!(kanji.stroke_count, 6);
        assert_eq!(
            kanji.radical.unwrap().position,
            Some(RadicalPosition::Left)
        );
        assert!(kanji.antonyms.is_empty());
    }
}
