//! Print modes and grid styles.
//!
//! Both are closed sets. Parsing accepts the camelCase tag used in persisted
//! settings as well as the kebab-case spelling used on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Practice mode of a worksheet.
///
/// Each mode selects a row-height formula in the layout engine and a
/// candidate pool in the question generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrintMode {
    /// Read the kanji, write its reading.
    Reading,
    /// Read the word, write the kanji.
    Writing,
    /// Answer the stroke count.
    StrokeCount,
    /// Follow the stroke order and practice.
    StrokeOrder,
    /// Copy an example sentence cell by cell.
    Sentence,
    /// Pick the right kanji among same-reading candidates.
    Homophone,
    /// Name the radical.
    Radical,
    /// Write the inflectional kana suffix.
    Okurigana,
    /// Answer the antonym or synonym.
    Antonym,
}

impl PrintMode {
    /// Every mode, in menu order.
    pub const ALL: [PrintMode; 9] = [
        PrintMode::Reading,
        PrintMode::Writing,
        PrintMode::StrokeCount,
        PrintMode::StrokeOrder,
        PrintMode::Sentence,
        PrintMode::Homophone,
        PrintMode::Radical,
        PrintMode::Okurigana,
        PrintMode::Antonym,
    ];

    /// The camelCase tag used in persisted settings.
    pub fn as_str(self) -> &'static str {
        match self {
            PrintMode::Reading => "reading",
            PrintMode::Writing => "writing",
            PrintMode::StrokeCount => "strokeCount",
            PrintMode::StrokeOrder => "strokeOrder",
            PrintMode::Sentence => "sentence",
            PrintMode::Homophone => "homophone",
            PrintMode::Radical => "radical",
            PrintMode::Okurigana => "okurigana",
            PrintMode::Antonym => "antonym",
        }
    }

    /// Short Japanese label shown in menus.
    pub fn label(self) -> &'static str {
        match self {
            PrintMode::Reading => "読み練習",
            PrintMode::Writing => "書き練習",
            PrintMode::StrokeCount => "画数",
            PrintMode::StrokeOrder => "書き順",
            PrintMode::Sentence => "例文写経",
            PrintMode::Homophone => "同音異字",
            PrintMode::Radical => "部首",
            PrintMode::Okurigana => "送りがな",
            PrintMode::Antonym => "対義語・類義語",
        }
    }

    /// Instruction printed under the title on the first page.
    pub fn instruction(self) -> &'static str {
        match self {
            PrintMode::Reading => "漢字の読み方を書きましょう",
            PrintMode::Writing => "漢字を書きましょう",
            PrintMode::StrokeCount => "漢字の画数を答えましょう",
            PrintMode::StrokeOrder => "書き順を見て漢字を練習しましょう",
            PrintMode::Sentence => "文を書き写しましょう",
            PrintMode::Homophone => "同じ読みの漢字を使い分けましょう",
            PrintMode::Radical => "漢字の部首を答えましょう",
            PrintMode::Okurigana => "正しい送りがなを書きましょう",
            PrintMode::Antonym => "対義語・類義語を答えましょう",
        }
    }

    /// Modes that draw from the plain (kanji, example word) pool.
    pub fn uses_example_pool(self) -> bool {
        matches!(
            self,
            PrintMode::Reading
                | PrintMode::Writing
                | PrintMode::StrokeCount
                | PrintMode::StrokeOrder
                | PrintMode::Sentence
        )
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized mode or grid style tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTagError {
    #[error("unknown print mode '{0}'")]
    Mode(String),
    #[error("unknown grid style '{0}'")]
    GridStyle(String),
}

impl FromStr for PrintMode {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        PrintMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ParseTagError::Mode(s.to_string()))
    }
}

/// Guide lines drawn inside each practice cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    /// Dashed cross through the cell centre.
    #[default]
    Cross,
    /// Centre dot only.
    Dots,
    /// Plain cell.
    None,
}

impl GridStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            GridStyle::Cross => "cross",
            GridStyle::Dots => "dots",
            GridStyle::None => "none",
        }
    }
}

impl fmt::Display for GridStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridStyle {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cross" => Ok(GridStyle::Cross),
            "dots" => Ok(GridStyle::Dots),
            "none" => Ok(GridStyle::None),
            _ => Err(ParseTagError::GridStyle(s.to_string())),
        }
    }
}
