//! Generated questions.
//!
//! The layout engine never looks inside a question; only the generator and
//! the renderers do.

use super::{Example, Kanji};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One worksheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Kanji the question was drawn from.
    pub kanji: Kanji,
    /// Reading shown or asked for.
    pub reading: String,
    pub detail: QuestionDetail,
}

/// Mode-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QuestionDetail {
    /// Reading, writing, stroke count, stroke order and sentence modes.
    Example {
        example: Example,
        sentence: Option<String>,
    },
    Homophone {
        reading: String,
        options: Vec<HomophoneOption>,
    },
    #[serde(rename_all = "camelCase")]
    Radical {
        target_kanji: String,
        answer_radical: String,
        answer_radical_name: String,
    },
    #[serde(rename_all = "camelCase")]
    Okurigana {
        stem: String,
        answer: String,
        full_word: String,
        hint: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Antonym {
        relation: Relation,
        source_kanji: String,
        answer_kanji: String,
    },
}

/// One candidate in a homophone question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomophoneOption {
    pub kanji: String,
    pub context: String,
}

/// Relation asked for in an antonym question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Antonym,
    Synonym,
}

impl Relation {
    pub fn label(self) -> &'static str {
        match self {
            Relation::Antonym => "対義語",
            Relation::Synonym => "類義語",
        }
    }
}

/// Which relations the antonym generator may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationFilter {
    Antonym,
    Synonym,
    #[default]
    Mixed,
}

impl RelationFilter {
    pub fn admits(self, relation: Relation) -> bool {
        match self {
            RelationFilter::Mixed => true,
            RelationFilter::Antonym => relation == Relation::Antonym,
            RelationFilter::Synonym => relation == Relation::Synonym,
        }
    }
}

impl fmt::Display for RelationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelationFilter::Antonym => "antonym",
            RelationFilter::Synonym => "synonym",
            RelationFilter::Mixed => "mixed",
        })
    }
}

impl FromStr for RelationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "antonym" => Ok(RelationFilter::Antonym),
            "synonym" => Ok(RelationFilter::Synonym),
            "mixed" => Ok(RelationFilter::Mixed),
            other => Err(format!("unknown relation filter '{other}'")),
        }
    }
}
