//! Question generation.
//!
//! Each mode draws from its own candidate pool (see [`pools`]). Randomness is
//! injected through [`RandomSource`] so a seed reproduces a worksheet exactly.

pub mod pools;
pub mod rng;

pub use pools::{homophone_groups, homophone_index, relation_pairs, HomophoneGroup, Pool};
pub use rng::{shuffle, shuffled, RandomSource, XorShiftRng};

use crate::dataset::KanjiDataset;
use crate::model::{Grade, PrintMode, Question, RelationFilter};
use crate::settings::Settings;
use thiserror::Error;

/// Errors from question generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The grade has nothing this mode can ask about.
    #[error("No {mode} questions can be generated for grade {grade}")]
    NoCandidates { mode: PrintMode, grade: Grade },
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub grade: Grade,
    pub mode: PrintMode,
    pub count: usize,
    pub random: bool,
    pub excluded: Vec<String>,
    pub relation_filter: RelationFilter,
}

impl GenerateRequest {
    /// Enough questions to fill every page the settings ask for.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            grade: settings.grade,
            mode: settings.mode,
            count: settings.total_questions(),
            random: settings.random,
            excluded: settings.excluded_kanji.clone(),
            relation_filter: settings.antonym_filter,
        }
    }
}

/// Builds the candidate pool for a request.
pub fn pool_for<'a>(dataset: &'a KanjiDataset, request: &GenerateRequest) -> Pool<'a> {
    let kanji = dataset.by_grade_filtered(request.grade, &request.excluded);
    Pool::build(&kanji, request.mode, request.relation_filter)
}

/// Generates `request.count` questions.
///
/// Antonym pools may come back short: selection gives up after a bounded
/// number of passes over a very small pair list.
///
/// # Errors
///
/// Returns [`GenerateError::NoCandidates`] if the pool is empty after
/// exclusions.
pub fn generate<R: RandomSource + ?Sized>(
    dataset: &KanjiDataset,
    request: &GenerateRequest,
    rng: &mut R,
) -> Result<Vec<Question>, GenerateError> {
    let pool = pool_for(dataset, request);
    if pool.is_empty() {
        tracing::warn!(
            mode = %request.mode,
            grade = %request.grade,
            excluded = request.excluded.len(),
            "No candidates for request"
        );
        return Err(GenerateError::NoCandidates {
            mode: request.mode,
            grade: request.grade,
        });
    }

    let questions = pool.select(request.count, request.random, rng);

    if questions.len() < request.count {
        tracing::warn!(
            mode = %request.mode,
            requested = request.count,
            generated = questions.len(),
            "Candidate pool exhausted before request was filled"
        );
    }
    tracing::info!(
        mode = %request.mode,
        grade = %request.grade,
        pool = pool.len(),
        generated = questions.len(),
        random = request.random,
        "Generated questions"
    );

    Ok(questions)
}

/// Whether `mode` has anything to ask for `grade` once `excluded` is removed.
pub fn can_generate(
    dataset: &KanjiDataset,
    grade: Grade,
    mode: PrintMode,
    excluded: &[String],
) -> bool {
    let kanji = dataset.by_grade_filtered(grade, excluded);
    !Pool::build(&kanji, mode, RelationFilter::Mixed).is_empty()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
