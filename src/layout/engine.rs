//! Layout fitting operations.
//!
//! Pure functions of a cell size (mm) and, for vertical fitting, a print
//! mode. Every operation is total over positive cell sizes: results that
//! would be degenerate are clamped to a floor (1 row, 3 practice columns,
//! 1 okurigana cell) instead of propagating zero or negative counts into a
//! renderer. Cell size range checks belong to settings validation.

use super::geometry::{
    AVAILABLE_HEIGHT_MM, PRACTICE_COLUMNS_MIN, SAFE_CONTENT_WIDTH_MM, WRITING_SAFE_WIDTH_MM,
};
use crate::model::PrintMode;
use serde::Serialize;

/// Gutter for the question number in a writing row.
pub const QUESTION_NUMBER_WIDTH_MM: f64 = 6.0;
/// Gap between elements of a writing row.
pub const ITEM_GAP_MM: f64 = 3.0;
/// Word label width, in cell sizes (room for about four characters).
pub const WORD_LABEL_CELLS: f64 = 2.5;
/// Okurigana answer cells are drawn smaller than kanji cells.
pub const OKURIGANA_CELL_SCALE: f64 = 0.7;
/// Number gutter plus gaps reserved beside the kanji in an okurigana row.
pub const OKURIGANA_CHROME_MM: f64 = 15.0;
/// Share of the maximum used for the default practice column count.
pub const RECOMMENDED_SHARE: f64 = 0.7;
/// Upper bound on the recommended practice column count.
pub const RECOMMENDED_COLUMNS_CAP: u32 = 8;

/// Vertical space one question row consumes: `scale × cell + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowHeight {
    pub scale: f64,
    pub offset_mm: f64,
}

impl RowHeight {
    pub const fn new(scale: f64, offset_mm: f64) -> Self {
        Self { scale, offset_mm }
    }

    /// Row height in mm for the given cell size.
    pub fn at(self, cell_size_mm: f64) -> f64 {
        self.scale * cell_size_mm + self.offset_mm
    }
}

/// One cell row plus fixed vertical margin.
const SINGLE_ROW: RowHeight = RowHeight::new(1.0, 6.0);
/// Model row and practice row stacked. The row chrome (gaps, number,
/// separators) is folded into the 2.5 scale rather than a fixed offset:
/// `2c + 16` would give 5 rows at 15mm, and the printed sheet has 6.
const SENTENCE_ROWS: RowHeight = RowHeight::new(2.5, 0.0);
/// Heading plus up to three answer lines, safety margin folded into the scale.
const HOMOPHONE_ROWS: RowHeight = RowHeight::new(2.8, 0.0);

/// Row-height formula per mode. Adding a mode means adding a line here.
const ROW_HEIGHTS: [(PrintMode, RowHeight); 9] = [
    (PrintMode::Reading, SINGLE_ROW),
    (PrintMode::Writing, SINGLE_ROW),
    (PrintMode::StrokeCount, SINGLE_ROW),
    (PrintMode::StrokeOrder, SINGLE_ROW),
    (PrintMode::Sentence, SENTENCE_ROWS),
    (PrintMode::Homophone, HOMOPHONE_ROWS),
    (PrintMode::Radical, SINGLE_ROW),
    (PrintMode::Okurigana, SINGLE_ROW),
    (PrintMode::Antonym, SINGLE_ROW),
];

/// Row-height formula for a mode.
///
/// Offsets are zero for the multi-line modes: their chrome scales with the
/// cell and lives in `scale`.
pub fn row_height(mode: PrintMode) -> RowHeight {
    ROW_HEIGHTS
        .iter()
        .find(|(m, _)| *m == mode)
        .map(|(_, height)| *height)
        .unwrap_or(SINGLE_ROW)
}

/// Whole part of `value`. Saturates on overflow; NaN becomes 0.
fn whole(value: f64) -> i64 {
    value.floor() as i64
}

/// Clamps a signed count into `[floor, u32::MAX]`.
fn at_least(count: i64, floor: u32) -> u32 {
    u32::try_from(count.max(i64::from(floor))).unwrap_or(u32::MAX)
}

/// Number of question rows that fit on one page. Never below 1.
pub fn rows_per_page(cell_size_mm: f64, mode: PrintMode) -> u32 {
    let height = row_height(mode).at(cell_size_mm);
    at_least(whole(AVAILABLE_HEIGHT_MM / height), 1)
}

/// Most practice cells that fit beside one example cell. Never below 3.
pub fn max_practice_columns(cell_size_mm: f64) -> u32 {
    let cells = whole(WRITING_SAFE_WIDTH_MM / cell_size_mm) - 1;
    at_least(cells, PRACTICE_COLUMNS_MIN)
}

/// Comfortable default: about 70% of the maximum, within `[3, 8]`.
pub fn recommended_practice_columns(cell_size_mm: f64) -> u32 {
    let max = max_practice_columns(cell_size_mm);
    let share = whole(f64::from(max) * RECOMMENDED_SHARE);
    at_least(share.min(i64::from(RECOMMENDED_COLUMNS_CAP)), PRACTICE_COLUMNS_MIN)
}

/// Character cells across one unbroken sentence row.
///
/// Only reaches its floor of 1 for cells wider than the writing width.
pub fn columns_per_row(cell_size_mm: f64) -> u32 {
    at_least(whole(WRITING_SAFE_WIDTH_MM / cell_size_mm), 1)
}

/// Clamps a requested practice cell count so the row cannot overflow,
/// keeping room for the example cell and spacing. Never exceeds `requested`.
pub fn safe_practice_count(cell_size_mm: f64, requested: u32) -> u32 {
    let max_cells = whole(WRITING_SAFE_WIDTH_MM / cell_size_mm) - 2;
    at_least(i64::from(requested).min(max_cells), 0)
}

/// Okurigana cells (drawn at 0.7 × cell) that fit after one full kanji cell
/// and the label chrome. Never below 1.
pub fn max_okurigana_cells(cell_size_mm: f64) -> u32 {
    let okurigana_cell = cell_size_mm * OKURIGANA_CELL_SCALE;
    let available = WRITING_SAFE_WIDTH_MM - cell_size_mm - OKURIGANA_CHROME_MM;
    at_least(whole(available / okurigana_cell), 1)
}

/// Practice cells for a writing row that also carries the question number
/// and a word label, measured against the full safe content width.
/// Result lies in `[3, max]`.
pub fn optimal_practice_count(cell_size_mm: f64, requested: u32) -> u32 {
    let word_label = cell_size_mm * WORD_LABEL_CELLS;
    let used = QUESTION_NUMBER_WIDTH_MM + ITEM_GAP_MM + word_label + ITEM_GAP_MM;
    let max_cells = whole((SAFE_CONTENT_WIDTH_MM - used) / cell_size_mm);
    at_least(i64::from(requested).min(max_cells), PRACTICE_COLUMNS_MIN)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
