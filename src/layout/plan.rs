//! Everything a renderer needs to lay out one worksheet, computed once.

use super::engine::{
    columns_per_row, max_okurigana_cells, max_practice_columns, optimal_practice_count,
    recommended_practice_columns, row_height, rows_per_page, safe_practice_count,
};
use super::geometry::AVAILABLE_HEIGHT_MM;
use crate::model::PrintMode;
use crate::settings::Settings;
use serde::Serialize;

/// Layout numbers for one (cell size, mode, requested columns) triple.
///
/// Recomputed whenever settings change; cheap enough that nothing caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub cell_size_mm: f64,
    pub mode: PrintMode,
    pub row_height_mm: f64,
    pub rows_per_page: u32,
    /// `rows_per_page × row_height_mm`.
    pub used_height_mm: f64,
    pub available_height_mm: f64,
    pub max_practice_columns: u32,
    pub recommended_practice_columns: u32,
    /// Requested columns clamped against overflow.
    pub safe_practice_count: u32,
    /// Practice cells a writing row actually draws next to its word label.
    pub optimal_practice_count: u32,
    pub columns_per_row: u32,
    pub max_okurigana_cells: u32,
}

impl LayoutPlan {
    pub fn compute(cell_size_mm: f64, mode: PrintMode, requested_columns: u32) -> Self {
        let rows = rows_per_page(cell_size_mm, mode);
        let height = row_height(mode).at(cell_size_mm);
        let safe = safe_practice_count(cell_size_mm, requested_columns);

        let plan = Self {
            cell_size_mm,
            mode,
            row_height_mm: height,
            rows_per_page: rows,
            used_height_mm: f64::from(rows) * height,
            available_height_mm: AVAILABLE_HEIGHT_MM,
            max_practice_columns: max_practice_columns(cell_size_mm),
            recommended_practice_columns: recommended_practice_columns(cell_size_mm),
            safe_practice_count: safe,
            optimal_practice_count: optimal_practice_count(cell_size_mm, safe),
            columns_per_row: columns_per_row(cell_size_mm),
            max_okurigana_cells: max_okurigana_cells(cell_size_mm),
        };

        tracing::debug!(
            cell_size_mm,
            mode = %mode,
            rows_per_page = plan.rows_per_page,
            practice_cells = plan.practice_cells(),
            "Computed layout plan"
        );

        plan
    }

    pub fn for_settings(settings: &Settings) -> Self {
        Self::compute(settings.cell_size_mm, settings.mode, settings.practice_columns)
    }

    /// Blank cells drawn per question row in this mode.
    ///
    /// Writing rows use the word-label aware count, stroke order rows the
    /// overflow-safe count, sentence rows span the full row, okurigana rows
    /// use small answer cells. Modes with a single answer box report 0.
    pub fn practice_cells(&self) -> u32 {
        match self.mode {
            PrintMode::Writing => self.optimal_practice_count,
            PrintMode::StrokeOrder => self.safe_practice_count,
            PrintMode::Sentence => self.columns_per_row,
            PrintMode::Okurigana => self.max_okurigana_cells,
            PrintMode::Reading
            | PrintMode::StrokeCount
            | PrintMode::Homophone
            | PrintMode::Radical
            | PrintMode::Antonym => 0,
        }
    }

    /// Questions needed to fill `page_count` pages.
    pub fn total_questions(&self, page_count: u32) -> usize {
        self.rows_per_page as usize * page_count as usize
    }
}
