//! Worksheet settings as an immutable value object.
//!
//! Callers build a [`Settings`] value, adjust it through the `with_*`
//! methods (which keep practice columns inside what the cell size allows),
//! and call [`Settings::validate`] at the boundary before handing it to the
//! layout engine or the generator.

pub mod capabilities;
pub mod store;

pub use capabilities::ModeCapabilities;

use crate::layout::geometry::{
    CELL_SIZE_DEFAULT_MM, CELL_SIZE_MAX_MM, CELL_SIZE_MIN_MM, PAGE_COUNT_MAX, PAGE_COUNT_MIN,
    PRACTICE_COLUMNS_MIN,
};
use crate::layout::{max_practice_columns, recommended_practice_columns, rows_per_page};
use crate::model::{Grade, GridStyle, PrintMode, RelationFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default worksheet title.
pub const DEFAULT_TITLE: &str = "漢字練習プリント";

/// Settings rejected at the validation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("cell size must be between 12mm and 25mm, got {0}mm")]
    CellSizeOutOfRange(f64),

    #[error("page count must be between 1 and 20, got {0}")]
    PageCountOutOfRange(u32),

    #[error("practice columns must be between 3 and {max} for {cell_size_mm}mm cells, got {requested}")]
    PracticeColumnsOutOfRange {
        requested: u32,
        max: u32,
        cell_size_mm: f64,
    },

    #[error("title must not be empty")]
    EmptyTitle,
}

/// Everything that shapes one worksheet.
///
/// Serialized in camelCase; this is the `settings` object of the persisted
/// store document. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub grade: Grade,
    pub mode: PrintMode,
    pub page_count: u32,
    /// Shuffle questions instead of following table order.
    pub random: bool,
    pub grid_style: GridStyle,
    #[serde(rename = "cellSize")]
    pub cell_size_mm: f64,
    pub practice_columns: u32,
    pub show_hint: bool,
    pub title: String,
    /// Characters never drawn into questions.
    pub excluded_kanji: Vec<String>,
    pub antonym_filter: RelationFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grade: Grade::FIRST,
            mode: PrintMode::Writing,
            page_count: 1,
            random: true,
            grid_style: GridStyle::Cross,
            cell_size_mm: CELL_SIZE_DEFAULT_MM,
            practice_columns: recommended_practice_columns(CELL_SIZE_DEFAULT_MM),
            show_hint: false,
            title: DEFAULT_TITLE.to_string(),
            excluded_kanji: Vec::new(),
            antonym_filter: RelationFilter::Mixed,
        }
    }
}

impl Settings {
    /// Checks every bound the UI would enforce.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let cell = self.cell_size_mm;
        if !cell.is_finite() || !(CELL_SIZE_MIN_MM..=CELL_SIZE_MAX_MM).contains(&cell) {
            return Err(SettingsError::CellSizeOutOfRange(cell));
        }

        if !(PAGE_COUNT_MIN..=PAGE_COUNT_MAX).contains(&self.page_count) {
            return Err(SettingsError::PageCountOutOfRange(self.page_count));
        }

        let max = max_practice_columns(cell);
        if !(PRACTICE_COLUMNS_MIN..=max).contains(&self.practice_columns) {
            return Err(SettingsError::PracticeColumnsOutOfRange {
                requested: self.practice_columns,
                max,
                cell_size_mm: cell,
            });
        }

        if self.title.trim().is_empty() {
            return Err(SettingsError::EmptyTitle);
        }

        Ok(())
    }

    /// Changes the cell size, pulling practice columns down to the new
    /// maximum if they no longer fit.
    pub fn with_cell_size(mut self, cell_size_mm: f64) -> Self {
        self.cell_size_mm = cell_size_mm;
        self.practice_columns = self
            .practice_columns
            .min(max_practice_columns(cell_size_mm));
        self
    }

    /// Sets practice columns, clamped to `[3, max]` for the current cell size.
    pub fn with_practice_columns(mut self, practice_columns: u32) -> Self {
        let max = max_practice_columns(self.cell_size_mm);
        self.practice_columns = practice_columns.clamp(PRACTICE_COLUMNS_MIN, max);
        self
    }

    pub fn with_mode(mut self, mode: PrintMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    /// Question rows per page for the current cell size and mode.
    pub fn rows_per_page(&self) -> u32 {
        rows_per_page(self.cell_size_mm, self.mode)
    }

    /// Questions needed to fill every page.
    pub fn total_questions(&self) -> usize {
        self.rows_per_page() as usize * self.page_count as usize
    }

    /// Which settings matter for the current mode.
    pub fn capabilities(&self) -> ModeCapabilities {
        ModeCapabilities::for_mode(self.mode)
    }
}

/// Splits user input such as `一,二 三` into single characters.
pub fn parse_excluded(input: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for c in input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '、')
    {
        let s = c.to_string();
        if !seen.contains(&s) {
            seen.push(s);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.practice_columns, 7);
        assert_eq!(settings.cell_size_mm, 15.0);
        assert_eq!(settings.title, "漢字練習プリント");
    }

    #[test]
    fn validate_rejects_cell_size_outside_domain() {
        for cell in [11.9, 25.1, 0.0, -3.0, f64::NAN, f64::INFINITY] {
            let settings = Settings {
                cell_size_mm: cell,
                ..Settings::default()
            };
            assert!(
                matches!(settings.validate(), Err(SettingsError::CellSizeOutOfRange(_))),
                "cell size {cell} should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_page_count_outside_domain() {
        for pages in [0, 21] {
            let settings = Settings {
                page_count: pages,
                ..Settings::default()
            };
            assert_eq!(
                settings.validate(),
                Err(SettingsError::PageCountOutOfRange(pages))
            );
        }
    }

    #[test]
    fn validate_rejects_too_many_practice_columns() {
        let settings = Settings {
            practice_columns: 11,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::PracticeColumnsOutOfRange {
                requested: 11,
                max: 10,
                cell_size_mm: 15.0
            })
        );
    }

    #[test]
    fn validate_rejects_blank_title() {
        let settings = Settings {
            title: "  ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyTitle));
    }

    #[test]
    fn growing_cells_clamps_practice_columns() {
        let settings = Settings::default().with_practice_columns(10).with_cell_size(25.0);
        assert_eq!(settings.practice_columns, 6);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn shrinking_cells_keeps_practice_columns() {
        let settings = Settings::default().with_cell_size(12.0);
        assert_eq!(settings.practice_columns, 7);
    }

    #[test]
    fn practice_columns_clamp_to_bounds() {
        assert_eq!(Settings::default().with_practice_columns(50).practice_columns, 10);
        assert_eq!(Settings::default().with_practice_columns(1).practice_columns, 3);
    }

    #[test]
    fn total_questions_follows_mode_and_pages() {
        let settings = Settings {
            page_count: 2,
            ..Settings::default()
        }
        .with_mode(PrintMode::Sentence);
        assert_eq!(settings.rows_per_page(), 6);
        assert_eq!(settings.total_questions(), 12);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"mode":"homophone","cellSize":20}"#).unwrap();
        assert_eq!(settings.mode, PrintMode::Homophone);
        assert_eq!(settings.cell_size_mm, 20.0);
        assert_eq!(settings.grade, Grade::FIRST);
        assert_eq!(settings.page_count, 1);
    }

    #[test]
    fn settings_serialize_in_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["pageCount"], 1);
        assert_eq!(json["cellSize"], 15.0);
        assert_eq!(json["gridStyle"], "cross");
        assert_eq!(json["practiceColumns"], 7);
    }

    #[test]
    fn parse_excluded_splits_and_dedups() {
        assert_eq!(parse_excluded("一,二 三、一"), vec!["一", "二", "三"]);
        assert!(parse_excluded("  ").is_empty());
    }
}
