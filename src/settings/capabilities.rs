//! Which knobs apply to which print mode.

use crate::model::PrintMode;
use serde::Serialize;

/// Settings a mode actually uses. A front-end hides the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeCapabilities {
    pub practice_columns: bool,
    pub grid_style: bool,
    pub hint: bool,
    /// Label for the cell size control: the writing cell or the printed kanji.
    pub size_label: &'static str,
}

const CELL_LABEL: &str = "マスサイズ";
const GLYPH_LABEL: &str = "漢字サイズ";

impl ModeCapabilities {
    const NONE: Self = Self {
        practice_columns: false,
        grid_style: false,
        hint: false,
        size_label: GLYPH_LABEL,
    };

    pub fn for_mode(mode: PrintMode) -> Self {
        match mode {
            PrintMode::Writing => Self {
                practice_columns: true,
                grid_style: true,
                hint: true,
                size_label: CELL_LABEL,
            },
            PrintMode::StrokeOrder => Self {
                practice_columns: true,
                grid_style: true,
                hint: false,
                size_label: CELL_LABEL,
            },
            PrintMode::Sentence => Self {
                grid_style: true,
                size_label: CELL_LABEL,
                ..Self::NONE
            },
            PrintMode::Okurigana => Self {
                grid_style: true,
                hint: true,
                size_label: CELL_LABEL,
                ..Self::NONE
            },
            PrintMode::Reading
            | PrintMode::StrokeCount
            | PrintMode::Homophone
            | PrintMode::Radical
            | PrintMode::Antonym => Self::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writing_uses_every_knob() {
        let caps = ModeCapabilities::for_mode(PrintMode::Writing);
        assert!(caps.practice_columns && caps.grid_style && caps.hint);
        assert_eq!(caps.size_label, "マスサイズ");
    }

    #[test]
    fn reading_uses_none() {
        assert_eq!(
            ModeCapabilities::for_mode(PrintMode::Reading),
            ModeCapabilities::NONE
        );
    }

    #[test]
    fn practice_columns_only_for_cell_rows() {
        let with_columns: Vec<PrintMode> = PrintMode::ALL
            .iter()
            .copied()
            .filter(|m| ModeCapabilities::for_mode(*m).practice_columns)
            .collect();
        assert_eq!(with_columns, vec![PrintMode::Writing, PrintMode::StrokeOrder]);
    }

    #[test]
    fn sentence_has_grid_but_no_hint() {
        let caps = ModeCapabilities::for_mode(PrintMode::Sentence);
        assert!(caps.grid_style);
        assert!(!caps.hint);
        assert!(!caps.practice_columns);
    }
}
