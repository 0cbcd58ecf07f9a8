//! Tests for layout fitting operations.

use super::*;
use crate::layout::geometry::{CELL_SIZE_DEFAULT_MM, CELL_SIZE_MAX_MM, CELL_SIZE_MIN_MM};

const CELL_SIZES: [f64; 3] = [CELL_SIZE_MIN_MM, CELL_SIZE_DEFAULT_MM, CELL_SIZE_MAX_MM];

// ===== rows_per_page =====

#[test]
fn writing_rows_at_default_cell_size() {
    // 232 / (15 + 6) = 11.04
    assert_eq!(rows_per_page(15.0, PrintMode::Writing), 11);
}

#[test]
fn single_row_modes_share_the_writing_count() {
    for mode in [
        PrintMode::Reading,
        PrintMode::StrokeCount,
        PrintMode::StrokeOrder,
        PrintMode::Radical,
        PrintMode::Okurigana,
        PrintMode::Antonym,
    ] {
        assert_eq!(rows_per_page(15.0, mode), 11, "mode {mode}");
    }
}

#[test]
fn sentence_rows_at_default_cell_size() {
    // 232 / 37.5 = 6.18
    assert_eq!(rows_per_page(15.0, PrintMode::Sentence), 6);
}

#[test]
fn sentence_row_height_is_pure_scale() {
    let height = row_height(PrintMode::Sentence);
    assert_eq!(height.scale, 2.5);
    assert_eq!(height.offset_mm, 0.0);
    // 232 / 30 = 7.7, and 7 × 30 = 210 still fits
    assert_eq!(rows_per_page(12.0, PrintMode::Sentence), 7);
    assert_eq!(rows_per_page(25.0, PrintMode::Sentence), 3);
}

#[test]
fn homophone_rows_track_cell_size() {
    assert_eq!(rows_per_page(15.0, PrintMode::Homophone), 5);
    assert_eq!(rows_per_page(12.0, PrintMode::Homophone), 6);
    assert_eq!(rows_per_page(20.0, PrintMode::Homophone), 4);
}

#[test]
fn rows_never_drop_below_one() {
    for mode in PrintMode::ALL {
        assert_eq!(rows_per_page(250.0, mode), 1, "mode {mode}");
        assert_eq!(rows_per_page(1_000.0, mode), 1, "mode {mode}");
    }
}

#[test]
fn smaller_cells_give_more_rows() {
    assert!(rows_per_page(12.0, PrintMode::Writing) > rows_per_page(25.0, PrintMode::Writing));
}

#[test]
fn every_mode_has_a_row_height_entry() {
    for mode in PrintMode::ALL {
        assert!(
            ROW_HEIGHTS.iter().any(|(m, _)| *m == mode),
            "missing row height for {mode}"
        );
    }
}

#[test]
fn rows_fit_the_available_height() {
    for mode in PrintMode::ALL {
        for cell in CELL_SIZES {
            let rows = rows_per_page(cell, mode);
            let used = f64::from(rows) * row_height(mode).at(cell);
            assert!(
                used <= AVAILABLE_HEIGHT_MM,
                "{mode} at {cell}mm uses {used}mm"
            );
        }
    }
}

#[test]
fn sentence_rows_are_taller_than_reading_rows() {
    for cell in CELL_SIZES {
        assert!(
            rows_per_page(cell, PrintMode::Sentence) <= rows_per_page(cell, PrintMode::Reading)
        );
    }
}

// ===== practice columns =====

#[test]
fn max_practice_columns_scenarios() {
    assert_eq!(max_practice_columns(15.0), 10);
    assert_eq!(max_practice_columns(25.0), 6);
    assert_eq!(max_practice_columns(12.0), 13);
}

#[test]
fn max_practice_columns_floor_is_three() {
    assert_eq!(max_practice_columns(100.0), 3);
}

#[test]
fn recommended_columns_are_seventy_percent_capped_at_eight() {
    assert_eq!(recommended_practice_columns(15.0), 7);
    assert_eq!(recommended_practice_columns(12.0), 8);
    assert_eq!(recommended_practice_columns(25.0), 4);
    assert_eq!(recommended_practice_columns(100.0), 3);
}

#[test]
fn example_plus_practice_cells_fit_writing_width() {
    for cell in CELL_SIZES {
        let total = cell + f64::from(max_practice_columns(cell)) * cell;
        assert!(total <= WRITING_SAFE_WIDTH_MM + cell, "{cell}mm: {total}");
    }
}

// ===== columns_per_row =====

#[test]
fn columns_per_row_scenarios() {
    assert_eq!(columns_per_row(15.0), 11);
    assert_eq!(columns_per_row(25.0), 7);
}

#[test]
fn sentence_row_fits_writing_width() {
    for cell in CELL_SIZES {
        assert!(f64::from(columns_per_row(cell)) * cell <= WRITING_SAFE_WIDTH_MM);
    }
}

#[test]
fn columns_per_row_floor_is_one() {
    assert_eq!(columns_per_row(175.0), 1);
    assert_eq!(columns_per_row(400.0), 1);
}

// ===== safe_practice_count =====

#[test]
fn safe_practice_count_keeps_small_requests() {
    assert_eq!(safe_practice_count(15.0, 5), 5);
}

#[test]
fn safe_practice_count_caps_large_requests() {
    assert_eq!(safe_practice_count(15.0, 20), 9);
    assert_eq!(safe_practice_count(25.0, 10), 5);
}

#[test]
fn safe_practice_count_saturates_at_zero() {
    assert_eq!(safe_practice_count(100.0, 4), 0);
}

// ===== max_okurigana_cells =====

#[test]
fn okurigana_cells_at_default_cell_size() {
    // 145 / 10.5 = 13.8
    let cells = max_okurigana_cells(15.0);
    assert!((13..=15).contains(&cells), "got {cells}");
    assert_eq!(cells, 13);
}

#[test]
fn okurigana_cells_shrink_with_cell_size() {
    assert!(max_okurigana_cells(12.0) > max_okurigana_cells(25.0));
}

#[test]
fn okurigana_cells_floor_is_one() {
    assert_eq!(max_okurigana_cells(100.0), 1);
    assert_eq!(max_okurigana_cells(500.0), 1);
}

#[test]
fn okurigana_row_fits_writing_width() {
    for cell in CELL_SIZES {
        let cells = f64::from(max_okurigana_cells(cell));
        let total = cell + OKURIGANA_CHROME_MM + cells * cell * OKURIGANA_CELL_SCALE;
        assert!(total <= WRITING_SAFE_WIDTH_MM, "{cell}mm: {total}");
    }
}

// ===== optimal_practice_count =====

#[test]
fn optimal_practice_count_accounts_for_word_label() {
    // (180 - 6 - 3 - 37.5 - 3) / 15 = 8.7
    assert_eq!(optimal_practice_count(15.0, 20), 8);
    assert_eq!(optimal_practice_count(15.0, 5), 5);
}

#[test]
fn optimal_practice_count_floor_is_three() {
    assert_eq!(optimal_practice_count(15.0, 1), 3);
    assert_eq!(optimal_practice_count(60.0, 10), 3);
}

#[test]
fn optimal_row_fits_safe_content_width() {
    for cell in CELL_SIZES {
        let cells = f64::from(optimal_practice_count(cell, u32::MAX));
        let total = QUESTION_NUMBER_WIDTH_MM
            + ITEM_GAP_MM
            + WORD_LABEL_CELLS * cell
            + ITEM_GAP_MM
            + cells * cell;
        assert!(total <= SAFE_CONTENT_WIDTH_MM, "{cell}mm: {total}");
    }
}

// ===== RowHeight =====

#[test]
fn row_height_formula() {
    assert_eq!(row_height(PrintMode::Writing).at(15.0), 21.0);
    assert_eq!(row_height(PrintMode::Sentence).at(15.0), 37.5);
}
