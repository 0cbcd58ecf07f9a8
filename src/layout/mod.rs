//! A4 layout fitting engine.
//!
//! Translates a cell size and a print mode into how many question rows fit on
//! a page and how many practice cells fit in a row. Pure and stateless; see
//! [`engine`] for the individual operations and [`LayoutPlan`] for the bundle
//! handed to renderers.

pub mod engine;
pub mod geometry;
pub mod plan;

pub use engine::{
    columns_per_row, max_okurigana_cells, max_practice_columns, optimal_practice_count,
    recommended_practice_columns, row_height, rows_per_page, safe_practice_count, RowHeight,
};
pub use plan::LayoutPlan;
