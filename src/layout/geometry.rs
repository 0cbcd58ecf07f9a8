//! A4 print geometry.
//!
//! All lengths are millimetres. These values are shared with the renderers
//! and must not change at runtime.

/// A4 sheet width.
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 sheet height.
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Margin on every side of the sheet.
pub const MARGIN_MM: f64 = 15.0;

/// Printable width after both side margins (180mm).
pub const SAFE_CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
/// Printable height after top and bottom margins (267mm).
pub const SAFE_CONTENT_HEIGHT_MM: f64 = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;

/// Band reserved for the page header.
pub const HEADER_HEIGHT_MM: f64 = 25.0;
/// Band reserved for the page footer.
pub const FOOTER_HEIGHT_MM: f64 = 10.0;

/// Height left for question rows (232mm).
pub const AVAILABLE_HEIGHT_MM: f64 = SAFE_CONTENT_HEIGHT_MM - HEADER_HEIGHT_MM - FOOTER_HEIGHT_MM;

/// Width budget for example + practice cell rows. Narrower than the safe
/// content width to absorb rendering slack around the example cell.
pub const WRITING_SAFE_WIDTH_MM: f64 = 175.0;

pub const CELL_SIZE_MIN_MM: f64 = 12.0;
pub const CELL_SIZE_MAX_MM: f64 = 25.0;
pub const CELL_SIZE_DEFAULT_MM: f64 = 15.0;

/// Fewest practice cells a writing row may show.
pub const PRACTICE_COLUMNS_MIN: u32 = 3;

pub const PAGE_COUNT_MIN: u32 = 1;
pub const PAGE_COUNT_MAX: u32 = 20;
