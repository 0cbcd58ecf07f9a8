//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors where a
//! value has a restricted domain.

pub mod error;
pub mod grade;
pub mod kanji;
pub mod mode;
pub mod question;

// Re-export for convenience
pub use error::AppError;
pub use grade::{Grade, InvalidGrade};
pub use kanji::{kun_stem, Example, Kanji, OkuriganaExample, Radical, RadicalPosition, Readings};
pub use mode::{GridStyle, ParseTagError, PrintMode};
pub use question::{HomophoneOption, Question, QuestionDetail, Relation, RelationFilter};
