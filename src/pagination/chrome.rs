//! Header and footer content for each page.

use crate::model::{Grade, PrintMode};
use serde::Serialize;

/// Attribution printed on stroke order worksheets.
pub const STROKE_ORDER_ATTRIBUTION: &str = "書き順データ: KanjiVG (CC BY-SA 3.0)";

/// Header band content.
///
/// The first page carries the full header with the mode instruction and a
/// name field; later pages repeat only title and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageHeader {
    #[serde(rename_all = "camelCase")]
    Full {
        title: String,
        instruction: String,
        date: String,
        name_label: String,
    },
    Compact { title: String, date: String },
}

impl PageHeader {
    pub fn for_page(page_index: usize, title: &str, mode: PrintMode, date: &str) -> Self {
        if page_index == 0 {
            PageHeader::Full {
                title: title.to_string(),
                instruction: mode.instruction().to_string(),
                date: date.to_string(),
                name_label: "なまえ".to_string(),
            }
        } else {
            PageHeader::Compact {
                title: title.to_string(),
                date: date.to_string(),
            }
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PageHeader::Full { title, .. } | PageHeader::Compact { title, .. } => title,
        }
    }
}

/// Footer band content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFooter {
    pub grade: Grade,
    pub current_page: usize,
    pub total_pages: usize,
    pub attribution: Option<String>,
}

impl PageFooter {
    pub fn for_page(page_index: usize, total_pages: usize, grade: Grade, mode: PrintMode) -> Self {
        Self {
            grade,
            current_page: page_index + 1,
            total_pages,
            attribution: (mode == PrintMode::StrokeOrder)
                .then(|| STROKE_ORDER_ATTRIBUTION.to_string()),
        }
    }

    /// `1年生 | 1/3`
    pub fn summary(&self) -> String {
        format!(
            "{}年生 | {}/{}",
            self.grade, self.current_page, self.total_pages
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_gets_full_header() {
        let header = PageHeader::for_page(0, "漢字練習プリント", PrintMode::Writing, "2026年10月19日");
        match header {
            PageHeader::Full {
                instruction,
                name_label,
                ..
            } => {
                assert_eq!(instruction, "漢字を書きましょう");
                assert_eq!(name_label, "なまえ");
            }
            other => panic!("expected full header, got {other:?}"),
        }
    }

    #[test]
    fn later_pages_get_compact_header() {
        let header = PageHeader::for_page(2, "テスト", PrintMode::Reading, "today");
        assert_eq!(
            header,
            PageHeader::Compact {
                title: "テスト".to_string(),
                date: "today".to_string()
            }
        );
        assert_eq!(header.title(), "テスト");
    }

    #[test]
    fn footer_summary_shows_grade_and_page() {
        let footer = PageFooter::for_page(0, 3, Grade::new(2).unwrap(), PrintMode::Writing);
        assert_eq!(footer.summary(), "2年生 | 1/3");
        assert_eq!(footer.attribution, None);
    }

    #[test]
    fn stroke_order_footer_carries_attribution() {
        let footer = PageFooter::for_page(1, 2, Grade::FIRST, PrintMode::StrokeOrder);
        assert_eq!(footer.attribution.as_deref(), Some(STROKE_ORDER_ATTRIBUTION));
    }
}
