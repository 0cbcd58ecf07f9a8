//! Splitting a flat question list into printable pages.
//!
//! Pages are ephemeral: they are rebuilt from the question list and the
//! row count on every render pass.

pub mod chrome;

pub use chrome::{PageFooter, PageHeader, STROKE_ORDER_ATTRIBUTION};

use serde::Serialize;

/// One printed page of items in original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// 0-based page index.
    pub index: usize,
    /// 1-based number of the first item on this page.
    pub first_number: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Items paired with their continuous 1-based question numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (self.first_number + i, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 1-based question number, continuous across pages.
pub fn question_number(page_index: usize, index_within_page: usize, rows_per_page: usize) -> usize {
    page_index * rows_per_page + index_within_page + 1
}

/// Splits `items` into `ceil(N / rows_per_page)` pages.
///
/// Every page but the last holds exactly `rows_per_page` items. A row count of
/// 0 cannot come out of the layout engine and is treated as 1.
pub fn chunk<T: Clone>(items: &[T], rows_per_page: usize) -> Vec<Vec<T>> {
    items
        .chunks(rows_per_page.max(1))
        .map(<[T]>::to_vec)
        .collect()
}

/// Like [`chunk`], but takes ownership and records page index and numbering.
pub fn paginate<T>(items: Vec<T>, rows_per_page: usize) -> Vec<Page<T>> {
    let rows = rows_per_page.max(1);
    let mut pages = Vec::with_capacity(items.len().div_ceil(rows));
    let mut remaining = items.into_iter().peekable();

    while remaining.peek().is_some() {
        let index = pages.len();
        let page_items: Vec<T> = remaining.by_ref().take(rows).collect();
        pages.push(Page {
            index,
            first_number: question_number(index, 0, rows),
            items: page_items,
        });
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_25_by_11_gives_11_11_3() {
        let items: Vec<u32> = (0..25).collect();
        let sizes: Vec<usize> = chunk(&items, 11).iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![11, 11, 3]);
    }

    #[test]
    fn chunk_exact_multiple_has_no_partial_page() {
        let items: Vec<u32> = (0..22).collect();
        let sizes: Vec<usize> = chunk(&items, 11).iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![11, 11]);
    }

    #[test]
    fn chunk_empty_list_has_no_pages() {
        let items: Vec<u32> = vec![];
        assert!(chunk(&items, 5).is_empty());
    }

    #[test]
    fn chunk_concatenation_reproduces_input() {
        let items: Vec<u32> = (0..17).collect();
        let flat: Vec<u32> = chunk(&items, 4).concat();
        assert_eq!(flat, items);
    }

    #[test]
    fn chunk_treats_zero_rows_as_one() {
        let items = vec!['a', 'b'];
        assert_eq!(chunk(&items, 0), vec![vec!['a'], vec!['b']]);
    }

    #[test]
    fn question_numbers_continue_across_pages() {
        assert_eq!(question_number(0, 0, 11), 1);
        assert_eq!(question_number(0, 10, 11), 11);
        assert_eq!(question_number(1, 0, 11), 12);
        assert_eq!(question_number(2, 2, 11), 25);
    }

    #[test]
    fn paginate_numbers_items() {
        let pages = paginate((0..25).collect::<Vec<u32>>(), 11);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].index, 1);
        assert_eq!(pages[1].first_number, 12);
        assert_eq!(pages[2].len(), 3);

        let numbers: Vec<usize> = pages
            .iter()
            .flat_map(|p| p.numbered().map(|(n, _)| n))
            .collect();
        assert_eq!(numbers, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn paginate_matches_chunk() {
        let items: Vec<u32> = (0..30).collect();
        let pages = paginate(items.clone(), 7);
        let chunks = chunk(&items, 7);
        assert_eq!(pages.len(), chunks.len());
        for (page, chunk) in pages.iter().zip(&chunks) {
            assert_eq!(&page.items, chunk);
        }
    }
}
