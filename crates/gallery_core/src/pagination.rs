use std::ops::Range;

use crate::manifest::{Category, Item};

/// Items shown per gallery page.
pub const PAGE_SIZE: usize = 12;

/// Outcome of a page button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Moved,
    /// Already at the boundary; nothing changed.
    Disabled,
}

/// Zero-based page cursor over the active category's items.
///
/// Invariant: `current_page < max(total_pages, 1)` after every operation, as
/// long as the page is reset whenever the category changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    pub fn total_pages(&self, category: Option<&Category>) -> usize {
        category.map_or(0, |c| c.items.len().div_ceil(self.page_size))
    }

    /// Index range of the items on `page`; empty when the page is out of range.
    pub fn visible_range(&self, category: Option<&Category>, page: usize) -> Range<usize> {
        let len = category.map_or(0, |c| c.items.len());
        let start = page.saturating_mul(self.page_size);
        if start >= len {
            return 0..0;
        }
        start..(start + self.page_size).min(len)
    }

    /// Items on the current page.
    pub fn visible_items<'a>(&self, category: &'a Category) -> &'a [Item] {
        &category.items[self.visible_range(Some(category), self.current_page)]
    }

    pub fn next_page(&mut self, category: Option<&Category>) -> PageMove {
        if self.next_disabled(category) {
            return PageMove::Disabled;
        }
        self.current_page += 1;
        PageMove::Moved
    }

    pub fn prev_page(&mut self, category: Option<&Category>) -> PageMove {
        if self.prev_disabled(category) {
            return PageMove::Disabled;
        }
        self.current_page -= 1;
        PageMove::Moved
    }

    pub fn prev_disabled(&self, category: Option<&Category>) -> bool {
        is_empty(category) || self.current_page == 0
    }

    pub fn next_disabled(&self, category: Option<&Category>) -> bool {
        is_empty(category) || self.current_page + 1 >= self.total_pages(category)
    }

    /// `"<first>-<last> / <total>"` with a 1-based first index, or `"0 / 0"`.
    pub fn label(&self, category: Option<&Category>, page: usize) -> String {
        let Some(category) = category.filter(|c| !c.items.is_empty()) else {
            return "0 / 0".to_string();
        };
        let total = category.items.len();
        let start = page.saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(total);
        format!("{}-{} / {}", start + 1, end, total)
    }
}

fn is_empty(category: Option<&Category>) -> bool {
    category.map_or(true, |c| c.items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_with(count: usize) -> Category {
        Category {
            slug: "c".to_string(),
            items: (0..count)
                .map(|i| Item {
                    title: format!("plot {i}"),
                    ..Item::default()
                })
                .collect(),
            ..Category::default()
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let pages = PaginationState::default();
        assert_eq!(pages.total_pages(None), 0);
        assert_eq!(pages.total_pages(Some(&category_with(0))), 0);
        assert_eq!(pages.total_pages(Some(&category_with(12))), 1);
        assert_eq!(pages.total_pages(Some(&category_with(13))), 2);
    }

    #[test]
    fn visible_range_clamps_last_page() {
        let pages = PaginationState::default();
        let category = category_with(25);
        assert_eq!(pages.visible_range(Some(&category), 0), 0..12);
        assert_eq!(pages.visible_range(Some(&category), 2), 24..25);
        assert_eq!(pages.visible_range(Some(&category), 3), 0..0);
        assert_eq!(pages.visible_range(None, 0), 0..0);
    }

    #[test]
    fn prev_is_disabled_on_first_page() {
        let mut pages = PaginationState::default();
        let category = category_with(25);
        assert_eq!(pages.prev_page(Some(&category)), PageMove::Disabled);
        assert_eq!(pages.current_page(), 0);
    }

    #[test]
    fn empty_category_disables_both_controls() {
        let mut pages = PaginationState::default();
        let category = category_with(0);
        assert!(pages.prev_disabled(Some(&category)));
        assert!(pages.next_disabled(Some(&category)));
        assert_eq!(pages.next_page(Some(&category)), PageMove::Disabled);
        assert_eq!(pages.label(Some(&category), 0), "0 / 0");
        assert_eq!(pages.label(None, 0), "0 / 0");
        assert!(pages.visible_items(&category).is_empty());
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let pages = PaginationState::new(0);
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.total_pages(Some(&category_with(3))), 3);
    }
}
