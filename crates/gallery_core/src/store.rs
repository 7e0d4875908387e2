use gallery_logging::{gallery_debug, gallery_warn};

use crate::manifest::Category;

/// The loaded categories in manifest order plus the active selection.
///
/// Never empty: construction fails without at least one category, so slug
/// lookups can always fall back to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStore {
    categories: Vec<Category>,
    current: usize,
}

impl CategoryStore {
    /// `None` when `categories` is empty.
    pub fn new(categories: Vec<Category>) -> Option<Self> {
        if categories.is_empty() {
            return None;
        }
        for (index, category) in categories.iter().enumerate() {
            if categories[..index].iter().any(|c| c.slug == category.slug) {
                gallery_warn!(
                    "duplicate category slug {:?}; lookups resolve to the first one",
                    category.slug
                );
            }
        }
        Some(Self {
            categories,
            current: 0,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn current(&self) -> &Category {
        &self.categories[self.current]
    }

    pub fn current_slug(&self) -> &str {
        &self.current().slug
    }

    pub fn first(&self) -> &Category {
        &self.categories[0]
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.position(slug).is_some()
    }

    /// Category with exactly this slug, or the first category.
    pub fn find_by_slug(&self, slug: &str) -> &Category {
        &self.categories[self.position(slug).unwrap_or(0)]
    }

    /// Make `slug` (or, if unknown, the first category) the active one.
    pub fn select(&mut self, slug: &str) -> &Category {
        self.current = match self.position(slug) {
            Some(index) => index,
            None => {
                gallery_debug!("unknown category slug {slug:?}; using the first category");
                0
            }
        };
        self.current()
    }

    fn position(&self, slug: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.slug == slug)
    }
}
