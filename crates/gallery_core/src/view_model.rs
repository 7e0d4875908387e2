use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryViewModel {
    pub phase: Phase,
    pub message: Option<StatusMessage>,
    /// `"Source: ..."` line; hidden when `None`.
    pub source_label: Option<String>,
    pub categories: Vec<CategoryNavEntry>,
    pub category_meta: Option<String>,
    pub cards: Vec<ItemCard>,
    pub pagination: PaginationView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNavEntry {
    pub slug: String,
    pub name: String,
    pub item_count: usize,
    pub active: bool,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub title: String,
    pub content: ContentKind,
    pub src: String,
    pub tags: Vec<TagView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Iframe,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub label: String,
    /// 1..=3, for styling.
    pub tier: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Default for PaginationView {
    fn default() -> Self {
        Self {
            label: "0 / 0".to_string(),
            prev_disabled: true,
            next_disabled: true,
        }
    }
}
