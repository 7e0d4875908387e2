use url::Url;

use crate::asset::{build_asset_path, content_kind};
use crate::navigation::{HistoryEntry, HistoryMode, NavigationSync};
use crate::pagination::{PageMove, PaginationState};
use crate::store::CategoryStore;
use crate::tags::{resolve_tags, tag_tier};
use crate::view_model::{
    CategoryNavEntry, GalleryViewModel, ItemCard, PaginationView, StatusMessage, TagView,
};
use crate::{Category, Manifest};

pub const LOADING_MESSAGE: &str = "Loading plots...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load gallery data. Re-run the gallery build step.";
pub const EMPTY_CATEGORY_MESSAGE: &str = "No plots to show in this category.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the manifest.
    #[default]
    Loading,
    Ready,
    /// Manifest load failed; terminal.
    Failed,
}

/// Session state of a loaded gallery: categories, selection, page and URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    base_url: String,
    source_label: String,
    store: CategoryStore,
    pagination: PaginationState,
    navigation: NavigationSync,
}

impl Gallery {
    /// `None` when the manifest has no categories.
    pub fn new(manifest: Manifest, location: Url) -> Option<Self> {
        let source_label = manifest.source_label();
        let store = CategoryStore::new(manifest.categories)?;
        Some(Self {
            base_url: manifest.base_url,
            source_label,
            store,
            pagination: PaginationState::default(),
            navigation: NavigationSync::new(location),
        })
    }

    pub fn store(&self) -> &CategoryStore {
        &self.store
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn navigation(&self) -> &NavigationSync {
        &self.navigation
    }

    pub fn current_category(&self) -> &Category {
        self.store.current()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Select `slug` (first category if unknown) and go back to page 0.
    pub fn select(&mut self, slug: &str) -> &Category {
        self.store.select(slug);
        self.pagination.reset();
        self.store.current()
    }

    /// Select the category named by the page URL, or the first one, and
    /// rewrite the current history entry to name it.
    pub(crate) fn select_initial(&mut self) -> HistoryEntry {
        let slug = self
            .navigation
            .requested_slug()
            .filter(|slug| self.store.contains(slug))
            .unwrap_or_else(|| self.store.first().slug.clone());
        self.select(&slug);
        self.navigation.record(&slug, HistoryMode::Replace)
    }

    pub(crate) fn record_selection(&mut self, mode: HistoryMode) -> HistoryEntry {
        let slug = self.store.current_slug().to_string();
        self.navigation.record(&slug, mode)
    }

    pub(crate) fn restore_location(
        &mut self,
        state: Option<&crate::HistoryState>,
        location: Url,
    ) -> Option<String> {
        self.navigation.restore(state, location)
    }

    pub(crate) fn next_page(&mut self) -> PageMove {
        self.pagination.next_page(Some(self.store.current()))
    }

    pub(crate) fn prev_page(&mut self) -> PageMove {
        self.pagination.prev_page(Some(self.store.current()))
    }

    fn cards(&self) -> Vec<ItemCard> {
        let category = self.store.current();
        self.pagination
            .visible_items(category)
            .iter()
            .map(|item| ItemCard {
                title: item.title.clone(),
                content: content_kind(item),
                src: build_asset_path([
                    self.base_url.as_str(),
                    category.path.as_str(),
                    item.file.as_str(),
                ]),
                tags: resolve_tags(item, category)
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| TagView {
                        label,
                        tier: tag_tier(index),
                    })
                    .collect(),
            })
            .collect()
    }

    fn pagination_view(&self) -> PaginationView {
        let category = Some(self.store.current());
        PaginationView {
            label: self.pagination.label(category, self.pagination.current_page()),
            prev_disabled: self.pagination.prev_disabled(category),
            next_disabled: self.pagination.next_disabled(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    phase: Phase,
    gallery: Option<Gallery>,
    failure: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    /// Detailed reason of a failed load, for logs.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn view(&self) -> GalleryViewModel {
        let mut view = GalleryViewModel {
            phase: self.phase,
            dirty: self.dirty,
            ..GalleryViewModel::default()
        };

        match self.phase {
            Phase::Loading => {
                view.message = Some(StatusMessage {
                    text: LOADING_MESSAGE.to_string(),
                    is_error: false,
                });
            }
            Phase::Failed => {
                view.message = Some(StatusMessage {
                    text: LOAD_FAILED_MESSAGE.to_string(),
                    is_error: true,
                });
            }
            Phase::Ready => {
                if let Some(gallery) = &self.gallery {
                    fill_ready_view(&mut view, gallery);
                }
            }
        }
        view
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        self.gallery.as_mut()
    }

    pub(crate) fn start(&mut self, gallery: Gallery) {
        self.gallery = Some(gallery);
        self.phase = Phase::Ready;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, reason: impl Into<String>) {
        self.gallery = None;
        self.failure = Some(reason.into());
        self.phase = Phase::Failed;
        self.mark_dirty();
    }
}

fn fill_ready_view(view: &mut GalleryViewModel, gallery: &Gallery) {
    let current = gallery.current_category();

    view.source_label = Some(gallery.source_label.clone()).filter(|label| !label.is_empty());
    view.categories = gallery
        .store
        .categories()
        .iter()
        .map(|category| CategoryNavEntry {
            slug: category.slug.clone(),
            name: category.name.clone(),
            item_count: category.items.len(),
            active: category.slug == current.slug,
            href: format!("?category={}", urlencoding::encode(&category.slug)),
        })
        .collect();
    view.category_meta = Some(current.summary());
    view.cards = gallery.cards();
    view.pagination = gallery.pagination_view();
    if current.items.is_empty() {
        view.message = Some(StatusMessage {
            text: EMPTY_CATEGORY_MESSAGE.to_string(),
            is_error: false,
        });
    }
}
