//! Gallery core: manifest model, tag derivation and the pure category /
//! pagination / history state machine.
mod asset;
mod effect;
mod manifest;
mod msg;
mod navigation;
mod pagination;
mod segments;
mod state;
mod store;
mod tags;
mod update;
mod view_model;

pub use asset::{build_asset_path, content_kind, encode_path_segment};
pub use effect::Effect;
pub use manifest::{Category, Item, Manifest, Meta, Scalar, TagSource};
pub use msg::Msg;
pub use navigation::{
    location_with_category, query_param, slug_from_location, HistoryEntry, HistoryMode, HistoryState,
    NavigationSync, CATEGORY_PARAM,
};
pub use pagination::{PageMove, PaginationState, PAGE_SIZE};
pub use segments::{clean_segments, coerce_to_segments, split_path_segments};
pub use state::{
    AppState, Gallery, Phase, EMPTY_CATEGORY_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_MESSAGE,
};
pub use store::CategoryStore;
pub use tags::{resolve_tags, tag_tier, ProbeFn, TagProbe, TagResolver, DEFAULT_PROBES, MAX_TAGS};
pub use update::update;
pub use view_model::{
    CategoryNavEntry, ContentKind, GalleryViewModel, ItemCard, PaginationView, StatusMessage,
    TagView,
};
