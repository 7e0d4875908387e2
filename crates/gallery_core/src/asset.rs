//! Source paths for gallery assets.

use crate::manifest::Item;
use crate::view_model::ContentKind;

/// Percent-encode each `/`-separated part of `segment` as a URI component.
pub fn encode_path_segment(segment: &str) -> String {
    segment
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join the non-empty `parts` with `/`, encoding each one.
pub fn build_asset_path<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

pub fn content_kind(item: &Item) -> ContentKind {
    if item.is_html() {
        ContentKind::Iframe
    } else {
        ContentKind::Image
    }
}
