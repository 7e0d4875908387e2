//! Display tags for gallery items.
//!
//! Tags come from an ordered chain of probes. Each probe looks at one family of
//! optional manifest fields; the first probe producing at least one label
//! wins and its output is capped at [`MAX_TAGS`].

use crate::manifest::{Category, Item, Meta, Scalar, TagSource};
use crate::segments::{clean_segments, coerce_to_segments, split_path_segments};

pub const MAX_TAGS: usize = 3;

pub type ProbeFn = fn(&Item, &Category) -> Vec<String>;

/// One named step of the tag fallback chain.
#[derive(Clone, Copy)]
pub struct TagProbe {
    pub name: &'static str,
    run: ProbeFn,
}

impl TagProbe {
    pub const fn new(name: &'static str, run: ProbeFn) -> Self {
        Self { name, run }
    }

    /// Run the probe; `None` when it found nothing to show.
    pub fn probe(&self, item: &Item, category: &Category) -> Option<Vec<String>> {
        let mut segments = (self.run)(item, category);
        if segments.is_empty() {
            return None;
        }
        segments.truncate(MAX_TAGS);
        Some(segments)
    }
}

impl std::fmt::Debug for TagProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TagProbe").field(&self.name).finish()
    }
}

pub const DEFAULT_PROBES: [TagProbe; 5] = [
    TagProbe::new("explicit-tags", explicit_tags),
    TagProbe::new("legacy-tag", legacy_tag),
    TagProbe::new("meta", meta_segments),
    TagProbe::new("path", path_segments),
    TagProbe::new("type", type_fallback),
];

#[derive(Debug, Clone)]
pub struct TagResolver {
    probes: Vec<TagProbe>,
}

impl Default for TagResolver {
    fn default() -> Self {
        Self::with_probes(DEFAULT_PROBES.to_vec())
    }
}

impl TagResolver {
    pub fn with_probes(probes: Vec<TagProbe>) -> Self {
        Self { probes }
    }

    pub fn probes(&self) -> &[TagProbe] {
        &self.probes
    }

    /// Zero to three labels for `item`, from the first probe that yields any.
    pub fn resolve(&self, item: &Item, category: &Category) -> Vec<String> {
        first_match(&self.probes, item, category)
    }
}

/// Resolve tags with the default probe chain.
pub fn resolve_tags(item: &Item, category: &Category) -> Vec<String> {
    first_match(&DEFAULT_PROBES, item, category)
}

fn first_match(probes: &[TagProbe], item: &Item, category: &Category) -> Vec<String> {
    probes
        .iter()
        .find_map(|probe| probe.probe(item, category))
        .unwrap_or_default()
}

/// Styling tier of the tag at `index`: 1 for the first, capped at 3.
pub fn tag_tier(index: usize) -> u8 {
    // MAX_TAGS fits in u8
    (index + 1).min(MAX_TAGS) as u8
}

fn explicit_tags(item: &Item, category: &Category) -> Vec<String> {
    first_non_empty([
        item.tags.as_ref(),
        item.meta.as_ref().and_then(|m| m.tags.as_ref()),
        category.tags.as_ref(),
        category.meta.as_ref().and_then(|m| m.tags.as_ref()),
    ])
}

fn legacy_tag(item: &Item, category: &Category) -> Vec<String> {
    first_non_empty([
        item.tag.as_ref(),
        item.meta.as_ref().and_then(|m| m.tag.as_ref()),
        category.tag.as_ref(),
        category.meta.as_ref().and_then(|m| m.tag.as_ref()),
    ])
}

fn first_non_empty(sources: [Option<&TagSource>; 4]) -> Vec<String> {
    sources
        .into_iter()
        .map(coerce_to_segments)
        .find(|segments| !segments.is_empty())
        .unwrap_or_default()
}

fn meta_segments(item: &Item, category: &Category) -> Vec<String> {
    let dataset = meta_value(item, category, |m| m.dataset.as_ref());
    let embedding = meta_value(item, category, |m| m.embedding_model.as_ref());
    let detail = meta_value(item, category, |m| m.cebra.as_ref())
        .or_else(|| meta_value(item, category, |m| m.notes.as_ref()));

    clean_segments([dataset, embedding, detail])
}

/// Item-level value of a meta field, falling back to the category's.
fn meta_value<'a>(
    item: &'a Item,
    category: &'a Category,
    field: fn(&Meta) -> Option<&Scalar>,
) -> Option<&'a Scalar> {
    [item.meta.as_ref(), category.meta.as_ref()]
        .into_iter()
        .flatten()
        .filter_map(field)
        .find(|value| value.is_present())
}

fn path_segments(item: &Item, category: &Category) -> Vec<String> {
    let mut item_segments = split_path_segments(&item.file);
    if item_segments.last().is_some_and(|last| looks_like_filename(last)) {
        item_segments.pop();
    }

    let mut combined = split_path_segments(&category.path);
    combined.extend(item_segments);
    let start = combined.len().saturating_sub(MAX_TAGS);
    clean_segments(combined.drain(start..).map(Some))
}

fn looks_like_filename(segment: &str) -> bool {
    segment.rsplit_once('.').is_some_and(|(_, ext)| {
        !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

fn type_fallback(item: &Item, _category: &Category) -> Vec<String> {
    if item.is_html() {
        return vec!["HTML".to_string()];
    }
    let extension = match item.filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => item.kind.as_str(),
    };
    let extension = extension.trim();
    if extension.is_empty() {
        Vec::new()
    } else {
        vec![extension.to_uppercase()]
    }
}
