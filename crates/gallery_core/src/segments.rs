//! Splitting free-form path and label strings into display segments.

use std::fmt;

use gallery_logging::gallery_trace;

use crate::manifest::TagSource;

const TAG_SEPARATORS: &[char] = &['/', '•', '|'];

/// Split a path-like string on `/`, `\` and `:` into trimmed, percent-decoded,
/// non-empty segments. Order is preserved and duplicates are kept.
pub fn split_path_segments(value: &str) -> Vec<String> {
    value
        .replace('\\', "/")
        .split('/')
        .flat_map(|segment| segment.split(':'))
        .map(|part| decode_component(part.trim()))
        .filter(|part| !part.is_empty())
        .collect()
}

/// Stringify and trim every present entry, dropping the empty ones.
pub fn clean_segments<I, T>(list: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<T>>,
    T: fmt::Display,
{
    list.into_iter()
        .flatten()
        .map(|segment| segment.to_string().trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Normalize a tag source into clean segments.
///
/// Lists are cleaned as-is. A single value is split on `/`, `•` or `|` and
/// each piece loses its leading whitespace and hyphens (`"- a / - b"` yields
/// `["a", "b"]`).
pub fn coerce_to_segments(value: Option<&TagSource>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(TagSource::List(list)) => clean_segments(list.iter().map(Option::as_ref)),
        Some(TagSource::Single(scalar)) => {
            let text = scalar.to_string();
            clean_segments(text.split(TAG_SEPARATORS).map(|piece| {
                Some(piece.trim_start_matches(|c: char| c.is_whitespace() || c == '-'))
            }))
        }
    }
}

/// Percent-decode one URI component; malformed input is returned unchanged.
fn decode_component(raw: &str) -> String {
    if !has_well_formed_escapes(raw) {
        gallery_trace!("keeping malformed escape sequence verbatim: {raw:?}");
        return raw.to_string();
    }
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            gallery_trace!("segment {raw:?} does not decode to utf-8: {err}");
            raw.to_string()
        }
    }
}

fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
            _ => return false,
        }
    }
    true
}
