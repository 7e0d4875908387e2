//! Gallery manifest data model, as produced by the gallery build step.
//!
//! The manifest is read-only once loaded. Every optional field defaults when
//! absent so that partially filled manifests still load.

use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_url: String,
    #[serde(default)]
    pub source_dir: Option<String>,
    #[serde(default)]
    pub source_label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Manifest {
    /// Short human-readable origin of the plots.
    ///
    /// An explicit `sourceLabel` wins. An absolute `sourceDir` is shortened to
    /// its last two components; any other `sourceDir` is returned verbatim.
    pub fn source_label(&self) -> String {
        if let Some(label) = self.source_label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        let Some(dir) = self.source_dir.as_deref().filter(|d| !d.is_empty()) else {
            return String::new();
        };

        let normalized = dir.replace('\\', "/");
        let normalized = normalized.trim_end_matches('/');
        if is_absolute_path(normalized) {
            let parts: Vec<&str> = normalized.split('/').filter(|p| !p.is_empty()).collect();
            if parts.len() >= 2 {
                return parts[parts.len() - 2..].join("/");
            }
        }
        dir.to_string()
    }
}

/// `null` is treated like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_absolute_path(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub tags: Option<TagSource>,
    /// Legacy singular form of `tags`.
    #[serde(default)]
    pub tag: Option<TagSource>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Category {
    /// Meta line shown under the category navigation, e.g. `"12 plots • plots/run1"`.
    pub fn summary(&self) -> String {
        format!("{} plots • {}", self.items.len(), self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default)]
    pub tags: Option<TagSource>,
    /// Legacy singular form of `tags`.
    #[serde(default)]
    pub tag: Option<TagSource>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Item {
    pub fn is_html(&self) -> bool {
        self.kind == "html"
    }
}

/// Optional descriptive fields shared by items and categories.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub tags: Option<TagSource>,
    #[serde(default)]
    pub tag: Option<TagSource>,
    #[serde(default)]
    pub dataset: Option<Scalar>,
    #[serde(default)]
    pub embedding_model: Option<Scalar>,
    #[serde(default)]
    pub cebra: Option<Scalar>,
    #[serde(default)]
    pub notes: Option<Scalar>,
}

/// Either an explicit list of labels or one string holding `/`, `•` or `|`
/// separated labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagSource {
    List(Vec<Option<Scalar>>),
    Single(Scalar),
}

impl From<&str> for TagSource {
    fn from(value: &str) -> Self {
        TagSource::Single(Scalar::from(value))
    }
}

impl From<Vec<&str>> for TagSource {
    fn from(values: Vec<&str>) -> Self {
        TagSource::List(values.into_iter().map(|v| Some(Scalar::from(v))).collect())
    }
}

/// A free-form manifest value. Scalars are kept typed; anything else
/// (objects, nested arrays) is carried as raw JSON and only ever displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Other(serde_json::Value),
}

impl Scalar {
    /// `false` for values that count as "not provided": empty text, zero,
    /// `false` or `null`. Objects and arrays always count as provided.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Text(text) => !text.is_empty(),
            Scalar::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Scalar::Flag(flag) => *flag,
            Scalar::Other(value) => !value.is_null(),
        }
    }
}

/// Integral values print without a fractional part, so `1.0` reads `1`.
fn format_number(number: &serde_json::Number) -> String {
    if let Some(n) = number.as_i64() {
        return n.to_string();
    }
    if let Some(n) = number.as_u64() {
        return n.to_string();
    }
    match number.as_f64() {
        Some(n) if n == 0.0 => "0".to_string(),
        Some(n) => n.to_string(),
        None => number.to_string(),
    }
}

/// Text form of an arbitrary JSON value: arrays join their elements with
/// `,` (null elements print empty) and objects print `[object Object]`.
fn format_value(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => format_number(number),
        Value::String(text) => text.clone(),
        Value::Array(values) => values
            .iter()
            .map(|v| if v.is_null() { String::new() } else { format_value(v) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(number) => f.write_str(&format_number(number)),
            Scalar::Flag(flag) => write!(f, "{flag}"),
            Scalar::Other(value) => f.write_str(&format_value(value)),
        }
    }
}
