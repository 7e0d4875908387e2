//! Where the manifest lives and how it is fetched.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::{FailureKind, LoadError};

pub const DEFAULT_MANIFEST_PATH: &str = "assets/data/gallery-data.json";
/// Directory that short `data` query values are resolved in.
pub const MANIFEST_DIR: &str = "assets/data";
pub const DATA_PARAM: &str = "data";
/// Environment variable overriding the manifest path.
pub const MANIFEST_ENV_VAR: &str = "GALLERY_DATA_PATH";

/// Candidate manifest paths, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct ManifestPathSources {
    /// Explicitly configured by the page embedding the gallery.
    pub explicit: Option<String>,
    /// Process-wide override, see [`MANIFEST_ENV_VAR`].
    pub global_override: Option<String>,
    /// Page URL; its `data` query parameter names a manifest.
    pub page_url: Option<Url>,
}

/// Pick the manifest path from the first source that provides one.
///
/// A `data` value ending in `.json` is used as-is; any other value names a
/// manifest in [`MANIFEST_DIR`].
pub fn resolve_manifest_path(sources: &ManifestPathSources) -> String {
    if let Some(path) = non_empty(sources.explicit.as_deref()) {
        return path.to_string();
    }
    if let Some(path) = non_empty(sources.global_override.as_deref()) {
        return path.to_string();
    }
    if let Some(data) = sources
        .page_url
        .as_ref()
        .and_then(|url| gallery_core::query_param(url, DATA_PARAM))
    {
        return if data.ends_with(".json") {
            data
        } else {
            format!("{MANIFEST_DIR}/{data}.json")
        };
    }
    DEFAULT_MANIFEST_PATH.to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    Remote(Url),
    Local(PathBuf),
}

impl fmt::Display for ManifestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestLocation::Remote(url) => write!(f, "{url}"),
            ManifestLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve `manifest_path` relative to the page, like a browser fetch would.
pub fn resolve_manifest_location(
    page_url: &Url,
    manifest_path: &str,
) -> Result<ManifestLocation, LoadError> {
    let joined = page_url
        .join(manifest_path)
        .map_err(|err| LoadError::new(FailureKind::InvalidLocation, err.to_string()))?;
    match joined.scheme() {
        "http" | "https" => Ok(ManifestLocation::Remote(joined)),
        "file" => joined.to_file_path().map(ManifestLocation::Local).map_err(|()| {
            LoadError::new(
                FailureKind::InvalidLocation,
                format!("{joined} is not a local file path"),
            )
        }),
        other => Err(LoadError::new(
            FailureKind::InvalidLocation,
            format!("unsupported scheme {other}"),
        )),
    }
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn explicit_path_beats_everything() {
        let sources = ManifestPathSources {
            explicit: Some("custom.json".into()),
            global_override: Some("global.json".into()),
            page_url: Some(url("https://x.test/?data=run")),
        };
        assert_eq!(resolve_manifest_path(&sources), "custom.json");
    }

    #[test]
    fn global_override_beats_query() {
        let sources = ManifestPathSources {
            explicit: Some(String::new()),
            global_override: Some("global.json".into()),
            page_url: Some(url("https://x.test/?data=run")),
        };
        assert_eq!(resolve_manifest_path(&sources), "global.json");
    }

    #[test]
    fn data_param_names_manifest() {
        let mut sources = ManifestPathSources {
            page_url: Some(url("https://x.test/?data=run7")),
            ..ManifestPathSources::default()
        };
        assert_eq!(resolve_manifest_path(&sources), "assets/data/run7.json");

        sources.page_url = Some(url("https://x.test/?data=other/run.json"));
        assert_eq!(resolve_manifest_path(&sources), "other/run.json");
    }

    #[test]
    fn falls_back_to_default() {
        let sources = ManifestPathSources {
            page_url: Some(url("https://x.test/?data=")),
            ..ManifestPathSources::default()
        };
        assert_eq!(resolve_manifest_path(&sources), DEFAULT_MANIFEST_PATH);
        assert_eq!(
            resolve_manifest_path(&ManifestPathSources::default()),
            DEFAULT_MANIFEST_PATH
        );
    }

    #[test]
    fn locations_follow_page_scheme() {
        assert_eq!(
            resolve_manifest_location(&url("https://x.test/site/index.html"), DEFAULT_MANIFEST_PATH)
                .unwrap(),
            ManifestLocation::Remote(url("https://x.test/site/assets/data/gallery-data.json"))
        );
        assert_eq!(
            resolve_manifest_location(&url("https://x.test/site/"), "https://cdn.test/m.json")
                .unwrap(),
            ManifestLocation::Remote(url("https://cdn.test/m.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_pages_resolve_to_local_paths() {
        assert_eq!(
            resolve_manifest_location(&url("file:///srv/gallery/index.html"), "assets/data/a.json")
                .unwrap(),
            ManifestLocation::Local(PathBuf::from("/srv/gallery/assets/data/a.json"))
        );
    }

    #[test]
    fn other_schemes_are_rejected() {
        let err = resolve_manifest_location(&url("ftp://x.test/"), "m.json").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidLocation);
    }
}
