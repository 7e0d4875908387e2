use std::io;
use std::path::Path;

use futures_util::StreamExt;
use gallery_core::Manifest;
use gallery_logging::{gallery_debug, gallery_info};
use reqwest::header::CACHE_CONTROL;
use url::Url;

use crate::config::{FetchSettings, ManifestLocation};
use crate::decode::decode_manifest;
use crate::{FailureKind, LoadError};

#[async_trait::async_trait]
pub trait ManifestLoader: Send + Sync {
    /// Raw manifest bytes from `location`.
    async fn fetch_bytes(&self, location: &ManifestLocation) -> Result<Vec<u8>, LoadError>;

    /// Fetch and decode the manifest at `location`.
    async fn load(&self, location: &ManifestLocation) -> Result<Manifest, LoadError> {
        gallery_info!("loading gallery manifest from {location}");
        let bytes = self.fetch_bytes(location).await?;
        let manifest = decode_manifest(&bytes)?;
        gallery_info!(
            "loaded gallery manifest with {} categories ({} bytes)",
            manifest.categories.len(),
            bytes.len()
        );
        Ok(manifest)
    }
}

/// HTTP(S) manifests via reqwest, never served from cache.
#[derive(Debug, Clone)]
pub struct ReqwestLoader {
    settings: FetchSettings,
}

impl ReqwestLoader {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LoadError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LoadError::new(FailureKind::Network, err.to_string()))
    }

    async fn fetch_url(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        let client = self.build_client()?;
        let response = client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Failed to load gallery data ({})", status.as_u16()),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        gallery_debug!("fetched {} manifest bytes from {url}", bytes.len());
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ManifestLoader for ReqwestLoader {
    async fn fetch_bytes(&self, location: &ManifestLocation) -> Result<Vec<u8>, LoadError> {
        match location {
            ManifestLocation::Remote(url) => self.fetch_url(url).await,
            ManifestLocation::Local(path) => Err(LoadError::new(
                FailureKind::InvalidLocation,
                format!("{} is not an http location", path.display()),
            )),
        }
    }
}

/// Manifests on the local filesystem, for `file:` pages.
#[derive(Debug, Clone)]
pub struct FileLoader {
    max_bytes: u64,
}

impl FileLoader {
    pub fn new(settings: &FetchSettings) -> Self {
        Self {
            max_bytes: settings.max_bytes,
        }
    }

    async fn read_path(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|err| map_io_error(path, err))?;
        if meta.len() > self.max_bytes {
            return Err(too_large(self.max_bytes, meta.len()));
        }
        tokio::fs::read(path)
            .await
            .map_err(|err| map_io_error(path, err))
    }
}

#[async_trait::async_trait]
impl ManifestLoader for FileLoader {
    async fn fetch_bytes(&self, location: &ManifestLocation) -> Result<Vec<u8>, LoadError> {
        match location {
            ManifestLocation::Local(path) => self.read_path(path).await,
            ManifestLocation::Remote(url) => Err(LoadError::new(
                FailureKind::InvalidLocation,
                format!("{url} is not a local file"),
            )),
        }
    }
}

/// Dispatches on the location kind.
#[derive(Debug, Clone)]
pub struct DefaultLoader {
    http: ReqwestLoader,
    file: FileLoader,
}

impl DefaultLoader {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            file: FileLoader::new(&settings),
            http: ReqwestLoader::new(settings),
        }
    }
}

#[async_trait::async_trait]
impl ManifestLoader for DefaultLoader {
    async fn fetch_bytes(&self, location: &ManifestLocation) -> Result<Vec<u8>, LoadError> {
        match location {
            ManifestLocation::Remote(_) => self.http.fetch_bytes(location).await,
            ManifestLocation::Local(_) => self.file.fetch_bytes(location).await,
        }
    }
}

fn too_large(max_bytes: u64, actual: u64) -> LoadError {
    LoadError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "manifest too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> LoadError {
    if err.is_timeout() {
        return LoadError::new(FailureKind::Timeout, err.to_string());
    }
    LoadError::new(FailureKind::Network, err.to_string())
}

fn map_io_error(path: &Path, err: io::Error) -> LoadError {
    LoadError::new(FailureKind::Io, format!("{}: {err}", path.display()))
}
