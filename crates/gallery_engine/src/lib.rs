//! Gallery engine: manifest location resolution and loading.
mod config;
mod decode;
mod engine;
mod fetch;
mod types;

pub use config::{
    resolve_manifest_location, resolve_manifest_path, EngineConfig, FetchSettings,
    ManifestLocation, ManifestPathSources, DATA_PARAM, DEFAULT_MANIFEST_PATH, MANIFEST_DIR,
    MANIFEST_ENV_VAR,
};
pub use decode::decode_manifest;
pub use engine::EngineHandle;
pub use fetch::{DefaultLoader, FileLoader, ManifestLoader, ReqwestLoader};
pub use types::{EngineEvent, FailureKind, LoadError};
