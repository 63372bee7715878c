//! The asset-manager context shared by every handle.

use std::fmt;
use std::sync::Arc;

use crate::path;
use crate::{AssetFsConfig, AssetMode, AssetSource, NativeAsset};

/// Shared handle to an asset manager plus the settings that go with it.
///
/// The platform bootstrap builds one context and hands clones to whatever
/// needs to open assets. Cloning is cheap. This crate never tears the
/// underlying source down; its lifetime belongs to the host.
///
/// ```rust
/// use apkfs::{AssetContext, MemoryAssets};
///
/// let assets = MemoryAssets::new();
/// assets.insert("config.txt", b"volume=3".to_vec());
///
/// let ctx = AssetContext::new(assets);
/// assert!(ctx.exists("res://config.txt"));
/// assert!(!ctx.exists("res://missing.txt"));
/// ```
#[derive(Clone)]
pub struct AssetContext {
    source: Arc<dyn AssetSource>,
    config: Arc<AssetFsConfig>,
}

impl AssetContext {
    /// Wrap `source` with the default configuration.
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self::with_config(source, AssetFsConfig::default())
    }

    /// Wrap `source` with an explicit configuration.
    pub fn with_config(source: impl AssetSource + 'static, config: AssetFsConfig) -> Self {
        Self::from_shared(Arc::new(source), config)
    }

    /// Build a context around a source that is already shared.
    pub fn from_shared(source: Arc<dyn AssetSource>, config: AssetFsConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    /// Settings for this context.
    pub fn config(&self) -> &AssetFsConfig {
        &self.config
    }

    /// Map an engine path to the key the asset manager understands.
    pub fn asset_key(&self, path: &str) -> String {
        path::normalize(path, &self.config.scheme)
    }

    /// Open a normalized key directly.
    pub(crate) fn open_key(&self, key: &str, mode: AssetMode) -> Option<Box<dyn NativeAsset>> {
        self.source.open(key, mode)
    }

    /// Returns `true` if `path` names an asset that can be opened.
    ///
    /// Opens a streaming probe and releases it immediately. Nothing is cached,
    /// every call asks the asset manager again.
    pub fn exists(&self, path: &str) -> bool {
        let key = self.asset_key(path);
        let found = self.open_key(&key, AssetMode::Streaming).is_some();
        log::trace!("probe {key}: {found}");
        found
    }
}

impl fmt::Debug for AssetContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
