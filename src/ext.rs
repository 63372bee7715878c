//! # Extension Traits
//!
//! Convenience methods for any [`AssetRead`] root.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`is_file`](AssetReadExt::is_file) | Check if path names an asset |
//! | [`file_size`](AssetReadExt::file_size) | Size of an asset in bytes |
//! | [`read_or_default`](AssetReadExt::read_or_default) | Read, treating a missing asset as empty |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, `AssetReadJson::read_json` reads and
//! deserializes a JSON asset.

use crate::{AssetFsError, AssetRead};

/// Extension methods for any asset root.
///
/// All methods have default implementations, so every [`AssetRead`]
/// implementor gets them automatically.
///
/// # Example
///
/// ```rust
/// use apkfs::{AssetContext, AssetFs, AssetReadExt, MemoryAssets};
///
/// let assets = MemoryAssets::new();
/// assets.insert("fonts/mono.ttf", vec![0; 128]);
/// let fs = AssetFs::new(AssetContext::new(assets));
///
/// assert!(fs.is_file("res://fonts/mono.ttf"));
/// assert_eq!(fs.file_size("res://fonts/mono.ttf")?, 128);
/// # Ok::<(), apkfs::AssetFsError>(())
/// ```
pub trait AssetReadExt: AssetRead {
    /// Returns `true` if `path` names an asset.
    ///
    /// The bundle has no directories to speak of, so this is the same
    /// probe as [`exists`](AssetRead::exists).
    fn is_file(&self, path: &str) -> bool {
        self.exists(path)
    }

    /// Size of the asset in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AssetFsError::CannotOpen`] if the asset doesn't exist.
    fn file_size(&self, path: &str) -> Result<u64, AssetFsError> {
        Ok(self.metadata(path)?.size)
    }

    /// Read an asset, returning an empty buffer if it does not exist.
    ///
    /// Other failures are still reported.
    fn read_or_default(&self, path: &str) -> Result<Vec<u8>, AssetFsError> {
        match self.read(path) {
            Ok(data) => Ok(data),
            Err(AssetFsError::CannotOpen { .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

impl<R: AssetRead + ?Sized> AssetReadExt for R {}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::de::DeserializeOwned;

    /// JSON deserialization for asset roots.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait AssetReadJson: AssetRead {
        /// Read an asset and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - `AssetFsError::CannotOpen` — asset doesn't exist
        /// - `AssetFsError::InvalidParameter` — asset isn't valid UTF-8
        /// - `AssetFsError::Deserialization` — JSON parsing failed
        fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AssetFsError> {
            let data = self.read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| AssetFsError::Deserialization(e.to_string()))
        }
    }

    impl<R: AssetRead + ?Sized> AssetReadJson for R {}
}

#[cfg(feature = "serde")]
pub use json::AssetReadJson;
