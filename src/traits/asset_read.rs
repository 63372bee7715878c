//! Path-based read operations for a read-only asset root.

use std::io::Read;

use crate::{AssetFsError, AssetMetadata};

/// Read operations for a virtual filesystem root backed by packaged assets.
///
/// Paths use the engine spelling (`res://ui/icon.png`, `/ui/icon.png`,
/// `ui/icon.png` all name the same asset).
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn AssetRead`.
pub trait AssetRead: Send + Sync {
    /// Read entire asset contents as bytes.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    /// - [`AssetFsError::EndOfFile`] if fewer bytes than the reported length
    ///   could be read
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetFsError>;

    /// Read asset contents as UTF-8 string.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    /// - [`AssetFsError::InvalidParameter`] if the asset is not valid UTF-8
    fn read_to_string(&self, path: &str) -> Result<String, AssetFsError>;

    /// Read at most `len` bytes starting at `offset`.
    ///
    /// Reading past the end returns the bytes that exist, possibly none.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    fn read_range(&self, path: &str, offset: u64, len: usize) -> Result<Vec<u8>, AssetFsError>;

    /// Check if an asset exists. Never caches.
    fn exists(&self, path: &str) -> bool;

    /// Get metadata for an asset.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    fn metadata(&self, path: &str) -> Result<AssetMetadata, AssetFsError>;

    /// Open an asset for streaming reads.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    fn open_read(&self, path: &str) -> Result<Box<dyn Read + Send>, AssetFsError>;
}
