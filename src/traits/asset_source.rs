//! The native asset API seam.
//!
//! [`AssetSource`] stands in for the platform asset manager and
//! [`NativeAsset`] for one open entry in the bundle. On Android these map to
//! `AAssetManager` and `AAsset`; on the host they are backed by memory or a
//! directory (see [`crate::backends`]).

use std::io::{self, SeekFrom};

use crate::AssetMode;

/// One open asset inside the bundle.
///
/// Dropping the value releases the native resource. Implementations must
/// release it exactly once.
pub trait NativeAsset: Send {
    /// Total byte length of the asset, fixed when it was opened.
    fn length(&self) -> u64;

    /// Read up to `buf.len()` bytes in a single native call.
    ///
    /// Returns `Ok(0)` at the end of the asset.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Move the native read cursor.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;
}

/// The root context that opens assets by path.
///
/// # Thread Safety
///
/// Sources are shared between handles through
/// [`AssetContext`](crate::AssetContext), so they must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and is normally used as `dyn AssetSource`.
pub trait AssetSource: Send + Sync {
    /// Open the asset at `path` (already normalized, no scheme, no leading `/`).
    ///
    /// Returns `None` when the asset does not exist or cannot be opened,
    /// matching the native API which only reports a null handle.
    fn open(&self, path: &str, mode: AssetMode) -> Option<Box<dyn NativeAsset>>;
}
