//! Core types for the asset filesystem.

/// Scheme prefix the engine uses for resource paths.
pub const DEFAULT_SCHEME: &str = "res://";

/// Chunk size used when streaming an asset out to a regular file.
pub const DEFAULT_EXPORT_CHUNK_SIZE: usize = 64 * 1024;

/// How the native asset manager should open an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssetMode {
    /// Sequential chunked reads with seeking. Used by file handles and probes.
    Streaming,
    /// The whole asset is loaded up front for memory-style access. Used by
    /// one-shot exports.
    Buffer,
}

/// Flags for opening a file.
///
/// Assets are read-only: any flag that implies modification makes
/// [`FileAccess::open`](crate::FileAccess::open) fail with
/// [`AssetFsError::Unavailable`](crate::AssetFsError::Unavailable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenFlags {
    /// Open for reading.
    pub read: bool,
    /// Open for writing.
    pub write: bool,
    /// Create file if it doesn't exist.
    pub create: bool,
    /// Truncate file to zero length.
    pub truncate: bool,
    /// Append to end of file.
    pub append: bool,
}

impl OpenFlags {
    /// Read-only access.
    pub const READ: Self = Self {
        read: true,
        write: false,
        create: false,
        truncate: false,
        append: false,
    };

    /// Write access with create and truncate.
    pub const WRITE: Self = Self {
        read: false,
        write: true,
        create: true,
        truncate: true,
        append: false,
    };

    /// Read and write access.
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
        create: false,
        truncate: false,
        append: false,
    };

    /// Returns `true` if these flags would modify the file.
    #[inline]
    pub const fn wants_write(&self) -> bool {
        self.write || self.create || self.truncate || self.append
    }
}

/// Metadata for a packaged asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetMetadata {
    /// Normalized asset path, as handed to the asset manager.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

/// Settings shared by every handle created from one
/// [`AssetContext`](crate::AssetContext).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssetFsConfig {
    /// Scheme prefix stripped from paths before lookup.
    pub scheme: String,
    /// Chunk size for [`AssetFile::save_to_file`](crate::AssetFile::save_to_file).
    pub export_chunk_size: usize,
}

impl Default for AssetFsConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            export_chunk_size: DEFAULT_EXPORT_CHUNK_SIZE,
        }
    }
}
