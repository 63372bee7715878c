//! # apkfs
//!
//! Read-only virtual filesystem over the assets packaged in an Android
//! application bundle.
//!
//! The engine reads files through a generic handle, [`FileAccess`]. This
//! crate provides [`AssetFile`], a handle that forwards to the platform
//! asset manager while keeping its own cursor and EOF flag, so assets behave
//! exactly like files from any other filesystem root.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use apkfs::{AssetContext, AssetFile, FileAccess, MemoryAssets, OpenFlags};
//!
//! // On Android this would be `AndroidAssets` wrapping the activity's manager.
//! let assets = MemoryAssets::new();
//! assets.insert("data.bin", (0u8..10).collect::<Vec<_>>());
//! let ctx = AssetContext::new(assets);
//!
//! let mut file = AssetFile::new(ctx.clone());
//! file.open("res://data.bin", OpenFlags::READ)?;
//! assert_eq!(file.length(), 10);
//! assert_eq!(file.read_byte(), 0);
//! assert!(file.file_exists("res://data.bin"));
//! # Ok::<(), apkfs::AssetFsError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`AssetContext`] | Shared asset manager and settings, injected into every handle |
//! | [`AssetFile`] | Read-only [`FileAccess`] handle onto one asset |
//! | [`AssetStream`] | `std::io::Read` + `Seek` view of an [`AssetFile`] |
//! | [`AssetFs`] | Path-addressed read-only root ([`AssetRead`]) |
//! | [`export_to_file`] | Copy an asset out to a regular file |
//! | [`AssetFsError`] | Error type with context, mapped onto [`ErrorKind`] |
//!
//! ---
//!
//! ## Error Handling
//!
//! Environmental failures return [`AssetFsError`]:
//!
//! ```rust
//! use apkfs::{AssetContext, AssetFile, ErrorKind, FileAccess, MemoryAssets, OpenFlags};
//!
//! let mut file = AssetFile::new(AssetContext::new(MemoryAssets::new()));
//! let err = file.open("res://missing.png", OpenFlags::READ).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::CannotOpen);
//!
//! let err = file.open("res://missing.png", OpenFlags::WRITE).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unavailable);
//! ```
//!
//! Misuse (seeking or reading a closed handle, writing at all) panics: it is
//! a bug in the caller, not a condition to recover from.
//!
//! ---
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. Failed
//! exports are logged at `error`, opens at `debug`, probes at `trace`.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`AssetFsConfig`], [`AssetMetadata`], [`OpenFlags`]; `read_json` on asset roots |

// Private modules
mod context;
mod error;
mod export;
mod ext;
mod file;
mod fs;
mod traits;
mod types;

pub mod backends;
pub mod path;

// Public re-exports - error types
pub use error::{AssetFsError, ErrorKind};

// Public re-exports - core types
pub use types::{
    AssetFsConfig, AssetMetadata, AssetMode, OpenFlags, DEFAULT_EXPORT_CHUNK_SIZE, DEFAULT_SCHEME,
};

// Public re-exports - traits
pub use traits::{AssetRead, AssetSource, FileAccess, NativeAsset};

// Public re-exports - handles and roots
pub use context::AssetContext;
pub use export::export_to_file;
pub use file::{AssetFile, AssetStream};
pub use fs::AssetFs;

// Public re-exports - backends
#[cfg(target_os = "android")]
pub use backends::AndroidAssets;
pub use backends::{DirAssets, MemoryAssets};

// Public re-exports - infrastructure
pub use ext::AssetReadExt;

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::AssetReadJson;
