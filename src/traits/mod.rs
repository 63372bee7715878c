//! # Traits
//!
//! | Trait | Role |
//! |-------|------|
//! | [`FileAccess`] | Cursor-tracking file handle the engine programs against |
//! | [`AssetRead`] | Path-based reads on a read-only root |
//! | [`AssetSource`] | The platform asset manager |
//! | [`NativeAsset`] | One open entry in the bundle |
//!
//! [`AssetFile`](crate::AssetFile) implements [`FileAccess`] on top of an
//! [`AssetSource`]; [`AssetFs`](crate::AssetFs) implements [`AssetRead`] on
//! top of [`AssetFile`](crate::AssetFile).
//!
//! ## Object Safety
//!
//! All traits are object-safe:
//!
//! ```rust
//! use apkfs::{AssetRead, FileAccess};
//!
//! fn probe(root: &dyn AssetRead, file: &mut dyn FileAccess) -> bool {
//!     root.exists("res://boot.cfg") && file.file_exists("res://boot.cfg")
//! }
//! ```

mod asset_read;
mod asset_source;
mod file_access;

pub use asset_read::AssetRead;
pub use asset_source::{AssetSource, NativeAsset};
pub use file_access::FileAccess;
