//! # Asset Sources
//!
//! Concrete [`AssetSource`](crate::AssetSource) implementations.
//!
//! | Source | Where the bytes live |
//! |--------|----------------------|
//! | [`MemoryAssets`] | A map held in memory |
//! | [`DirAssets`] | An unpacked directory on the host |
//! | `AndroidAssets` | The APK, through `AAssetManager` (Android only) |

#[cfg(target_os = "android")]
mod android;
mod dir;
mod memory;

#[cfg(target_os = "android")]
pub use android::AndroidAssets;
pub use dir::DirAssets;
pub use memory::MemoryAssets;
