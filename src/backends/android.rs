//! The platform asset manager.

use std::ffi::{CString, c_int};
use std::io::{self, Read, Seek, SeekFrom};
use std::ptr::NonNull;

use ndk::asset::{Asset, AssetManager};
use ndk_sys as ffi;

use crate::{AssetMode, AssetSource, NativeAsset};

/// Assets packaged in the running application's APK.
///
/// The platform bootstrap obtains the `AAssetManager` (from the activity or
/// through JNI) and wraps it once; the manager must outlive this value.
#[derive(Debug)]
pub struct AndroidAssets {
    manager: AssetManager,
}

impl AndroidAssets {
    /// Wrap an asset manager obtained from the activity.
    pub fn new(manager: AssetManager) -> Self {
        Self { manager }
    }

    /// Wrap a raw `AAssetManager` pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be a valid asset manager that stays alive for as long as
    /// the returned value and any handle opened from it.
    pub unsafe fn from_ptr(ptr: NonNull<ffi::AAssetManager>) -> Self {
        Self {
            manager: unsafe { AssetManager::from_ptr(ptr) },
        }
    }
}

impl AssetSource for AndroidAssets {
    fn open(&self, path: &str, mode: AssetMode) -> Option<Box<dyn NativeAsset>> {
        let filename = CString::new(path).ok()?;
        let native_mode = match mode {
            AssetMode::Streaming => ffi::AASSET_MODE_STREAMING,
            AssetMode::Buffer => ffi::AASSET_MODE_BUFFER,
        };
        // `AssetManager::open` takes no mode argument.
        // SAFETY: the manager pointer is valid for the life of `self` and
        // `filename` is NUL-terminated.
        let raw = unsafe {
            ffi::AAssetManager_open(
                self.manager.ptr().as_ptr(),
                filename.as_ptr(),
                native_mode as c_int,
            )
        };
        let ptr = NonNull::new(raw)?;
        // SAFETY: `ptr` is a freshly opened asset owned by nobody else; `Asset`
        // closes it on drop.
        let inner = unsafe { Asset::from_ptr(ptr) };
        Some(Box::new(AndroidAsset { inner }))
    }
}

struct AndroidAsset {
    inner: Asset,
}

// SAFETY: an AAsset is only touched through `&mut self` and is not tied to
// the thread that opened it.
unsafe impl Send for AndroidAsset {}

impl NativeAsset for AndroidAsset {
    fn length(&self) -> u64 {
        self.inner.length() as u64
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
