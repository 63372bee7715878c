//! In-memory asset bundle.

use std::collections::HashMap;
use std::io::{self, SeekFrom};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::{AssetMode, AssetSource, NativeAsset};

/// An asset bundle held in memory.
///
/// Useful for tests and for hosts that unpack a bundle themselves. Keeps
/// count of live handles so callers can check nothing leaks.
///
/// ```rust
/// use apkfs::MemoryAssets;
///
/// let assets = MemoryAssets::new();
/// assets.insert("levels/1.map", vec![1, 2, 3]);
/// assert_eq!(assets.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAssets {
    assets: RwLock<HashMap<String, Arc<[u8]>>>,
    live: Arc<AtomicUsize>,
    opened: AtomicUsize,
}

impl MemoryAssets {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the asset stored under `path`.
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Arc<[u8]>>) {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), data.into());
    }

    /// Number of assets in the bundle.
    pub fn len(&self) -> usize {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if the bundle holds no assets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles opened from this bundle that have not been dropped yet.
    pub fn open_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Total successful opens since creation.
    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, path: &str, _mode: AssetMode) -> Option<Box<dyn NativeAsset>> {
        let data = self
            .assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()?;
        self.live.fetch_add(1, Ordering::SeqCst);
        self.opened.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(MemoryAsset {
            data,
            pos: 0,
            live: Arc::clone(&self.live),
        }))
    }
}

struct MemoryAsset {
    data: Arc<[u8]>,
    pos: u64,
    live: Arc<AtomicUsize>,
}

impl NativeAsset for MemoryAsset {
    fn length(&self) -> u64 {
        self.data.len() as u64
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = self.data.len();
        let start = usize::try_from(self.pos).unwrap_or(usize::MAX).min(len);
        let n = buf.len().min(len - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos += n as u64;
        Ok(n)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(offset) => self.length().checked_add_signed(offset),
            SeekFrom::Current(offset) => self.pos.checked_add_signed(offset),
        };
        match target {
            Some(target) => {
                self.pos = target;
                Ok(target)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek before start of asset",
            )),
        }
    }
}

impl Drop for MemoryAsset {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
