//! Directory-backed asset bundle for desktop builds.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Component, Path, PathBuf};

use crate::{AssetMode, AssetSource, NativeAsset};

/// Serves assets from a directory on the host filesystem.
///
/// Lets the same engine code run on desktop against an unpacked `assets/`
/// directory. Keys that would escape the root are refused.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    /// Serve assets found under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory assets are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetSource for DirAssets {
    fn open(&self, path: &str, mode: AssetMode) -> Option<Box<dyn NativeAsset>> {
        let full = self.resolve(path)?;
        let file = File::open(&full).ok()?;
        let meta = file.metadata().ok()?;
        if !meta.is_file() {
            return None;
        }
        log::trace!("open {} ({mode:?})", full.display());
        Some(Box::new(DirAsset {
            file,
            len: meta.len(),
        }))
    }
}

struct DirAsset {
    file: File,
    len: u64,
}

impl NativeAsset for DirAsset {
    fn length(&self) -> u64 {
        self.len
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}
