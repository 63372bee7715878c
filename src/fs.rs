//! Read-only filesystem root over an [`AssetContext`].

use std::io::Read;

use crate::{
    AssetContext, AssetFile, AssetFsError, AssetMetadata, AssetRead, AssetStream, FileAccess,
};

/// Mounts a bundle as a path-addressed, read-only filesystem root.
///
/// Every call opens its own [`AssetFile`], so an `AssetFs` can be shared
/// freely; nothing is cached between calls.
///
/// ```rust
/// use apkfs::{AssetContext, AssetFs, AssetRead, MemoryAssets};
///
/// let assets = MemoryAssets::new();
/// assets.insert("text/hello.txt", b"hello".to_vec());
/// let fs = AssetFs::new(AssetContext::new(assets));
///
/// assert_eq!(fs.read_to_string("res://text/hello.txt")?, "hello");
/// assert_eq!(fs.read_range("/text/hello.txt", 1, 3)?, b"ell");
/// # Ok::<(), apkfs::AssetFsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AssetFs {
    ctx: AssetContext,
}

impl AssetFs {
    /// Mount the bundle behind `ctx`.
    pub fn new(ctx: AssetContext) -> Self {
        Self { ctx }
    }

    /// The mounted context.
    pub fn context(&self) -> &AssetContext {
        &self.ctx
    }

    /// Open a file handle on `path`.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    pub fn open(&self, path: &str) -> Result<AssetFile, AssetFsError> {
        AssetFile::open_read(self.ctx.clone(), path)
    }
}

impl AssetRead for AssetFs {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetFsError> {
        let mut file = self.open(path)?;
        let len = AssetFsError::buffer_len("read", file.asset_path(), file.length())?;
        let mut data = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let n = file.read_buffer(&mut data[filled..], len - filled)?;
            if n == 0 {
                return Err(AssetFsError::EndOfFile {
                    path: file.asset_path().to_string(),
                    expected: file.length(),
                    read: filled as u64,
                });
            }
            filled += n;
        }
        Ok(data)
    }

    fn read_to_string(&self, path: &str) -> Result<String, AssetFsError> {
        let data = self.read(path)?;
        String::from_utf8(data).map_err(|e| AssetFsError::InvalidParameter {
            operation: "read_to_string",
            details: format!("{path} is not valid UTF-8: {e}"),
        })
    }

    fn read_range(&self, path: &str, offset: u64, len: usize) -> Result<Vec<u8>, AssetFsError> {
        let mut file = self.open(path)?;
        file.seek(offset);
        let available = usize::try_from(file.length() - file.position()).unwrap_or(usize::MAX);
        let mut data = vec![0u8; len.min(available)];
        let mut filled = 0;
        while filled < data.len() {
            let want = data.len() - filled;
            let n = file.read_buffer(&mut data[filled..], want)?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        data.truncate(filled);
        Ok(data)
    }

    fn exists(&self, path: &str) -> bool {
        self.ctx.exists(path)
    }

    fn metadata(&self, path: &str) -> Result<AssetMetadata, AssetFsError> {
        let file = self.open(path)?;
        Ok(AssetMetadata {
            path: file.asset_path().to_string(),
            size: file.length(),
        })
    }

    fn open_read(&self, path: &str) -> Result<Box<dyn Read + Send>, AssetFsError> {
        Ok(Box::new(AssetStream::from(self.open(path)?)))
    }
}
