//! # Asset File Handle
//!
//! [`AssetFile`] implements [`FileAccess`] on top of a [`NativeAsset`].
//!
//! The native handle's own notion of position and end-of-file does not
//! match the generic contract (streaming reads may return short counts,
//! seeks past the end are not reported), so the handle keeps its own
//! cursor and EOF flag:
//!
//! - `cursor` is always within `0..=length` after `seek`, `read_byte` and
//!   `read_buffer`.
//! - `eof` is set by any read or seek that reaches or passes the end and
//!   cleared only by a `seek` that lands inside the file.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::{
    AssetContext, AssetFsError, AssetMode, ErrorKind, FileAccess, NativeAsset, OpenFlags, path,
};

/// A read-only file handle onto one packaged asset.
///
/// # Example
///
/// ```rust
/// use apkfs::{AssetContext, AssetFile, FileAccess, MemoryAssets, OpenFlags};
///
/// let assets = MemoryAssets::new();
/// assets.insert("data.bin", (0u8..10).collect::<Vec<_>>());
///
/// let mut file = AssetFile::new(AssetContext::new(assets));
/// file.open("res://data.bin", OpenFlags::READ)?;
/// file.seek(5);
///
/// let mut buf = [0u8; 10];
/// assert_eq!(file.read_buffer(&mut buf, 10)?, 5);
/// assert_eq!(&buf[..5], &[5, 6, 7, 8, 9]);
/// assert!(file.eof_reached());
/// # Ok::<(), apkfs::AssetFsError>(())
/// ```
pub struct AssetFile {
    ctx: AssetContext,
    asset: Option<Box<dyn NativeAsset>>,
    path_src: String,
    absolute_path: String,
    asset_path: String,
    len: u64,
    pos: u64,
    eof: bool,
}

impl AssetFile {
    /// A closed handle that will open assets through `ctx`.
    pub fn new(ctx: AssetContext) -> Self {
        Self {
            ctx,
            asset: None,
            path_src: String::new(),
            absolute_path: String::new(),
            asset_path: String::new(),
            len: 0,
            pos: 0,
            eof: false,
        }
    }

    /// Open `path` for reading in one step.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::CannotOpen`] if the asset does not exist
    pub fn open_read(ctx: AssetContext, path: &str) -> Result<Self, AssetFsError> {
        let mut file = Self::new(ctx);
        file.open(path, OpenFlags::READ)?;
        Ok(file)
    }

    /// The context this handle opens assets through.
    pub fn context(&self) -> &AssetContext {
        &self.ctx
    }

    /// The key handed to the asset manager for the current asset.
    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// Copy the whole open asset to a newly created file at `dest`.
    ///
    /// Streams in chunks of
    /// [`export_chunk_size`](crate::AssetFsConfig::export_chunk_size) bytes
    /// starting at offset 0. The cursor and EOF flag are restored afterwards.
    ///
    /// # Panics
    ///
    /// If the handle is not open.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::Unavailable`] if `dest` cannot be created
    /// - [`AssetFsError::EndOfFile`] if the asset ends before its reported length
    /// - [`AssetFsError::Io`] if reading or writing fails
    pub fn save_to_file(&mut self, dest: impl AsRef<Path>) -> Result<u64, AssetFsError> {
        assert!(self.asset.is_some(), "save_to_file on a closed asset handle");
        let dest = dest.as_ref();

        let mut out = File::create(dest).map_err(|e| {
            log::error!(
                "cannot create {} to save asset {}: {e}",
                dest.display(),
                self.asset_path
            );
            AssetFsError::Unavailable {
                path: dest.to_path_buf(),
                operation: "save_to_file",
            }
        })?;

        let (saved_pos, saved_eof) = (self.pos, self.eof);
        self.seek(0);
        let copied = self.copy_all(&mut out, dest);
        self.restore_cursor(saved_pos, saved_eof);

        let copied = copied?;
        out.flush()
            .map_err(|e| AssetFsError::io("save_to_file", dest, e))?;
        log::debug!("saved {} ({copied} bytes) to {}", self.asset_path, dest.display());
        Ok(copied)
    }

    fn copy_all(&mut self, out: &mut File, dest: &Path) -> Result<u64, AssetFsError> {
        let mut chunk = vec![0u8; self.ctx.config().export_chunk_size.max(1)];
        let mut copied = 0u64;
        while copied < self.len {
            let want = chunk.len();
            let n = self.read_buffer(&mut chunk, want)?;
            if n == 0 {
                log::error!(
                    "asset {} ended after {copied} of {} bytes",
                    self.asset_path,
                    self.len
                );
                return Err(AssetFsError::EndOfFile {
                    path: self.asset_path.clone(),
                    expected: self.len,
                    read: copied,
                });
            }
            out.write_all(&chunk[..n])
                .map_err(|e| AssetFsError::io("save_to_file", dest, e))?;
            copied += n as u64;
        }
        Ok(copied)
    }

    // Unlike `seek`, this does not clamp: a cursor left past the end by
    // `seek_end` comes back unchanged.
    fn restore_cursor(&mut self, pos: u64, eof: bool) {
        if let Err(e) = self.native("save_to_file").seek(SeekFrom::Start(pos)) {
            log::warn!("native seek back to {pos} failed: {e}");
        }
        self.pos = pos;
        self.eof = eof;
    }

    fn native(&mut self, operation: &str) -> &mut dyn NativeAsset {
        match self.asset.as_deref_mut() {
            Some(asset) => asset,
            None => panic!("{operation} on a closed asset handle"),
        }
    }
}

impl FileAccess for AssetFile {
    fn open(&mut self, path: &str, flags: OpenFlags) -> Result<(), AssetFsError> {
        self.close();

        self.path_src = path.to_string();
        self.absolute_path = path::simplify(path);
        self.asset_path =
            path::asset_key(&self.absolute_path, &self.ctx.config().scheme).to_string();

        if flags.wants_write() {
            log::error!("cannot open {path} for writing: assets are read-only");
            return Err(AssetFsError::Unavailable {
                path: path.into(),
                operation: "open for write",
            });
        }

        let asset = self
            .ctx
            .open_key(&self.asset_path, AssetMode::Streaming)
            .ok_or_else(|| AssetFsError::CannotOpen {
                path: self.asset_path.clone(),
            })?;

        self.len = asset.length();
        self.pos = 0;
        self.eof = false;
        self.asset = Some(asset);
        log::debug!("opened asset {} ({} bytes)", self.asset_path, self.len);
        Ok(())
    }

    fn close(&mut self) {
        if self.asset.take().is_some() {
            log::trace!("closed asset {}", self.asset_path);
        }
    }

    fn is_open(&self) -> bool {
        self.asset.is_some()
    }

    fn path(&self) -> &str {
        &self.path_src
    }

    fn path_absolute(&self) -> &str {
        &self.absolute_path
    }

    fn seek(&mut self, position: u64) {
        if let Err(e) = self.native("seek").seek(SeekFrom::Start(position)) {
            log::warn!("native seek to {position} failed: {e}");
        }
        if position > self.len {
            self.pos = self.len;
            self.eof = true;
        } else {
            self.pos = position;
            self.eof = false;
        }
    }

    fn seek_end(&mut self, offset: i64) {
        if let Err(e) = self.native("seek_end").seek(SeekFrom::End(offset)) {
            log::warn!("native seek to end{offset:+} failed: {e}");
        }
        self.pos = self.len.saturating_add_signed(offset);
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn length(&self) -> u64 {
        self.len
    }

    fn eof_reached(&self) -> bool {
        self.eof
    }

    fn read_byte(&mut self) -> u8 {
        if self.pos >= self.len {
            self.eof = true;
            return 0;
        }

        let mut byte = [0u8; 1];
        if let Err(e) = self.native("read_byte").read(&mut byte) {
            log::warn!("native read at {} failed: {e}", self.pos);
        }
        self.pos += 1;
        byte[0]
    }

    fn read_buffer(&mut self, dst: &mut [u8], requested: usize) -> Result<usize, AssetFsError> {
        if requested > dst.len() {
            return Err(AssetFsError::InvalidParameter {
                operation: "read_buffer",
                details: format!("{requested} bytes requested into a {} byte buffer", dst.len()),
            });
        }

        let result = self.native("read_buffer").read(&mut dst[..requested]);

        if self.pos.saturating_add(requested as u64) > self.len {
            self.eof = true;
        }

        let n = result.map_err(|e| AssetFsError::io("read_buffer", self.asset_path.as_str(), e))?;
        self.pos = (self.pos + n as u64).min(self.len);
        Ok(n)
    }

    fn error(&self) -> Option<ErrorKind> {
        self.eof.then_some(ErrorKind::EndOfFile)
    }

    fn flush(&mut self) {
        panic!("flush on read-only asset {}", self.asset_path);
    }

    fn write_byte(&mut self, _byte: u8) {
        panic!("write on read-only asset {}", self.asset_path);
    }

    fn file_exists(&self, path: &str) -> bool {
        self.ctx.exists(path)
    }
}

/// An owned [`AssetFile`] viewed through `std::io`.
///
/// Reads and seeks go through the handle's cursor bookkeeping, so
/// [`AssetStream::into_inner`] gives back a handle whose position and EOF
/// flag reflect everything done through the stream.
#[derive(Debug)]
pub struct AssetStream {
    file: AssetFile,
}

impl AssetStream {
    /// Borrow the underlying handle.
    pub fn get_ref(&self) -> &AssetFile {
        &self.file
    }

    /// Take the underlying handle back.
    pub fn into_inner(self) -> AssetFile {
        self.file
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.file.is_open() {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotConnected, "asset handle is closed"))
        }
    }
}

impl From<AssetFile> for AssetStream {
    fn from(file: AssetFile) -> Self {
        Self { file }
    }
}

impl Read for AssetStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.ensure_open()?;
        let len = buf.len();
        Ok(self.file.read_buffer(buf, len)?)
    }
}

impl Seek for AssetStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.ensure_open()?;
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(offset) => self.file.len.checked_add_signed(offset),
            SeekFrom::Current(offset) => self.file.pos.checked_add_signed(offset),
        };
        let target = target.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek before start of asset")
        })?;
        self.file.seek(target);
        Ok(self.file.pos)
    }
}

impl std::fmt::Debug for AssetFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetFile")
            .field("path", &self.path_src)
            .field("asset_path", &self.asset_path)
            .field("open", &self.asset.is_some())
            .field("len", &self.len)
            .field("pos", &self.pos)
            .field("eof", &self.eof)
            .finish()
    }
}
