//! The generic file-access interface higher engine layers program against.
//!
//! Every virtual filesystem root provides a handle type implementing
//! [`FileAccess`], so asset-backed paths can be read exactly like any other.
//!
//! # Example
//!
//! ```rust
//! use apkfs::{FileAccess, AssetFsError, OpenFlags};
//!
//! fn read_header<F: FileAccess>(file: &mut F, path: &str) -> Result<[u8; 4], AssetFsError> {
//!     file.open(path, OpenFlags::READ)?;
//!     let mut magic = [0u8; 4];
//!     file.read_buffer(&mut magic, 4)?;
//!     file.close();
//!     Ok(magic)
//! }
//! ```
//!
//! # Contract
//!
//! Operations that need an open handle (`seek`, `seek_end`, `read_byte`,
//! `read_buffer`) treat a closed handle as a programming error and panic.
//! Environmental failures (missing file, short read) come back as
//! [`AssetFsError`].

use crate::{AssetFsError, ErrorKind, OpenFlags};

/// A seekable, cursor-tracking file handle.
pub trait FileAccess {
    /// Open `path`, releasing whatever this handle held before.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::Unavailable`] if `flags` ask for modification and
    ///   the filesystem is read-only
    /// - [`AssetFsError::CannotOpen`] if the path does not exist
    fn open(&mut self, path: &str, flags: OpenFlags) -> Result<(), AssetFsError>;

    /// Release the underlying resource. Safe to call on a closed handle.
    fn close(&mut self);

    /// Returns `true` while a resource is held.
    fn is_open(&self) -> bool;

    /// The path as the caller passed it to [`open`](Self::open).
    fn path(&self) -> &str;

    /// The engine-normalized form of [`path`](Self::path).
    fn path_absolute(&self) -> &str;

    /// Move the cursor to `position` bytes from the start.
    ///
    /// Positions past the end clamp to the length and set the EOF flag;
    /// anything else clears it.
    fn seek(&mut self, position: u64);

    /// Move the cursor to `length + offset`. `offset` is normally `<= 0`.
    fn seek_end(&mut self, offset: i64);

    /// Current cursor.
    fn position(&self) -> u64;

    /// Length of the open file in bytes.
    fn length(&self) -> u64;

    /// Returns `true` once a read or seek reached the end.
    fn eof_reached(&self) -> bool;

    /// Read a single byte. Returns `0` and sets EOF at the end of the file.
    fn read_byte(&mut self) -> u8;

    /// Read up to `requested` bytes into the front of `dst`.
    ///
    /// # Errors
    ///
    /// - [`AssetFsError::InvalidParameter`] if `dst` is shorter than `requested`
    /// - [`AssetFsError::Io`] if the underlying read fails
    fn read_buffer(&mut self, dst: &mut [u8], requested: usize) -> Result<usize, AssetFsError>;

    /// Sticky error state of the handle.
    ///
    /// This reports whether EOF was reached at some point, not whether the
    /// last call failed.
    fn error(&self) -> Option<ErrorKind>;

    /// Flush pending writes.
    fn flush(&mut self);

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8);

    /// Check whether `path` could be opened, without keeping it open.
    fn file_exists(&self, path: &str) -> bool;
}
