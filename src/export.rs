//! One-shot extraction of a packaged asset to a regular file.
//!
//! Some consumers (native libraries, media players) can only take a real
//! filesystem path. [`export_to_file`] copies an asset out of the bundle so
//! they can be pointed at the copy.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::{AssetContext, AssetFsError, AssetMode};

/// Copy the asset at `asset_path` to a newly created file at `dest`.
///
/// The asset is opened in [`AssetMode::Buffer`] through its own local
/// handle, read in full, and that handle is released before the function
/// returns. Nothing held by any [`AssetFile`](crate::AssetFile) is touched.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// - [`AssetFsError::CannotOpen`] if the asset does not exist
/// - [`AssetFsError::EndOfFile`] if fewer bytes than the reported length
///   could be read
/// - [`AssetFsError::Unavailable`] if `dest` cannot be created
/// - [`AssetFsError::Io`] if writing `dest` fails
///
/// # Example
///
/// ```rust
/// use apkfs::{AssetContext, MemoryAssets, export_to_file};
///
/// let assets = MemoryAssets::new();
/// assets.insert("music/theme.ogg", vec![0x4f, 0x67, 0x67, 0x53]);
/// let ctx = AssetContext::new(assets);
///
/// let dir = std::env::temp_dir().join("apkfs-doc-export");
/// std::fs::create_dir_all(&dir).unwrap();
/// let dest = dir.join("theme.ogg");
/// assert_eq!(export_to_file(&ctx, "res://music/theme.ogg", &dest)?, 4);
/// # Ok::<(), apkfs::AssetFsError>(())
/// ```
pub fn export_to_file(
    ctx: &AssetContext,
    asset_path: &str,
    dest: impl AsRef<Path>,
) -> Result<u64, AssetFsError> {
    let dest = dest.as_ref();
    let key = ctx.asset_key(asset_path);

    let contents = {
        let Some(mut asset) = ctx.open_key(&key, AssetMode::Buffer) else {
            log::error!("export of {asset_path} failed: cannot open asset {key}");
            return Err(AssetFsError::CannotOpen { path: key });
        };

        let expected = asset.length();
        let mut contents = vec![0u8; AssetFsError::buffer_len("export_to_file", &key, expected)?];
        let mut filled = 0;
        while filled < contents.len() {
            match asset.read(&mut contents[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(AssetFsError::io("export_to_file", key.as_str(), e)),
            }
        }

        if filled as u64 != expected {
            log::error!("export of {key} failed: read {filled} of {expected} bytes");
            return Err(AssetFsError::EndOfFile {
                path: key,
                expected,
                read: filled as u64,
            });
        }
        contents
    };

    let mut out = File::create(dest).map_err(|e| {
        log::error!("export of {key} failed: cannot create {}: {e}", dest.display());
        AssetFsError::Unavailable {
            path: dest.to_path_buf(),
            operation: "export_to_file",
        }
    })?;
    out.write_all(&contents)
        .and_then(|()| out.flush())
        .map_err(|e| AssetFsError::io("export_to_file", dest, e))?;

    log::debug!("exported {key} ({} bytes) to {}", contents.len(), dest.display());
    Ok(contents.len() as u64)
}
