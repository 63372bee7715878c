//! Error types for the asset filesystem.

use std::fmt;
use std::path::PathBuf;

/// Error vocabulary of the generic file-access interface.
///
/// [`AssetFsError::kind`] maps every error onto one of these, and
/// [`FileAccess::error`](crate::FileAccess::error) reports them for the
/// handle's sticky state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The asset could not be opened.
    CannotOpen,
    /// The operation is not available (write access, unwritable destination).
    Unavailable,
    /// End of file reached, or fewer bytes than expected were read.
    EndOfFile,
    /// An argument was invalid.
    InvalidParameter,
    /// The native layer or the host filesystem reported an I/O failure.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::CannotOpen => "cannot open",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::EndOfFile => "end of file",
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::Io => "i/o error",
        };
        f.write_str(name)
    }
}

/// Asset filesystem error type.
///
/// Variants carry the path and operation involved where that is known.
/// Misuse of a closed handle is not represented here: those are contract
/// violations and panic instead.
///
/// # Examples
///
/// ```rust
/// use apkfs::{AssetFsError, ErrorKind};
///
/// let err = AssetFsError::CannotOpen { path: "textures/missing.png".into() };
/// assert_eq!(err.to_string(), "cannot open asset: textures/missing.png");
/// assert_eq!(err.kind(), ErrorKind::CannotOpen);
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AssetFsError {
    /// The native asset manager returned no handle for the path.
    #[error("cannot open asset: {path}")]
    CannotOpen {
        /// Normalized asset path that was looked up.
        path: String,
    },

    /// The operation cannot be performed on this filesystem.
    #[error("{operation}: unavailable: {path}")]
    Unavailable {
        /// Asset path or destination path involved.
        path: PathBuf,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// Fewer bytes were available than expected.
    #[error("unexpected end of file: {path} (expected {expected} bytes, read {read})")]
    EndOfFile {
        /// The asset being read.
        path: String,
        /// Bytes the asset reported.
        expected: u64,
        /// Bytes actually obtained.
        read: u64,
    },

    /// An argument did not satisfy the operation's contract.
    #[error("{operation}: invalid parameter: {details}")]
    InvalidParameter {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        details: String,
    },

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AssetFsError {
    /// The generic error kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssetFsError::CannotOpen { .. } => ErrorKind::CannotOpen,
            AssetFsError::Unavailable { .. } => ErrorKind::Unavailable,
            AssetFsError::EndOfFile { .. } => ErrorKind::EndOfFile,
            AssetFsError::InvalidParameter { .. } | AssetFsError::Deserialization(_) => {
                ErrorKind::InvalidParameter
            }
            AssetFsError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        AssetFsError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Size of an in-memory buffer for `len` bytes of `path`.
    ///
    /// A `Vec` holds at most `isize::MAX` bytes, which on 32-bit targets is
    /// well under the largest asset the native layer can report.
    pub(crate) fn buffer_len(operation: &'static str, path: &str, len: u64) -> Result<usize, Self> {
        isize::try_from(len)
            .ok()
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(|| AssetFsError::InvalidParameter {
                operation,
                details: format!("{path} is {len} bytes, too large to hold in memory"),
            })
    }
}

impl From<std::io::Error> for AssetFsError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::UnexpectedEof => AssetFsError::EndOfFile {
                path: String::new(),
                expected: 0,
                read: 0,
            },
            _ => AssetFsError::Io {
                operation: "io",
                path: PathBuf::new(),
                source: error,
            },
        }
    }
}

impl From<AssetFsError> for std::io::Error {
    fn from(error: AssetFsError) -> Self {
        match error {
            AssetFsError::Io { source, .. } => source,
            other @ AssetFsError::CannotOpen { .. } => {
                std::io::Error::new(std::io::ErrorKind::NotFound, other)
            }
            other @ AssetFsError::Unavailable { .. } => {
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, other)
            }
            other @ AssetFsError::EndOfFile { .. } => {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, other)
            }
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_open_display() {
        let err = AssetFsError::CannotOpen {
            path: "data.bin".into(),
        };
        assert_eq!(err.to_string(), "cannot open asset: data.bin");
    }

    #[test]
    fn unavailable_display() {
        let err = AssetFsError::Unavailable {
            path: PathBuf::from("res://save.dat"),
            operation: "open for write",
        };
        assert_eq!(err.to_string(), "open for write: unavailable: res://save.dat");
    }

    #[test]
    fn end_of_file_display_mentions_counts() {
        let err = AssetFsError::EndOfFile {
            path: "a.bin".into(),
            expected: 100,
            read: 40,
        };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn kinds() {
        assert_eq!(
            AssetFsError::CannotOpen { path: String::new() }.kind(),
            ErrorKind::CannotOpen
        );
        assert_eq!(
            AssetFsError::InvalidParameter {
                operation: "read_buffer",
                details: String::new(),
            }
            .kind(),
            ErrorKind::InvalidParameter
        );
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(AssetFsError::from(io).kind(), ErrorKind::Io);
    }

    #[test]
    fn from_io_unexpected_eof() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short");
        assert!(matches!(
            AssetFsError::from(io_err),
            AssetFsError::EndOfFile { .. }
        ));
    }

    #[test]
    fn into_io_error_keeps_meaning() {
        let err: std::io::Error = AssetFsError::CannotOpen {
            path: "x".into(),
        }
        .into();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

        let source = std::io::Error::new(std::io::ErrorKind::Interrupted, "again");
        let err: std::io::Error = AssetFsError::io("read", "x", source).into();
        assert_eq!(err.kind(), std::io::ErrorKind::Interrupted);
    }

    #[test]
    fn buffer_len_rejects_sizes_a_vec_cannot_hold() {
        assert_eq!(AssetFsError::buffer_len("read", "a", 42).unwrap(), 42);
        let err = AssetFsError::buffer_len("read", "huge.pak", u64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.to_string().contains("huge.pak"));
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::EndOfFile.to_string(), "end of file");
    }
}
