//! File access for [`crate::Bitmap::load`] and [`crate::Bitmap::write`].
//!
//! Reads are all-or-nothing: a missing, unreadable, empty, or truncated
//! file is an error and no partial buffer ever reaches the decoder.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::BmpError;

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Read a file's complete contents.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, BmpError> {
    let mut file = File::open(path).map_err(|source| BmpError::StorageUnavailable {
        path: display(path),
        source,
    })?;
    let expected = file
        .metadata()
        .map_err(|source| BmpError::StorageUnavailable {
            path: display(path),
            source,
        })?
        .len();
    if expected == 0 {
        return Err(BmpError::EmptyFile {
            path: display(path),
        });
    }

    let mut buf = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    file.read_to_end(&mut buf)
        .map_err(|source| BmpError::StorageUnavailable {
            path: display(path),
            source,
        })?;
    if (buf.len() as u64) < expected {
        return Err(BmpError::TruncatedRead {
            path: display(path),
            expected,
            actual: buf.len() as u64,
        });
    }

    Ok(buf)
}

/// Write a complete byte buffer to a file.
///
/// A short or failed write leaves whatever was written in place; callers
/// wanting atomicity write to a temporary path and rename.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<(), BmpError> {
    std::fs::write(path, bytes).map_err(|source| BmpError::WriteFailure {
        path: display(path),
        source,
    })
}
