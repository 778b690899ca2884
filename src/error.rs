use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and file I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The buffer failed structural validation. The tagged reason records
    /// which check rejected it; checks stop at the first violation.
    #[error("malformed BMP: {0}")]
    Malformed(#[from] MalformedError),

    /// The pixel buffer for these dimensions cannot be sized (arithmetic
    /// overflow, or a wire field would not hold the result).
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    /// The file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("cannot read {path}: {source}")]
    StorageUnavailable {
        path: String,
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("{path} is empty")]
    EmptyFile { path: String },

    /// Fewer bytes were read than the file's reported length.
    #[cfg(feature = "std")]
    #[error("short read on {path}: got {actual} of {expected} bytes")]
    TruncatedRead {
        path: String,
        expected: u64,
        actual: u64,
    },

    #[cfg(feature = "std")]
    #[error("cannot write {path}: {source}")]
    WriteFailure {
        path: String,
        source: std::io::Error,
    },
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

/// A structural validation failure.
///
/// One variant per check in [`crate::BmpHeader::validate`], in check order.
/// Each check guards a later offset computation, so validation aborts at
/// the first violation and nothing after it can be trusted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MalformedError {
    /// Shorter than the 54 bytes of magic + file header + info header.
    #[error("buffer holds {len} bytes, too short for the 54-byte headers")]
    HeaderTooShort { len: usize },

    #[error("first bytes are {found:?}, expected \"BM\"")]
    BadMagic { found: [u8; 2] },

    #[error("header file size {declared} does not match buffer length {actual}")]
    FileSizeMismatch { declared: u32, actual: usize },

    #[error("pixel data offset {offset} is outside the {len}-byte buffer")]
    PixelOffsetOutOfRange { offset: u32, len: usize },

    #[error("bit depth {bpp} unsupported, only 24-bit images are handled")]
    UnsupportedBitDepth { bpp: u16 },

    #[error("pixel array of {size} bytes at offset {offset} overruns the {len}-byte buffer")]
    PixelArrayOutOfBounds { size: u32, offset: u32, len: usize },

    #[error("compression type {tag} unsupported, only uncompressed images are handled")]
    Compressed { tag: u32 },

    #[error("plane count is {planes}, expected 1")]
    BadPlaneCount { planes: u16 },

    /// The declared pixel array size disagrees with the declared
    /// dimensions (or a dimension is negative).
    #[error("pixel array size {declared} does not match {width}x{height} at 24 bits per pixel")]
    PixelArraySizeMismatch {
        declared: u32,
        width: i32,
        height: i32,
    },
}
