//! Caller-imposed caps for decoding untrusted input.

use alloc::format;

use crate::error::BmpError;

/// Limits applied by [`crate::decode_with_limits`] between header
/// validation and the output allocation.
///
/// Every field defaults to `None`, meaning unlimited. A header can
/// legally declare dimensions far larger than the caller wants to
/// allocate for; these caps reject such files before any pixel memory is
/// reserved.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded pixel buffer size in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), BmpError> {
        if let Some(max) = self.max_width {
            if width > max {
                return Err(BmpError::LimitExceeded(format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(BmpError::LimitExceeded(format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(BmpError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_allocation(&self, bytes: usize) -> Result<(), BmpError> {
        if let Some(max) = self.max_memory_bytes {
            if bytes as u64 > max {
                return Err(BmpError::LimitExceeded(format!(
                    "allocation of {bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
