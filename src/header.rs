//! BMP wire headers: layout constants, row geometry, and the validator.
//!
//! All multi-byte header fields are little-endian on disk. Validation runs
//! before any field is used for offset arithmetic, so the decoder can
//! treat every header-derived offset as in-bounds.

use alloc::vec::Vec;

use crate::error::MalformedError;

/// Magic + 12-byte file header + 40-byte info header.
pub const HEADER_LEN: usize = 54;

/// Size of the classic BITMAPINFOHEADER, the only version this profile
/// accepts.
pub const INFO_HEADER_LEN: usize = 40;

/// On-disk bytes per pixel row: the pixel bytes rounded up to the next
/// multiple of 4. Only the wire format carries this padding; in-memory
/// buffers are packed.
///
/// `row_stride(0, 24) == 0`.
pub fn row_stride(width: u32, bits_per_pixel: u32) -> u64 {
    let unpadded = u64::from(width) * u64::from(bits_per_pixel / 8);
    unpadded.next_multiple_of(4)
}

/// Every header field of the wire format, in file order.
///
/// `creator1`/`creator2` are opaque to the format; freshly created images
/// carry a fixed sentinel pair as an implementation fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub creator1: u16,
    pub creator2: u16,
    pub pixel_offset: u32,
    pub info_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub pixel_array_size: u32,
    pub h_resolution: i32,
    pub v_resolution: i32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

fn u16_at(data: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([data[off], data[off + 1]])
}

fn u32_at(data: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]])
}

impl BmpHeader {
    /// Read all header fields from a buffer already known to hold at
    /// least [`HEADER_LEN`] bytes.
    fn parse(data: &[u8]) -> Self {
        Self {
            file_size: u32_at(data, 2),
            creator1: u16_at(data, 6),
            creator2: u16_at(data, 8),
            pixel_offset: u32_at(data, 10),
            info_size: u32_at(data, 14),
            width: u32_at(data, 18) as i32,
            height: u32_at(data, 22) as i32,
            planes: u16_at(data, 26),
            bits_per_pixel: u16_at(data, 28),
            compression: u32_at(data, 30),
            pixel_array_size: u32_at(data, 34),
            h_resolution: u32_at(data, 38) as i32,
            v_resolution: u32_at(data, 42) as i32,
            palette_colors: u32_at(data, 46),
            important_colors: u32_at(data, 50),
        }
    }

    /// Check every structural invariant of the profile, then return the
    /// parsed header.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    ///
    /// 1. buffer holds the full 54-byte headers
    /// 2. `"BM"` magic
    /// 3. declared file size equals the buffer length exactly
    /// 4. pixel data offset is strictly inside the buffer
    /// 5. bit depth is 24
    /// 6. pixel array, at its declared size, fits inside the buffer
    /// 7. no compression
    /// 8. exactly one plane
    /// 9. `row_stride(width, 24) * height` equals the declared pixel
    ///    array size (which also rejects negative dimensions)
    ///
    /// No multi-byte field is read as an integer before checks 1–2 pass.
    pub fn validate(data: &[u8]) -> Result<Self, MalformedError> {
        let len = data.len();
        if len < HEADER_LEN {
            return Err(MalformedError::HeaderTooShort { len });
        }
        if data[0] != b'B' || data[1] != b'M' {
            return Err(MalformedError::BadMagic {
                found: [data[0], data[1]],
            });
        }

        let header = Self::parse(data);

        if header.file_size as usize != len {
            return Err(MalformedError::FileSizeMismatch {
                declared: header.file_size,
                actual: len,
            });
        }
        if header.pixel_offset as usize >= len {
            return Err(MalformedError::PixelOffsetOutOfRange {
                offset: header.pixel_offset,
                len,
            });
        }
        if header.bits_per_pixel != 24 {
            return Err(MalformedError::UnsupportedBitDepth {
                bpp: header.bits_per_pixel,
            });
        }
        if u64::from(header.pixel_array_size) + u64::from(header.pixel_offset) > len as u64 {
            return Err(MalformedError::PixelArrayOutOfBounds {
                size: header.pixel_array_size,
                offset: header.pixel_offset,
                len,
            });
        }
        if header.compression != 0 {
            return Err(MalformedError::Compressed {
                tag: header.compression,
            });
        }
        if header.planes != 1 {
            return Err(MalformedError::BadPlaneCount {
                planes: header.planes,
            });
        }

        // A negative width or height can never satisfy this: the declared
        // size is unsigned, and expected is computed without wrapping.
        let expected = if header.width < 0 || header.height < 0 {
            None
        } else {
            row_stride(header.width as u32, 24).checked_mul(header.height as u64)
        };
        if expected != Some(u64::from(header.pixel_array_size)) {
            return Err(MalformedError::PixelArraySizeMismatch {
                declared: header.pixel_array_size,
                width: header.width,
                height: header.height,
            });
        }

        Ok(header)
    }

    /// Serialize the full 54-byte header block.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.creator1.to_le_bytes());
        out.extend_from_slice(&self.creator2.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());
        out.extend_from_slice(&self.info_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.pixel_array_size.to_le_bytes());
        out.extend_from_slice(&self.h_resolution.to_le_bytes());
        out.extend_from_slice(&self.v_resolution.to_le_bytes());
        out.extend_from_slice(&self.palette_colors.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_stride_law() {
        for w in 0..=1000u32 {
            let stride = row_stride(w, 24);
            assert!(stride >= u64::from(w) * 3);
            assert_eq!(stride % 4, 0);
            assert!(stride - u64::from(w) * 3 <= 3);
        }
    }

    #[test]
    fn row_stride_known_values() {
        assert_eq!(row_stride(0, 24), 0);
        assert_eq!(row_stride(1, 24), 4);
        assert_eq!(row_stride(2, 24), 8);
        assert_eq!(row_stride(3, 24), 12);
        assert_eq!(row_stride(4, 24), 12);
        assert_eq!(row_stride(5, 24), 16);
    }

    #[test]
    fn row_stride_no_overflow_at_max_width() {
        // i32::MAX is the widest image a header can declare
        assert_eq!(row_stride(i32::MAX as u32, 24), 6_442_450_944);
    }

    #[test]
    fn header_serializes_to_54_bytes() {
        let header = BmpHeader {
            file_size: 70,
            creator1: 0,
            creator2: 0,
            pixel_offset: 54,
            info_size: 40,
            width: 2,
            height: 2,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            pixel_array_size: 16,
            h_resolution: 2600,
            v_resolution: 2600,
            palette_colors: 0,
            important_colors: 0,
        };
        let mut out = Vec::new();
        header.write_into(&mut out);
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(out[14..18].try_into().unwrap()), 40);
    }
}
