//! BMP decoding: validated buffer in, packed pixel store out.

use alloc::vec;

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::{BmpHeader, row_stride};
use crate::limits::Limits;

/// Decode an uncompressed 24-bit BMP from a byte buffer.
///
/// The buffer is validated in full before any header field is trusted;
/// see [`BmpHeader::validate`] for the checks and their order. The
/// returned [`Bitmap`] carries the file's headers verbatim and a packed
/// copy of the pixel rows with the on-disk padding stripped.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Bitmap, BmpError> {
    decode_inner(data, None, &stop)
}

/// [`decode`] with caller-imposed caps on dimensions and output memory,
/// applied after validation and before the pixel buffer is allocated.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Bitmap, BmpError> {
    decode_inner(data, Some(limits), &stop)
}

fn decode_inner(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Bitmap, BmpError> {
    let header = BmpHeader::validate(data)?;
    stop.check()?;

    // Validation guarantees both are non-negative
    let width = header.width as u32;
    let height = header.height as u32;

    let packed_size = (u64::from(width) * u64::from(height))
        .checked_mul(3)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_dimensions(width, height)?;
        limits.check_allocation(packed_size)?;
    }

    let mut pixels = vec![0u8; packed_size];

    let unpadded = width as usize * 3;
    if unpadded > 0 {
        let stride = row_stride(width, 24) as usize;
        // In bounds: pixel_offset + pixel_array_size <= data.len() and
        // stride * height == pixel_array_size, both validated above.
        let src = &data[header.pixel_offset as usize..];
        for (row, (dst_row, src_row)) in pixels
            .chunks_exact_mut(unpadded)
            .zip(src.chunks_exact(stride))
            .enumerate()
        {
            if row % 16 == 0 {
                stop.check()?;
            }
            dst_row.copy_from_slice(&src_row[..unpadded]);
        }
    }

    Ok(Bitmap::from_parts(header, pixels))
}
