//! BMP encoding: packed pixel store back to the padded wire layout.

use alloc::vec::Vec;

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::{HEADER_LEN, INFO_HEADER_LEN, row_stride};

/// Encode an image to the on-disk BMP byte layout.
///
/// Rows are written in the buffer's own bottom-up order, each padded to
/// the 4-byte stride with zero bytes (the padding content is unspecified
/// by the format; zeros keep output deterministic). When the row needs no
/// padding the whole pixel array is written as one contiguous block.
///
/// The derived header fields (pixel data offset, pixel array size, total
/// file size, info header size) are recomputed from the dimensions so
/// the output always re-validates, even for images decoded from files
/// that placed their pixel array at a nonstandard offset. Opaque fields
/// (creators, resolutions, color counts) pass through verbatim.
pub fn encode(image: &Bitmap, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    let width = image.width();
    let height = image.height();

    let stride = row_stride(width, 24);
    let array_size = stride * u64::from(height);
    let file_size = array_size + HEADER_LEN as u64;
    if file_size > u64::from(u32::MAX) {
        return Err(BmpError::DimensionsTooLarge { width, height });
    }

    let mut header = image.header().clone();
    header.file_size = file_size as u32;
    header.pixel_offset = HEADER_LEN as u32;
    header.info_size = INFO_HEADER_LEN as u32;
    header.pixel_array_size = array_size as u32;

    stop.check()?;

    let mut out = Vec::with_capacity(file_size as usize);
    header.write_into(&mut out);

    let unpadded = width as usize * 3;
    let pad = stride as usize - unpadded;

    if pad == 0 {
        out.extend_from_slice(image.pixels());
    } else {
        for (row, src_row) in image.pixels().chunks_exact(unpadded).enumerate() {
            if row % 16 == 0 {
                stop.check()?;
            }
            out.extend_from_slice(src_row);
            out.extend(core::iter::repeat_n(0u8, pad));
        }
    }

    Ok(out)
}
