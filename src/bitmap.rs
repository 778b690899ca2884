//! The in-memory pixel store.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::{BmpHeader, HEADER_LEN, INFO_HEADER_LEN, row_stride};

/// Fingerprint written into the opaque creator fields of freshly created
/// images. Not functional; readable as "CA FE BA BE" in a hex dump.
const CREATOR1: u16 = 0xFECA;
const CREATOR2: u16 = 0xBEBA;

/// Arbitrary but fixed pixels-per-meter resolution for created images.
const RESOLUTION: i32 = 2600;

/// An uncompressed 24-bit image.
///
/// Pixels live in a fully packed buffer of BGR triples, row-major, with
/// buffer row 0 holding the *bottom* scanline, the on-disk convention,
/// kept rather than normalized. [`Bitmap::get_pixel`] and
/// [`Bitmap::set_pixel`] hide both quirks: they take top-down (x, y)
/// coordinates and speak (r, g, b).
///
/// A `Bitmap` is released by dropping it; moving it out makes any further
/// use a compile error, so there is no explicit destroy operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    header: BmpHeader,
    /// Exactly `width * height * 3` bytes, no row padding.
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a zero-filled (black) image.
    ///
    /// Width or height of 0 is permitted and yields an empty pixel
    /// buffer. Fails with [`BmpError::DimensionsTooLarge`] when the pixel
    /// array or total file size would not fit its 32-bit wire field.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let too_large = BmpError::DimensionsTooLarge { width, height };

        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(too_large);
        }
        let array_size = row_stride(width, 24) * u64::from(height);
        let file_size = array_size + HEADER_LEN as u64;
        if file_size > u64::from(u32::MAX) {
            return Err(too_large);
        }
        let packed = usize::try_from(u64::from(width) * u64::from(height) * 3)
            .map_err(|_| BmpError::DimensionsTooLarge { width, height })?;

        let header = BmpHeader {
            file_size: file_size as u32,
            creator1: CREATOR1,
            creator2: CREATOR2,
            pixel_offset: HEADER_LEN as u32,
            info_size: INFO_HEADER_LEN as u32,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            pixel_array_size: array_size as u32,
            h_resolution: RESOLUTION,
            v_resolution: RESOLUTION,
            palette_colors: 0,
            important_colors: 0,
        };

        Ok(Self {
            header,
            pixels: vec![0u8; packed],
        })
    }

    /// Assemble from a validated header and a packed pixel buffer.
    pub(crate) fn from_parts(header: BmpHeader, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len() as u64,
            header.width as u64 * header.height as u64 * 3
        );
        Self { header, pixels }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        // Validation and construction both guarantee non-negative
        self.header.width as u32
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.header.height as u32
    }

    /// The header this image was decoded with or created from.
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Read the pixel at top-down coordinates (x, y) as (r, g, b).
    ///
    /// Returns `None` for out-of-range coordinates rather than an error;
    /// [`Bitmap::set_pixel`] mirrors this by silently ignoring them.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let off = self.offset_of(x, y)?;
        let bgr = &self.pixels[off..off + 3];
        Some((bgr[2], bgr[1], bgr[0]))
    }

    /// Write (r, g, b) at top-down coordinates (x, y).
    ///
    /// Out-of-range coordinates are silently ignored: no panic, no write.
    /// Callers that need to distinguish the case should bounds-check
    /// against [`Bitmap::width`]/[`Bitmap::height`] first.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let Some(off) = self.offset_of(x, y) else {
            return;
        };
        self.pixels[off] = b;
        self.pixels[off + 1] = g;
        self.pixels[off + 2] = r;
    }

    /// Buffer offset of the BGR triple at top-down (x, y), flipping y to
    /// the buffer's bottom-up row order.
    fn offset_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let flipped_y = (self.height() - y - 1) as usize;
        Some((x as usize + flipped_y * self.width() as usize) * 3)
    }

    /// The packed BGR pixel buffer, bottom-up rows, no padding.
    ///
    /// Escape hatch for callers (texture uploads, bulk transforms) that
    /// want the raw layout without per-pixel accessor cost.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Typed view of the pixel buffer. Same bottom-up row order as
    /// [`Bitmap::pixels`].
    #[cfg(feature = "rgb")]
    pub fn bgr_pixels(&self) -> &[rgb::alt::BGR8] {
        use rgb::FromSlice;
        self.pixels.as_bgr()
    }

    /// 2D view of the pixel buffer. Row 0 of the view is the *bottom*
    /// scanline of the image.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::alt::BGR8> {
        imgref::ImgRef::new(
            self.bgr_pixels(),
            self.width() as usize,
            self.height() as usize,
        )
    }

    /// Read and decode a BMP file.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, BmpError> {
        let data = crate::storage::read_file(path.as_ref())?;
        crate::decode(&data, enough::Unstoppable)
    }

    /// Encode and write to a file.
    ///
    /// A failed write is not cleaned up; callers needing atomicity should
    /// write to a temporary path and rename on success.
    #[cfg(feature = "std")]
    pub fn write(&self, path: impl AsRef<std::path::Path>) -> Result<(), BmpError> {
        let bytes = crate::encode(self, enough::Unstoppable)?;
        crate::storage::write_file(path.as_ref(), &bytes)
    }
}
