//! BITMAPFILEHEADER / BITMAPINFOHEADER records.
//!
//! Fields are read and written at their fixed on-disk offsets in
//! little-endian order. Nothing here depends on Rust struct layout.

use alloc::vec::Vec;

use crate::error::BitmapError;

/// Size of the file header record.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER record.
pub const INFO_HEADER_SIZE: usize = 40;
/// Pixel data offset written by the encoder.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub(crate) const SIGNATURE: [u8; 2] = *b"BM";
pub(crate) const BITS_PER_PIXEL: u16 = 24;
pub(crate) const BI_RGB: u32 = 0;

/// Stored bytes per row for a 24-bit image `width` pixels wide,
/// padded to a multiple of 4.
///
/// Returns `None` on overflow.
pub fn row_size(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

// ── Little-endian field access at fixed offsets ─────────────────────

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn le_i32(data: &[u8], at: usize) -> i32 {
    le_u32(data, at) as i32
}

// ── File header ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FileHeader {
    pub file_size: u32,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Parse the 14-byte file header. The signature is the first thing checked.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(BitmapError::InvalidFormat(alloc::format!(
                "truncated file header: {} of {FILE_HEADER_SIZE} bytes",
                data.len()
            )));
        }
        if data[0..2] != SIGNATURE {
            return Err(BitmapError::InvalidFormat(alloc::format!(
                "bad signature {:02x?}, expected \"BM\"",
                &data[0..2]
            )));
        }
        // Offsets 6 and 8 are the reserved fields.
        Ok(Self {
            file_size: le_u32(data, 2),
            pixel_data_offset: le_u32(data, 10),
        })
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved1, reserved2
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

// ── Info header ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Negative height marks top-down row order.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl InfoHeader {
    /// Parse the 40-byte info header that follows the file header.
    ///
    /// `data` is the whole file; the record is read at offset 14.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        let at = FILE_HEADER_SIZE;
        // OS/2 core headers (12 bytes) use 16-bit dimensions at other offsets.
        if data.len() >= at + 4 {
            let size = le_u32(data, at);
            if (size as usize) < INFO_HEADER_SIZE {
                return Err(BitmapError::Unsupported(alloc::format!(
                    "info header size {size}"
                )));
            }
        }
        if data.len() < PIXEL_DATA_OFFSET {
            return Err(BitmapError::InvalidFormat(alloc::format!(
                "truncated info header: {} of {PIXEL_DATA_OFFSET} bytes",
                data.len()
            )));
        }
        // Resolution (38, 42) and color table (46, 50) fields are ignored.
        Ok(Self {
            header_size: le_u32(data, at),
            width: le_i32(data, at + 4),
            height: le_i32(data, at + 8),
            planes: le_u16(data, at + 12),
            bit_count: le_u16(data, at + 14),
            compression: le_u32(data, at + 16),
            image_size: le_u32(data, at + 20),
        })
    }

    /// Header for the encoder's bottom-up 24-bit output.
    pub fn bottom_up_24(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            compression: BI_RGB,
            image_size,
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 16]); // x/y resolution, colors used/important
    }

    /// Check variant and dimensions, splitting the signed height into
    /// magnitude and orientation.
    pub fn geometry(&self) -> Result<Geometry, BitmapError> {
        if self.bit_count != BITS_PER_PIXEL {
            return Err(BitmapError::Unsupported(alloc::format!(
                "{}-bit BMP (only 24-bit is supported)",
                self.bit_count
            )));
        }
        if self.compression != BI_RGB {
            return Err(BitmapError::Unsupported(alloc::format!(
                "compression method {} (only uncompressed is supported)",
                self.compression
            )));
        }
        if self.width <= 0 {
            return Err(BitmapError::InvalidFormat(alloc::format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if self.height == 0 {
            return Err(BitmapError::InvalidFormat("height is zero".into()));
        }

        let width = self.width as u32;
        let height = self.height.unsigned_abs();
        let row_size = row_size(width).ok_or(BitmapError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        })?;
        Ok(Geometry {
            width,
            height,
            top_down: self.height < 0,
            row_size,
        })
    }
}

/// Validated image shape. The raw signed height does not survive past here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Geometry {
    pub width: u32,
    pub height: u32,
    pub top_down: bool,
    pub row_size: usize,
}

impl Geometry {
    /// Total stored pixel bytes (`row_size * height`), including padding.
    pub fn stored_size(&self) -> Option<usize> {
        self.row_size.checked_mul(self.height as usize)
    }

    /// Canonical RGB buffer size (`width * height * 3`), no padding.
    pub fn raster_size(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|px| px.checked_mul(3))
    }

    /// Canonical row that stored row `file_row` lands in.
    pub fn canonical_row(&self, file_row: usize) -> usize {
        if self.top_down {
            file_row
        } else {
            self.height as usize - 1 - file_row
        }
    }

    pub fn too_large(&self) -> BitmapError {
        BitmapError::DimensionsTooLarge {
            width: self.width.into(),
            height: self.height.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn row_size_pads_to_four() {
        assert_eq!(row_size(1), Some(4));
        assert_eq!(row_size(2), Some(8));
        assert_eq!(row_size(3), Some(12));
        assert_eq!(row_size(4), Some(12));
        assert_eq!(row_size(5), Some(16));
    }

    #[test]
    fn headers_write_exact_sizes() {
        let mut out = Vec::new();
        FileHeader {
            file_size: 78,
            pixel_data_offset: PIXEL_DATA_OFFSET as u32,
        }
        .write(&mut out);
        assert_eq!(out.len(), FILE_HEADER_SIZE);
        InfoHeader::bottom_up_24(3, 2, 24).write(&mut out);
        assert_eq!(out.len(), PIXEL_DATA_OFFSET);

        assert_eq!(&out[0..2], b"BM");
        assert_eq!(le_u32(&out, 2), 78);
        assert_eq!(le_u32(&out, 10), 54);
        assert_eq!(le_u32(&out, 14), 40);
        assert_eq!(le_i32(&out, 18), 3);
        assert_eq!(le_i32(&out, 22), 2);
        assert_eq!(le_u16(&out, 26), 1);
        assert_eq!(le_u16(&out, 28), 24);
        assert_eq!(le_u32(&out, 30), 0);
        assert_eq!(le_u32(&out, 34), 24);
        assert!(out[38..54].iter().all(|&b| b == 0));
    }

    #[test]
    fn parse_reads_written_fields() {
        let mut out = Vec::new();
        FileHeader {
            file_size: 1234,
            pixel_data_offset: 54,
        }
        .write(&mut out);
        InfoHeader::bottom_up_24(7, -5, 0).write(&mut out);

        let fh = FileHeader::parse(&out).unwrap();
        assert_eq!(fh.file_size, 1234);
        assert_eq!(fh.pixel_data_offset, 54);

        let geometry = InfoHeader::parse(&out).unwrap().geometry().unwrap();
        assert_eq!(
            geometry,
            Geometry {
                width: 7,
                height: 5,
                top_down: true,
                row_size: 24,
            }
        );
        assert_eq!(geometry.canonical_row(0), 0);
    }

    #[test]
    fn bottom_up_rows_are_flipped() {
        let geometry = Geometry {
            width: 1,
            height: 3,
            top_down: false,
            row_size: 4,
        };
        assert_eq!(geometry.canonical_row(0), 2);
        assert_eq!(geometry.canonical_row(2), 0);
        assert_eq!(geometry.stored_size(), Some(12));
        assert_eq!(geometry.raster_size(), Some(9));
    }

    #[test]
    fn core_header_is_unsupported() {
        let mut out = Vec::new();
        FileHeader {
            file_size: 58,
            pixel_data_offset: 54,
        }
        .write(&mut out);
        InfoHeader::bottom_up_24(1, 1, 4).write(&mut out);
        out[14..18].copy_from_slice(&12u32.to_le_bytes());
        match InfoHeader::parse(&out) {
            Err(BitmapError::Unsupported(msg)) => assert_eq!(msg, "info header size 12"),
            other => panic!("expected Unsupported, got {other:?}"),
        }

        // Larger headers (V4/V5) are still read with the 40-byte layout.
        out[14..18].copy_from_slice(&124u32.to_le_bytes());
        assert_eq!(InfoHeader::parse(&out).unwrap().header_size, 124);
    }

    #[test]
    fn short_buffers_are_invalid_format() {
        assert!(matches!(
            FileHeader::parse(b"BM\x00\x00"),
            Err(BitmapError::InvalidFormat(_))
        ));
        let data = vec![b'B', b'M', 0, 0, 0, 0, 0, 0, 0, 0, 54, 0, 0, 0, 40, 0];
        assert!(matches!(
            InfoHeader::parse(&data),
            Err(BitmapError::InvalidFormat(_))
        ));
    }
}
