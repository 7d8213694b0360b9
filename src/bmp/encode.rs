//! 24-bit BMP encoder: canonical RGB raster to a bottom-up BGR file.

use alloc::vec::Vec;

use enough::Stop;

use super::header::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET, row_size};
use crate::error::BitmapError;
use crate::raster::Raster;

/// Sizes of the file the encoder will produce.
#[derive(Clone, Copy, Debug)]
struct FileLayout {
    row_size: usize,
    pixel_data_size: usize,
    file_size: usize,
}

impl FileLayout {
    fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        };
        // Both dimensions are written as signed 32-bit header fields.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large());
        }
        let row_size = row_size(width).ok_or_else(too_large)?;
        let pixel_data_size = row_size
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let file_size = pixel_data_size
            .checked_add(PIXEL_DATA_OFFSET)
            .filter(|&size| u32::try_from(size).is_ok())
            .ok_or_else(too_large)?;
        Ok(Self {
            row_size,
            pixel_data_size,
            file_size,
        })
    }

    fn headers(&self, width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::with_capacity(PIXEL_DATA_OFFSET);
        FileHeader {
            file_size: self.file_size as u32,
            pixel_data_offset: PIXEL_DATA_OFFSET as u32,
        }
        .write(&mut out);
        // Positive height: rows are always stored bottom-up.
        InfoHeader::bottom_up_24(width as i32, height as i32, self.pixel_data_size as u32)
            .write(&mut out);
        out
    }
}

/// Exact byte length of the BMP file `encode_bmp` produces for these dimensions.
pub fn encoded_size(width: u32, height: u32) -> Result<usize, BitmapError> {
    Ok(FileLayout::new(width, height)?.file_size)
}

/// Encode a raster to a newly allocated BMP byte buffer.
pub(crate) fn encode_bmp(raster: &Raster, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    // Header range first: a raster too large for the format fails the same
    // way whether or not its buffer is consistent.
    let layout = FileLayout::new(raster.width, raster.height)?;
    raster.validate()?;

    let mut out = Vec::new();
    out.try_reserve_exact(layout.file_size)
        .map_err(|_| BitmapError::MemoryAllocation {
            bytes: layout.file_size,
        })?;
    out.extend_from_slice(&layout.headers(raster.width, raster.height));
    out.resize(layout.file_size, 0);

    stop.check()?;
    pack_rows(raster, layout.row_size, &mut out[PIXEL_DATA_OFFSET..], stop)?;
    Ok(out)
}

/// Encode a raster into `buf`, returning the number of bytes written.
pub(crate) fn encode_bmp_into(
    raster: &Raster,
    buf: &mut [u8],
    stop: &dyn Stop,
) -> Result<usize, BitmapError> {
    // Header range first: a raster too large for the format fails the same
    // way whether or not its buffer is consistent.
    let layout = FileLayout::new(raster.width, raster.height)?;
    raster.validate()?;
    if buf.len() < layout.file_size {
        return Err(BitmapError::WriteFailed {
            needed: layout.file_size,
            actual: buf.len(),
        });
    }

    let out = &mut buf[..layout.file_size];
    out[..PIXEL_DATA_OFFSET].copy_from_slice(&layout.headers(raster.width, raster.height));

    stop.check()?;
    pack_rows(raster, layout.row_size, &mut out[PIXEL_DATA_OFFSET..], stop)?;
    Ok(layout.file_size)
}

/// Write stored rows bottom-up: file row `y` holds canonical row `height - 1 - y`,
/// swapped to BGR and zero-padded to `row_size`.
fn pack_rows(
    raster: &Raster,
    row_size: usize,
    dst: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    let stride = raster.width as usize * 3;
    let height = raster.height as usize;

    for (file_row, stored) in dst.chunks_exact_mut(row_size).enumerate() {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let src_start = (height - 1 - file_row) * stride;
        let src = &raster.pixels[src_start..src_start + stride];
        let (data, padding) = stored.split_at_mut(stride);

        for (bgr, rgb) in data.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
            bgr[0] = rgb[2];
            bgr[1] = rgb[1];
            bgr[2] = rgb[0];
        }
        padding.fill(0);
    }
    Ok(())
}
