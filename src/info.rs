use crate::bmp::decode::parse_bmp_header;
use crate::error::BitmapError;

/// Header-only description of a 24-bit BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Rows are stored top-down (negative height on disk).
    pub top_down: bool,
    /// `bfSize` as written in the file header; not checked against the data.
    pub file_size: u32,
    pub pixel_data_offset: u32,
    /// `biSizeImage`; informational, may be zero.
    pub image_size: u32,
    /// Padded bytes per stored row.
    pub row_size: usize,
}

impl ImageInfo {
    /// Probe headers without touching pixel data.
    ///
    /// Applies the same signature, variant and dimension checks as decoding,
    /// so a successful probe means only the pixel payload is left to validate.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let header = parse_bmp_header(data)?;
        Ok(Self {
            width: header.geometry.width,
            height: header.geometry.height,
            top_down: header.geometry.top_down,
            file_size: header.file.file_size,
            pixel_data_offset: header.file.pixel_data_offset,
            image_size: header.info.image_size,
            row_size: header.geometry.row_size,
        })
    }
}
