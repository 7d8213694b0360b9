use alloc::vec::Vec;

use enough::Stop;

use crate::bmp;
use crate::error::BitmapError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::raster::Raster;

/// Builder for decoding with resource limits and cancellation.
///
/// ```no_run
/// use zenbmp24::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits::default().with_max_pixels(1 << 24);
/// let raster = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenbmp24::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read the headers only.
    pub fn probe(&self) -> Result<ImageInfo, BitmapError> {
        ImageInfo::from_bytes(self.data)
    }

    pub fn decode(self, stop: impl Stop) -> Result<Raster, BitmapError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}

/// Builder for encoding with cancellation.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest<'a> {
    raster: &'a Raster,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(raster: &'a Raster) -> Self {
        Self { raster }
    }

    /// Encode to a new buffer.
    pub fn encode(self, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(self.raster, &stop)
    }

    /// Encode into `buf`, returning the bytes written.
    pub fn encode_into(self, buf: &mut [u8], stop: impl Stop) -> Result<usize, BitmapError> {
        bmp::encode_into(self.raster, buf, &stop)
    }
}
