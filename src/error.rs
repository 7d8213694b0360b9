use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid BMP: {0}")]
    InvalidFormat(String),

    #[error("unsupported BMP variant: {0}")]
    Unsupported(String),

    #[error("pixel data truncated: need {needed} bytes at offset {offset}, got {available}")]
    ReadFailed {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    WriteFailed { needed: usize, actual: usize },

    #[error("failed to allocate {bytes} bytes")]
    MemoryAllocation { bytes: usize },

    #[error("invalid raster: {0}")]
    InvalidRaster(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error(transparent)]
    File(#[from] crate::fs::FileError),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
