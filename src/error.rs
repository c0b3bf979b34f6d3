use alloc::string::String;
use enough::StopReason;

use crate::format::PixelFormat;
use crate::row::RowLayout;

/// Errors from row conversion and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no conversion from {from} to {to:?} rows")]
    UnsupportedConversion { from: PixelFormat, to: RowLayout },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("encoder is {state:?}, expected Created")]
    InvalidState { state: crate::pipeline::EncodeStatus },

    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("codec error: {0}")]
    Codec(String),
}

impl From<StopReason> for EncodeError {
    fn from(r: StopReason) -> Self {
        EncodeError::Cancelled(r)
    }
}

impl EncodeError {
    /// Whether this error is a cooperative cancellation rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Slice lengths that do not line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("slice length mismatch: expected {expected}, got {actual}")]
pub struct SizeError {
    pub expected: usize,
    pub actual: usize,
}

impl From<SizeError> for EncodeError {
    fn from(e: SizeError) -> Self {
        EncodeError::BufferTooSmall {
            needed: e.expected,
            actual: e.actual,
        }
    }
}
