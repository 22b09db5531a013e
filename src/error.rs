//! Error types for QR symbol encoding

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Reasons an encode call can fail. No partial symbol is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Empty payload or malformed options
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Payload does not fit any eligible version
    #[error("Payload too large for encoding: {length} bytes, capacity {capacity} bytes")]
    CapacityExceeded {
        /// Payload length in bytes
        length: usize,
        /// Largest payload the eligible versions can hold
        capacity: usize,
    },

    /// A scratch buffer could not be reserved
    #[error("Scratch buffer allocation failed")]
    AllocationFailure,

    /// A block or placement invariant failed (version table bug)
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl From<TryReserveError> for EncodeError {
    fn from(_: TryReserveError) -> Self {
        EncodeError::AllocationFailure
    }
}

/// Allocate a zero-filled scratch buffer, reporting allocation failure instead of aborting.
pub(crate) fn zeroed_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}
