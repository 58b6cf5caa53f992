//! The error type shared by all generator operations.
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors reported by [`DiagonalNetCore`](crate::DiagonalNetCore).
///
/// Coordinates and indices are widened to `u64` so that the type does not
/// depend on the coordinate type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    /// `2^m` is not representable by the coordinate type.
    #[error("resolution 2^{m} does not fit the coordinate type (m must be at most {max})")]
    ResolutionTooLarge { m: u32, max: u32 },

    /// The storage passed to `with_offset_storage` cannot hold the table.
    #[error("offset storage holds {actual} elements, but {required} are required")]
    OffsetStorageTooSmall { required: usize, actual: usize },

    /// The offset table could not be allocated.
    #[error("failed to allocate the diagonal offset table")]
    Allocation(#[from] TryReserveError),

    /// The shifted tiling is only defined for even resolutions.
    #[error("shifted tiling requires an even resolution exponent, got m = {m}")]
    OddResolution { m: u32 },

    #[error("point index {index} is out of range for a net of {n} points")]
    IndexOutOfRange { index: u64, n: u64 },

    /// The tile's coordinates are not representable by the coordinate type.
    #[error("tile ({px}, {py}) lies outside the coordinate range")]
    TileOutOfRange { px: u64, py: u64 },
}
