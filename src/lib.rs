//! This crate provides a random-access generator of the diagonal
//! (0,m,2)-net in base 2 described in “(t,m,s)-Nets and Maximized Minimum
//! Distance, Part II” by Grünschloß and Keller.
//!
//! A net of `n = 2^m` points is split into `2^⌊m/2⌋` diagonals of `2^⌈m/2⌉`
//! points each. The starting X coordinate of each diagonal is derived from
//! the base-2 radical inverse of the diagonal's number and precomputed once;
//! the `i`-th point is then found with a handful of shifts and masks.
//!
//! ```
//! use diag0m2::DiagonalNet32;
//!
//! let net = DiagonalNet32::new(7).unwrap();
//! let scale = 1.0 / net.n() as f64;
//! for [x, y] in &net {
//!     let (sx, sy) = (x as f64 * scale, y as f64 * scale);
//!     assert!(sx < 1.0 && sy < 1.0);
//! }
//! ```
//!
//! The points are produced as integer lattice coordinates in `[0, n)²`.
//! Converting them to samples in the unit square is left to the caller.
//!
//! # Differences from the original construction
//!
//! ## Small even resolutions
//!
//! The correction applied to even resolutions advances by `2^(m/2 - 2)` per
//! point, which does not exist for `m < 4`. For `m = 0` and `m = 2` the
//! offsets are the plain radical inverses and the step is one, which still
//! yields a (0,m,2)-net:
//!
//! ```text
//!   m = 2:  (0, 0), (1, 2), (2, 1), (3, 3)
//! ```
//!
//! ## Shifted tiling
//!
//! [`DiagonalNetCore::shifted_tiling`] reports an error for odd resolutions
//! and for pixels whose coordinates overflow `T` instead of producing
//! meaningless points.
//!
//! ```
//! use diag0m2::DiagonalNet32;
//!
//! let net = DiagonalNet32::new(6).unwrap();
//! for py in 0..4 {
//!     for px in 0..4 {
//!         for [x, y] in net.tile(px, py).unwrap() {
//!             assert_eq!((x >> 6, y >> 6), (px, py));
//!         }
//!     }
//! }
//! assert!(DiagonalNet32::new(7).unwrap().shifted_tiling(0, 0, 0).is_err());
//! ```
mod core;
mod error;
mod radical;
mod tiling;

pub use self::core::*;
pub use self::error::*;
pub use self::radical::*;
pub use self::tiling::*;

pub type DiagonalNet32 = DiagonalNetCore<u32, Vec<u32>>;
pub type DiagonalNet64 = DiagonalNetCore<u64, Vec<u64>>;
