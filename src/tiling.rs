//! Shifted tiling of even-resolution nets
use std::{borrow::Borrow, iter::FusedIterator};

use crate::{core::DiagonalNetCore, error::NetError, radical::Coord};

impl<T, Offsets> DiagonalNetCore<T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
    /// Get the `i`-th point of the net placed in the pixel `(px, py)` of an
    /// infinite tiling of the plane.
    ///
    /// The returned integer-scaled point already includes the pixel's
    /// translation, so after dividing it by `n` it lies in
    /// `[px, px + 1) × [py, py + 1)`. Rows of pixels rotate the net
    /// horizontally by `(py mod 4) · n/4` so that the copies don't line up
    /// into visible seams.
    ///
    /// Only defined for an even `m`; an odd `m` is rejected with
    /// [`NetError::OddResolution`].
    pub fn shifted_tiling(&self, px: T, py: T, i: T) -> Result<[T; 2], NetError> {
        let origin = self.tile_origin(px, py)?;
        self.check_index(i)?;
        Ok(self.tile_point(origin, self.row_shift(py), i))
    }

    /// Get an iterator producing all points of the net placed in the pixel
    /// `(px, py)` in index order.
    ///
    /// See [`shifted_tiling`](Self::shifted_tiling) for the placement rule.
    pub fn tile(&self, px: T, py: T) -> Result<TilePoints<'_, T, Offsets>, NetError> {
        let origin = self.tile_origin(px, py)?;
        tracing::trace!(px = px.widen(), py = py.widen(), m = self.m(), "scanning tile");
        Ok(TilePoints {
            net: self,
            origin,
            row_shift: self.row_shift(py),
            front: T::zero(),
            back: self.n(),
        })
    }

    /// Validate a pixel and get the coordinates of its lower-left corner.
    ///
    /// Fails unless `m` is even and the pixel's upper-right corner is
    /// representable by `T`.
    fn tile_origin(&self, px: T, py: T) -> Result<[T; 2], NetError> {
        if self.m() & 1 != 0 {
            return Err(NetError::OddResolution { m: self.m() });
        }

        let n = self.n();
        let last = n - T::one();
        let origin = |p: T| {
            p.checked_mul(&n)
                .filter(|o| o.checked_add(&last).is_some())
        };
        match (origin(px), origin(py)) {
            (Some(ox), Some(oy)) => Ok([ox, oy]),
            _ => Err(NetError::TileOutOfRange {
                px: px.widen(),
                py: py.widen(),
            }),
        }
    }

    /// The horizontal rotation of the pixel row `py`, `(py mod 4) · 2^(m-2)`.
    fn row_shift(&self, py: T) -> T {
        let period_mask = T::one().unsigned_shl(2) - T::one();
        // `n >> 2` is `2^(m-2)` for `m >= 2` and zero for `m = 0`
        (py & period_mask) * self.n().unsigned_shr(2)
    }

    #[inline]
    fn tile_point(&self, [ox, oy]: [T; 2], row_shift: T, i: T) -> [T; 2] {
        let [x, y] = self.get(i);

        // modulo-wrap depending on the row
        let x = (x + row_shift) & (self.n() - T::one());

        [ox + x, oy + y]
    }
}

/// An iterator over the points of one pixel of a shifted tiling.
///
/// Created by [`DiagonalNetCore::tile`].
#[derive(Debug, Clone)]
pub struct TilePoints<'a, T, Offsets> {
    net: &'a DiagonalNetCore<T, Offsets>,
    origin: [T; 2],
    row_shift: T,
    front: T,
    /// One past the last index to produce.
    back: T,
}

impl<'a, T, Offsets> Iterator for TilePoints<'a, T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
    type Item = [T; 2];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let p = self.net.tile_point(self.origin, self.row_shift, self.front);
        self.front = self.front + T::one();
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.back - self.front).to_usize() {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<'a, T, Offsets> FusedIterator for TilePoints<'a, T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    type Net = DiagonalNetCore<u32, Vec<u32>>;

    #[test]
    fn odd_resolution_is_rejected() {
        let net = Net::new(5).unwrap();
        assert_eq!(
            net.shifted_tiling(0, 0, 0),
            Err(NetError::OddResolution { m: 5 })
        );
        assert_eq!(net.tile(1, 1).err(), Some(NetError::OddResolution { m: 5 }));
    }

    #[test]
    fn row_shift_period() {
        let net = Net::new(6).unwrap();
        assert_eq!(net.row_shift(0), 0);
        assert_eq!(net.row_shift(1), 16);
        assert_eq!(net.row_shift(2), 32);
        assert_eq!(net.row_shift(3), 48);
        assert_eq!(net.row_shift(4), 0);
        assert_eq!(net.row_shift(7), 48);

        assert_eq!(Net::new(0).unwrap().row_shift(3), 0);
        assert_eq!(Net::new(2).unwrap().row_shift(3), 3);
    }

    #[test]
    fn tile_origin_limits() {
        let net = Net::new(30).unwrap();
        assert_eq!(net.tile_origin(3, 0), Ok([3 << 30, 0]));
        assert_eq!(
            net.tile_origin(0, 4),
            Err(NetError::TileOutOfRange { px: 0, py: 4 })
        );
    }

    #[test]
    fn bad_index() {
        let net = Net::new(4).unwrap();
        assert_eq!(
            net.shifted_tiling(0, 0, 16),
            Err(NetError::IndexOutOfRange { index: 16, n: 16 })
        );
    }
}
