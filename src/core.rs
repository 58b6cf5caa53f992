//! The core implementation of the construction.
use std::{
    borrow::{Borrow, BorrowMut},
    iter::FusedIterator,
};

use crate::{error::NetError, radical::Coord};

/// Get the number of offsets required by [`DiagonalNetCore`] for a net of
/// `2^m` points, i.e., the number of diagonals `2^⌊m/2⌋`.
pub fn offset_table_len(m: u32) -> usize {
    1 << (m >> 1)
}

fn check_resolution<T: Coord>(m: u32) -> Result<(), NetError> {
    let max = T::BITS - 1;
    if m > max {
        Err(NetError::ResolutionTooLarge { m, max })
    } else {
        Ok(())
    }
}

/// Get the shift amounts `(dx, dy)` applied to the within-diagonal index.
///
/// The even case moves by a quarter of a diagonal step in X. This is only
/// possible from `m = 4` on; the degenerate resolutions `m = 0` and `m = 2`
/// step by one.
fn diagonal_steps(m: u32) -> (u32, u32) {
    if m & 1 != 0 {
        (m >> 1, m >> 1)
    } else if m >= 4 {
        ((m >> 1) - 2, m >> 1)
    } else {
        (0, m >> 1)
    }
}

/// Get the starting X coordinate of the `k`-th diagonal (not yet reduced
/// modulo `n`).
fn diagonal_offset<T: Coord>(k: T, m: u32, dx: u32) -> T {
    // The leading `m` bits of the radical inverse. (`m == 0` would shift by
    // the full width)
    let base = if m == 0 {
        T::zero()
    } else {
        k.radical_inverse().unsigned_shr(T::BITS - m)
    };

    if m & 1 != 0 {
        base + k
    } else if m >= 4 {
        base + k.unsigned_shr(2) + T::one().unsigned_shl(dx)
    } else {
        base
    }
}

/// A generator of the diagonal (0,m,2)-net with `n = 2^m` points.
///
/// `T` is a type used to represent the output coordinates. `Offsets` is
/// the storage of the per-diagonal offset table, borrowed as a slice of `T`.
///
/// The generator is immutable after construction. Every point is computed
/// independently in constant time, so a single instance can be shared by
/// any number of readers.
#[derive(Debug, Clone)]
pub struct DiagonalNetCore<T, Offsets> {
    m: u32,
    n: T,
    /// `⌈m/2⌉`, the number of index bits selecting a point on a diagonal.
    m2: u32,
    /// `2^m2 - 1`
    mask: T,
    dx: u32,
    dy: u32,
    /// `offset_table_len(m)`. `offsets` may be longer than this.
    table_len: usize,
    /// The starting X coordinate of each diagonal, reduced modulo `n`.
    ///
    /// Invariant: `offsets.borrow()[k] < n` for every `k < table_len`.
    offsets: Offsets,
}

impl<T: Coord> DiagonalNetCore<T, Vec<T>> {
    /// Construct a generator for `2^m` points, allocating the offset table
    /// on the heap.
    pub fn new(m: u32) -> Result<Self, NetError> {
        check_resolution::<T>(m)?;
        let len = offset_table_len(m);

        let mut offsets = Vec::new();
        offsets.try_reserve_exact(len)?;
        offsets.resize(len, T::zero());

        Self::with_offset_storage(offsets, m)
    }
}

impl<T, Offsets> DiagonalNetCore<T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
    /// Construct a generator for `2^m` points with an explicit `Offsets`.
    ///
    /// The slice borrowed by `offsets` must have at least
    /// [`offset_table_len`]`(m)` elements. The elements do not have to be
    /// initialized as they are overwritten by this function.
    pub fn with_offset_storage(mut offsets: Offsets, m: u32) -> Result<Self, NetError>
    where
        Offsets: BorrowMut<[T]>,
    {
        check_resolution::<T>(m)?;

        let table_len = offset_table_len(m);
        let n = T::one().unsigned_shl(m);
        let m2 = (m + 1) >> 1;
        let mask = T::one().unsigned_shl(m2) - T::one();
        let (dx, dy) = diagonal_steps(m);

        {
            let storage = offsets.borrow_mut();
            if storage.len() < table_len {
                return Err(NetError::OffsetStorageTooSmall {
                    required: table_len,
                    actual: storage.len(),
                });
            }

            let wrap = n - T::one();
            let mut k = T::zero();
            for offset in &mut storage[..table_len] {
                *offset = diagonal_offset(k, m, dx) & wrap;
                k = k + T::one();
            }
        }

        tracing::debug!(
            m,
            n = n.widen(),
            table_len,
            dx,
            dy,
            "constructed diagonal (0,m,2)-net generator"
        );

        Ok(Self {
            m,
            n,
            m2,
            mask,
            dx,
            dy,
            table_len,
            offsets,
        })
    }

    /// The resolution exponent `m`.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// The number of points `n = 2^m`.
    pub fn n(&self) -> T {
        self.n
    }

    /// The diagonal offset table (the starting X coordinate of each
    /// diagonal, modulo `n`).
    pub fn offsets(&self) -> &[T] {
        &self.offsets.borrow()[..self.table_len]
    }

    /// Destroy `self` and return the offset table storage.
    pub fn into_offsets(self) -> Offsets {
        self.offsets
    }

    /// Get the integer coordinates `[x, y]` of the `i`-th point.
    ///
    /// `i` must be in `0..n`. This is only checked in debug builds; an
    /// out-of-range index produces an unspecified point or panics. See
    /// [`checked_get`](Self::checked_get) for the checked version.
    #[inline]
    pub fn get(&self, i: T) -> [T; 2] {
        debug_assert!(i < self.n, "index {:?} out of range 0..{:?}", i, self.n);

        let k = i.unsigned_shr(self.m2); // the diagonal
        let j = i & self.mask; // `j`-th point on the `k`-th diagonal

        // `offset < n` and `j << dx < n`, so this can't overflow
        let offset = self.offsets()[k.as_index()];
        let x = (offset + j.unsigned_shl(self.dx)) & (self.n - T::one());
        let y = k + j.unsigned_shl(self.dy);
        [x, y]
    }

    /// Get the integer coordinates `[x, y]` of the `i`-th point, rejecting
    /// indices outside `0..n`.
    pub fn checked_get(&self, i: T) -> Result<[T; 2], NetError> {
        self.check_index(i)?;
        Ok(self.get(i))
    }

    pub(crate) fn check_index(&self, i: T) -> Result<(), NetError> {
        if i < self.n {
            Ok(())
        } else {
            Err(NetError::IndexOutOfRange {
                index: i.widen(),
                n: self.n.widen(),
            })
        }
    }

    /// Get an iterator producing all points in index order.
    pub fn iter(&self) -> Points<'_, T, Offsets> {
        Points {
            net: self,
            front: T::zero(),
            back: self.n,
        }
    }
}

impl<'a, T, Offsets> IntoIterator for &'a DiagonalNetCore<T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
    type Item = [T; 2];
    type IntoIter = Points<'a, T, Offsets>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the points of a [`DiagonalNetCore`] in index order.
#[derive(Debug, Clone)]
pub struct Points<'a, T, Offsets> {
    net: &'a DiagonalNetCore<T, Offsets>,
    front: T,
    /// One past the last index to produce.
    back: T,
}

impl<'a, T, Offsets> Iterator for Points<'a, T, Offsets>
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
        let p = self.net.get(self.front);
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

impl<'a, T, Offsets> DoubleEndedIterator for Points<'a, T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.back - T::one();
        Some(self.net.get(self.back))
    }
}

impl<'a, T, Offsets> FusedIterator for Points<'a, T, Offsets>
where
    T: Coord,
    Offsets: Borrow<[T]>,
{
}
