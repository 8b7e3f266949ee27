//! A fixed-size set of board coordinates packed into an unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is stored in `T` in row-major order, so the cell `(x, y)` lives at bit
//! `y * N + x`. The packing is collision-free for every coordinate inside the
//! grid, which is what lets the board use it as its attack and occupancy
//! index.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// A set of coordinates on an N×N grid, stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Side length of the grid.
    #[inline]
    pub const fn size() -> usize {
        N
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no coordinate is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true once every cell of the grid is in the set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Membership test. Coordinates outside the grid are never members.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `false` if it was already present or lies
    /// outside the grid.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) if !self.contains(coord) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            _ => false,
        }
    }

    /// Removes `coord`, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, coord: Coord) -> bool {
        match Self::index(coord) {
            Some(idx) if self.contains(coord) => {
                self.bits = self.bits & !(T::one() << idx);
                true
            }
            _ => false,
        }
    }

    /// First coordinate NOT in the set, scanning rows top to bottom and each
    /// row left to right.
    pub fn first_vacant(&self) -> Option<Coord> {
        (0..Self::BOARD_BITS)
            .find(|&idx| ((self.bits >> idx) & T::one()) == T::zero())
            .map(Self::coord_at)
    }

    /// Iterator over the coordinates in the set, in row-major order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            board: self,
            idx: 0,
        }
    }

    /// Packed key of an in-bounds coordinate.
    #[inline]
    pub fn index(coord: Coord) -> Option<usize> {
        coord.in_bounds(N).then(|| coord.y * N + coord.x)
    }

    #[inline]
    fn coord_at(idx: usize) -> Coord {
        Coord::new(idx % N, idx / N)
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coord> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Out-of-bounds coordinates are dropped.
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if self.contains(Coord::new(x, y)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the coordinates of a bitboard.
#[derive(Clone, Copy)]
pub struct Iter<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(BitBoard::<T, N>::coord_at(idx));
            }
        }
        None
    }
}

/// Intersection.
impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Union.
impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
