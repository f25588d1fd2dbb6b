//! A fixed-size cell set packed into an unsigned integer using const generics.
//!
//! Cells are addressed by [`Coordinate`]; anything outside the `N×N`
//! square is reported as absent by queries and rejected by inserts.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::position::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside `[0, N)` on some axis.
    OutOfBounds { row: i32, col: i32 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of cells on an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
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
    /// Rejects at compile time any `N` whose grid does not fit into `T`.
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    /// Empty board.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Bit index for `coord`, if it lies on the grid.
    #[inline]
    fn index(coord: Coordinate) -> Option<usize> {
        let n = N as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Some((coord.row * n + coord.col) as usize)
        } else {
            None
        }
    }

    /// Whether `coord` is in the set. Off-grid coordinates never are.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord).ok_or(BitBoardError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        })?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Builds a board from coordinates, silently dropping off-grid ones.
    pub fn from_coords<I: IntoIterator<Item = Coordinate>>(coords: I) -> Self {
        let mut bb = Self::new();
        for c in coords {
            let _ = bb.insert(c);
        }
        bb
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>", N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let ch = if self.contains(Coordinate::new(r, c)) { '1' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
