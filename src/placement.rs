//! Placement validation: which cells a ship covers and whether it may go
//! there. Everything here is pure; callers decide what to mutate.

use alloc::vec::Vec;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{Coord, PlacementFault};
use crate::ship::Orientation;

/// The `length` cells a ship starting at `start` covers, in order from the
/// start outward. No bounds checking: cells may lie off the board.
pub fn ship_coordinates(length: usize, start: Coord, orientation: Orientation) -> Vec<Coord> {
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::new(start.x.saturating_add(i), start.y),
            Orientation::Vertical => Coord::new(start.x, start.y.saturating_add(i)),
        })
        .collect()
}

/// Reason a placement on `occupied` would be rejected, if any.
pub fn check_placement<T, const N: usize>(
    occupied: &BitBoard<T, N>,
    length: usize,
    start: Coord,
    orientation: Orientation,
) -> Result<(), PlacementFault>
where
    T: PrimInt + Unsigned + Zero,
{
    if length == 0 {
        return Err(PlacementFault::EmptyShip);
    }
    let cells = ship_coordinates(length, start, orientation);
    if cells.iter().any(|c| !c.in_bounds(N)) {
        return Err(PlacementFault::OutOfBounds);
    }
    if cells.iter().any(|&c| occupied.contains(c)) {
        return Err(PlacementFault::Overlap);
    }
    Ok(())
}

/// True iff every cell is on the board and currently empty.
pub fn is_valid_placement<T, const N: usize>(
    occupied: &BitBoard<T, N>,
    length: usize,
    start: Coord,
    orientation: Orientation,
) -> bool
where
    T: PrimInt + Unsigned + Zero,
{
    check_placement(occupied, length, start, orientation).is_ok()
}
