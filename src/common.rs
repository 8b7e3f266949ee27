//! Common types for the engine: coordinates, attack results and errors.

use core::fmt;

/// A cell address on the board. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on a `size`×`size` grid.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Neighbouring coordinate shifted by `(dx, dy)`, or `None` if it falls
    /// off a `size`×`size` grid.
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let next = Coord::new(x, y);
        next.in_bounds(size).then_some(next)
    }

    /// Checkerboard colour used by the hunting search: `x + y` is odd.
    #[inline]
    pub const fn is_odd_parity(self) -> bool {
        (self.x + self.y) % 2 == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of a single attack. Sinking is not a third outcome: callers query
/// the defending board afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AttackResult {
    Hit,
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit)
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackResult::Hit => write!(f, "hit"),
            AttackResult::Miss => write!(f, "miss"),
        }
    }
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    /// Ship has no segments.
    EmptyShip,
    /// At least one segment falls outside the grid.
    OutOfBounds,
    /// At least one segment lands on an occupied cell.
    Overlap,
}

/// Errors returned by engine operations. None of them are fatal: the board
/// and player are unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Placement out of bounds or overlapping an existing ship.
    InvalidPlacement(PlacementFault),
    /// The coordinate was already attacked.
    DuplicateAttack(Coord),
    /// Random placement could not fit a ship within the attempt bound.
    PlacementExhausted { length: usize, attempts: usize },
    /// Attack coordinate is off the board.
    OutOfBounds(Coord),
    /// A computer player has already attacked every cell.
    NoTargetsLeft,
    /// The game already has a winner.
    GameOver,
}

impl fmt::Display for PlacementFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementFault::EmptyShip => write!(f, "ship has zero length"),
            PlacementFault::OutOfBounds => write!(f, "ship extends past the board edge"),
            PlacementFault::Overlap => write!(f, "ship overlaps another ship"),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPlacement(fault) => write!(f, "Invalid ship placement: {}", fault),
            EngineError::DuplicateAttack(c) => write!(f, "Already attacked coordinate {}", c),
            EngineError::PlacementExhausted { length, attempts } => write!(
                f,
                "Could not place ship of length {} after {} attempts",
                length, attempts
            ),
            EngineError::OutOfBounds(c) => write!(f, "Coordinate {} is off the board", c),
            EngineError::NoTargetsLeft => write!(f, "Every coordinate has already been attacked"),
            EngineError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<PlacementFault> for EngineError {
    fn from(fault: PlacementFault) -> Self {
        EngineError::InvalidPlacement(fault)
    }
}
