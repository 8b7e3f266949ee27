//! Gameboard: ship placement, attack resolution and sunk accounting.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{AttackResult, Coord, EngineError};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::placement::{check_placement, ship_coordinates};
use crate::ship::{Orientation, Ship, ShipType};

/// Coordinate set sized for the game board.
pub type BB = BitBoard<u128, BOARD_SIZE>;

/// Index of a ship in [`Gameboard::ships`], in placement order.
pub type ShipId = usize;

/// One player's waters: the ships placed on it and every shot received.
///
/// `grid[y][x]` names the ship covering a cell, `occupied` is the same
/// information as a bitboard. Every attack lands in `attacks`; the ones that
/// found water are also appended to `missed_shots` in order.
#[derive(Clone, PartialEq, Eq)]
pub struct Gameboard {
    ships: Vec<Ship>,
    grid: [[Option<ShipId>; BOARD_SIZE]; BOARD_SIZE],
    occupied: BB,
    hits: BB,
    attacks: BB,
    missed_shots: Vec<Coord>,
}

impl Gameboard {
    /// Create an empty board (no ships placed, no attacks received).
    pub fn new() -> Self {
        Gameboard {
            ships: Vec::new(),
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            occupied: BB::new(),
            hits: BB::new(),
            attacks: BB::new(),
            missed_shots: Vec::new(),
        }
    }

    /// Side length of the board.
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Place `ship` starting at `(x, y)` and extending along `orientation`.
    ///
    /// Fails with [`EngineError::InvalidPlacement`] if any cell is off the
    /// board or already taken; nothing is changed in that case.
    pub fn place_ship(
        &mut self,
        ship: impl Into<Ship>,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, EngineError> {
        let ship = ship.into();
        let start = Coord::new(x, y);
        check_placement(&self.occupied, ship.length(), start, orientation)?;

        let id = self.ships.len();
        for cell in ship_coordinates(ship.length(), start, orientation) {
            self.grid[cell.y][cell.x] = Some(id);
            self.occupied.insert(cell);
        }
        self.ships.push(ship);
        debug!(
            "placed {} (length {}) at {} {:?}",
            ship.name(),
            ship.length(),
            start,
            orientation
        );
        Ok(id)
    }

    /// Resolve a shot at `(x, y)`.
    ///
    /// Returns `Hit` or `Miss` only; whether the shot sank something is read
    /// back through [`Gameboard::ship_at`] or [`Gameboard::sunk_ships_count`].
    /// A repeated coordinate fails with [`EngineError::DuplicateAttack`] and
    /// leaves the board untouched.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackResult, EngineError> {
        let coord = Coord::new(x, y);
        if !coord.in_bounds(BOARD_SIZE) {
            return Err(EngineError::OutOfBounds(coord));
        }
        if self.attacks.contains(coord) {
            return Err(EngineError::DuplicateAttack(coord));
        }
        self.attacks.insert(coord);

        match self.grid[y][x] {
            Some(id) => {
                self.hits.insert(coord);
                let ship = &mut self.ships[id];
                ship.hit();
                debug!("attack at {} hit {} ({}/{})", coord, ship.name(), ship.hits(), ship.length());
                Ok(AttackResult::Hit)
            }
            None => {
                self.missed_shots.push(coord);
                debug!("attack at {} missed", coord);
                Ok(AttackResult::Miss)
            }
        }
    }

    /// True once at least one ship is placed and every placed ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of placed ships that are sunk.
    pub fn sunk_ships_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Ship covering `(x, y)`, if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.ship_id_at(x, y).and_then(|id| self.ships.get(id))
    }

    /// Id of the ship covering `(x, y)`, if any.
    pub fn ship_id_at(&self, x: usize, y: usize) -> Option<ShipId> {
        if Coord::new(x, y).in_bounds(BOARD_SIZE) {
            self.grid[y][x]
        } else {
            None
        }
    }

    /// Cells covered by ships.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Attacked cells that found a ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Every attacked cell.
    pub fn all_attacks(&self) -> BB {
        self.attacks
    }

    /// Missed shots in the order they arrived.
    pub fn missed_shots(&self) -> &[Coord] {
        &self.missed_shots
    }

    pub fn is_attacked(&self, x: usize, y: usize) -> bool {
        self.attacks.contains(Coord::new(x, y))
    }

    /// Place `ship` at a random legal position.
    ///
    /// Tries up to [`PLACEMENT_ATTEMPTS`] random positions and orientations,
    /// then gives up with [`EngineError::PlacementExhausted`].
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        ship: ShipType,
        rng: &mut R,
    ) -> Result<ShipId, EngineError> {
        let len = ship.length();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // Keep the start inside the span the ship can fit in; a ship
            // longer than the board still gets sampled and rejected.
            let max_x = if orient == Orientation::Horizontal {
                BOARD_SIZE.saturating_sub(len)
            } else {
                BOARD_SIZE - 1
            };
            let max_y = if orient == Orientation::Vertical {
                BOARD_SIZE.saturating_sub(len)
            } else {
                BOARD_SIZE - 1
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            match self.place_ship(ship, x, y, orient) {
                Ok(id) => return Ok(id),
                Err(EngineError::InvalidPlacement(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        warn!(
            "gave up placing {} (length {}) after {} attempts",
            ship.name(),
            len,
            PLACEMENT_ATTEMPTS
        );
        Err(EngineError::PlacementExhausted {
            length: len,
            attempts: PLACEMENT_ATTEMPTS,
        })
    }

    /// Randomly place every ship of `fleet`. Either all ships are placed or,
    /// on error, the board is left as it was.
    pub fn auto_place_fleet<R: Rng + ?Sized>(
        &mut self,
        fleet: &[ShipType],
        rng: &mut R,
    ) -> Result<(), EngineError> {
        let mut staged = self.clone();
        for &ship in fleet {
            staged.auto_place(ship, rng)?;
        }
        *self = staged;
        Ok(())
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Gameboard {{\n  occupied: {:?},\n  attacks: {:?},\n  missed: {:?},\n  ships: {:?}\n}}",
            self.occupied, self.attacks, self.missed_shots, self.ships
        )
    }
}
