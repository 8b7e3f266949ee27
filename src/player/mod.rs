//! Players and how they pick their shots.
//!
//! A [`Player`] owns its [`Gameboard`] and the record of where it has fired.
//! Target selection is delegated to an [`AttackStrategy`] chosen once when
//! the player is created:
//! - [`ManualTargeting`]: fires exactly where the caller asks
//! - [`HuntDestroy`]: ignores the caller and picks its own cell

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use rand::Rng;

use crate::board::{Gameboard, ShipId, BB};
use crate::common::{AttackResult, Coord, EngineError};
use crate::ship::{Orientation, Ship, ShipType};

pub mod ai;
pub mod human;

pub use ai::{HuntDestroy, Mode};
pub use human::ManualTargeting;

/// Who is behind a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer => write!(f, "computer"),
        }
    }
}

/// Interface implemented by the ways a player can choose targets.
pub trait AttackStrategy: Send {
    /// Kind of player this strategy stands for.
    fn kind(&self) -> PlayerKind;

    /// Decide where this turn's shot goes. `requested` is what the caller
    /// passed to [`Player::attack`]; `previous` holds every cell this player
    /// has already fired on.
    fn select_target(&mut self, requested: Coord, previous: &BB) -> Result<Coord, EngineError>;

    /// Inform the strategy of how its shot at `target` landed. `sunk` is set
    /// when the shot finished off a ship.
    fn handle_attack_result(
        &mut self,
        _target: Coord,
        _result: AttackResult,
        _sunk: bool,
        _previous: &BB,
    ) {
    }
}

/// A participant: name, own board, and shot history.
pub struct Player {
    name: String,
    gameboard: Gameboard,
    previous_attacks: BB,
    last_attack: Option<Coord>,
    strategy: Box<dyn AttackStrategy>,
}

impl Player {
    /// Create a player of the given kind. Computer players are seeded from
    /// the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Human => Self::human(name),
            PlayerKind::Computer => {
                Self::with_strategy(name, Box::new(HuntDestroy::from_entropy()))
            }
        }
    }

    /// Human player firing at caller-chosen coordinates.
    pub fn human(name: impl Into<String>) -> Self {
        Self::with_strategy(name, Box::new(ManualTargeting))
    }

    /// Computer player with a reproducible targeting sequence.
    pub fn computer(name: impl Into<String>, seed: u64) -> Self {
        Self::with_strategy(name, Box::new(HuntDestroy::seeded(seed)))
    }

    /// Player driven by a custom strategy.
    pub fn with_strategy(name: impl Into<String>, strategy: Box<dyn AttackStrategy>) -> Self {
        Self {
            name: name.into(),
            gameboard: Gameboard::new(),
            previous_attacks: BB::new(),
            last_attack: None,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.strategy.kind()
    }

    /// The player's own board.
    pub fn gameboard(&self) -> &Gameboard {
        &self.gameboard
    }

    pub fn gameboard_mut(&mut self) -> &mut Gameboard {
        &mut self.gameboard
    }

    /// Every cell this player has fired on.
    pub fn previous_attacks(&self) -> BB {
        self.previous_attacks
    }

    /// Where the most recent successful attack landed.
    pub fn last_attack(&self) -> Option<Coord> {
        self.last_attack
    }

    /// Place a ship on the player's own board.
    pub fn place_ship(
        &mut self,
        ship: impl Into<Ship>,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, EngineError> {
        self.gameboard.place_ship(ship, x, y, orientation)
    }

    /// Randomly place `fleet` on the player's own board, all or nothing.
    pub fn auto_place_fleet<R: Rng + ?Sized>(
        &mut self,
        fleet: &[ShipType],
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.gameboard.auto_place_fleet(fleet, rng)
    }

    /// Fire at `opponent`.
    ///
    /// A human player fires at `(x, y)` and gets
    /// [`EngineError::DuplicateAttack`] for a cell it already tried. A
    /// computer player ignores `(x, y)` entirely and fires wherever its
    /// targeting picks; use [`Player::last_attack`] to learn where that was.
    /// On error neither this player nor `opponent` is modified.
    pub fn attack(
        &mut self,
        opponent: &mut Gameboard,
        x: usize,
        y: usize,
    ) -> Result<AttackResult, EngineError> {
        let target = self
            .strategy
            .select_target(Coord::new(x, y), &self.previous_attacks)?;
        let sunk_before = opponent.sunk_ships_count();
        let result = opponent.receive_attack(target.x, target.y)?;
        self.previous_attacks.insert(target);
        self.last_attack = Some(target);

        let sunk = opponent.sunk_ships_count() > sunk_before;
        self.strategy
            .handle_attack_result(target, result, sunk, &self.previous_attacks);
        Ok(result)
    }

    /// True once every ship on the player's board is sunk.
    pub fn has_lost(&self) -> bool {
        self.gameboard.all_ships_sunk()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("attacks", &self.previous_attacks.len())
            .field("last_attack", &self.last_attack)
            .finish()
    }
}
