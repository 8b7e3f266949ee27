//! Hunt/destroy targeting for computer players.
//!
//! While hunting, shots are spread over one colour of a checkerboard: every
//! ship of length two or more covers at least one cell with odd `x + y`, so
//! half the board is enough to find them all. The first hit switches to
//! destroying, which works outward from the last hit until the ship sinks.
//!
//! Mode transitions:
//! - Hunt -> Destroy on any hit that does not sink a ship
//! - Destroy -> Hunt when a hit sinks a ship, or when no candidate cell is left
//!   around the last hit

use alloc::collections::VecDeque;
use log::{trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::BB;
use crate::common::{AttackResult, Coord, EngineError};
use crate::config::{BOARD_SIZE, HUNT_ATTEMPTS};
use crate::ship::Orientation;

use super::{AttackStrategy, PlayerKind};

/// Orthogonal neighbours, in the order they are queued: left, right, up, down.
const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Targeting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Searching for any ship.
    Hunt,
    /// Working around a hit ship.
    Destroy,
}

/// Stateful hunt/destroy target picker.
#[derive(Debug, Clone)]
pub struct HuntDestroy {
    rng: SmallRng,
    mode: Mode,
    last_hit: Option<Coord>,
    potential_targets: VecDeque<Coord>,
    orientation: Option<Orientation>,
    hits: BB,
    bypassed: bool,
}

impl HuntDestroy {
    /// Fresh picker in hunting mode.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            mode: Mode::Hunt,
            last_hit: None,
            potential_targets: VecDeque::new(),
            orientation: None,
            hits: BB::new(),
            bypassed: false,
        }
    }

    /// Picker with a deterministic random sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Picker seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Most recent hit being pursued.
    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Axis of the ship being pursued, once two hits line up.
    pub fn ship_orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Queued follow-up cells, next first.
    pub fn potential_targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.potential_targets.iter().copied()
    }

    /// Choose the next cell to fire on, never one in `previous`. Returns
    /// `None` only when every cell has been attacked.
    pub fn next_target(&mut self, previous: &BB) -> Option<Coord> {
        let proposed = match self.mode {
            Mode::Hunt => self.hunt_target(previous),
            Mode::Destroy => self.destroy_target(previous),
        };
        match proposed {
            Some(target) if !previous.contains(target) => {
                self.bypassed = false;
                Some(target)
            }
            _ => {
                // Off-script for one turn; the result of this shot does not
                // feed the state machine.
                let fallback = previous.first_vacant();
                if let Some(target) = fallback {
                    warn!("targeting proposed {:?}, falling back to {}", proposed, target);
                    self.bypassed = true;
                }
                fallback
            }
        }
    }

    /// Update the state machine with the outcome of a shot at `target`.
    /// `previous` must already include `target`.
    pub fn record_result(&mut self, target: Coord, result: AttackResult, sunk: bool, previous: &BB) {
        if result.is_hit() {
            self.hits.insert(target);
        }
        if core::mem::take(&mut self.bypassed) {
            return;
        }
        match result {
            AttackResult::Hit if sunk => {
                trace!("sank a ship at {}, back to hunting", target);
                self.reset();
            }
            AttackResult::Hit => {
                match (self.mode, self.last_hit) {
                    (Mode::Destroy, Some(last)) => {
                        if target.y == last.y {
                            self.orientation = Some(Orientation::Horizontal);
                        } else if target.x == last.x {
                            self.orientation = Some(Orientation::Vertical);
                        }
                    }
                    _ => self.orientation = None,
                }
                self.mode = Mode::Destroy;
                self.last_hit = Some(target);
                self.generate_targets(previous);
                trace!(
                    "hit at {}, orientation {:?}, queue {:?}",
                    target,
                    self.orientation,
                    self.potential_targets
                );
            }
            AttackResult::Miss => {}
        }
    }

    fn hunt_target(&mut self, previous: &BB) -> Option<Coord> {
        for _ in 0..HUNT_ATTEMPTS {
            let candidate = Coord::new(
                self.rng.random_range(0..BOARD_SIZE),
                self.rng.random_range(0..BOARD_SIZE),
            );
            if candidate.is_odd_parity() && !previous.contains(candidate) {
                return Some(candidate);
            }
        }
        previous.first_vacant()
    }

    fn destroy_target(&mut self, previous: &BB) -> Option<Coord> {
        while let Some(target) = self.potential_targets.pop_front() {
            if !previous.contains(target) {
                return Some(target);
            }
        }

        self.generate_targets(previous);
        if self.potential_targets.is_empty() && self.orientation.is_some() {
            trace!("axis blocked around {:?}, trying all neighbours", self.last_hit);
            self.orientation = None;
            self.generate_targets(previous);
        }
        if let Some(target) = self.potential_targets.pop_front() {
            return Some(target);
        }

        trace!("nothing left around {:?}, back to hunting", self.last_hit);
        self.reset();
        self.hunt_target(previous)
    }

    /// Refill the queue from `last_hit`. With a known axis the candidates
    /// are the first open cell past each end of the run of hits; otherwise
    /// the four neighbours.
    fn generate_targets(&mut self, previous: &BB) {
        self.potential_targets.clear();
        let Some(origin) = self.last_hit else {
            return;
        };
        match self.orientation {
            Some(axis) => {
                let (dx, dy) = axis.step();
                for sign in [-1, 1] {
                    if let Some(cell) = self.run_end(origin, dx * sign, dy * sign, previous) {
                        self.potential_targets.push_back(cell);
                    }
                }
            }
            None => {
                for (dx, dy) in NEIGHBOURS {
                    if let Some(cell) = origin.offset(dx, dy, BOARD_SIZE) {
                        if !previous.contains(cell) {
                            self.potential_targets.push_back(cell);
                        }
                    }
                }
            }
        }
    }

    fn run_end(&self, origin: Coord, dx: isize, dy: isize, previous: &BB) -> Option<Coord> {
        let mut cell = origin;
        loop {
            cell = cell.offset(dx, dy, BOARD_SIZE)?;
            if !self.hits.contains(cell) {
                return (!previous.contains(cell)).then_some(cell);
            }
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.last_hit = None;
        self.orientation = None;
        self.potential_targets.clear();
    }
}

impl AttackStrategy for HuntDestroy {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    /// The requested coordinate is ignored.
    fn select_target(&mut self, _requested: Coord, previous: &BB) -> Result<Coord, EngineError> {
        self.next_target(previous).ok_or(EngineError::NoTargetsLeft)
    }

    fn handle_attack_result(&mut self, target: Coord, result: AttackResult, sunk: bool, previous: &BB) {
        self.record_result(target, result, sunk, previous);
    }
}
