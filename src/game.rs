//! Two-player session: strict turn alternation and win detection on top of
//! [`Player::attack`].

use log::{debug, info};

use crate::common::{AttackResult, Coord, EngineError};
use crate::player::Player;

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    /// Index of the player who fired.
    pub attacker: usize,
    /// Cell actually fired on.
    pub target: Coord,
    pub result: AttackResult,
    /// The shot finished off a ship.
    pub sunk: bool,
    /// Index of the winner, if this shot ended the game.
    pub winner: Option<usize>,
}

/// A game between two players, each firing at the other's board.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    turn: usize,
    turns_played: usize,
    winner: Option<usize>,
}

impl Game {
    /// Start a game. `first` fires first. Fleets are expected to be placed
    /// already.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            turn: 0,
            turns_played: 0,
            winner: None,
        }
    }

    /// Index of the player whose turn it is.
    pub fn current(&self) -> usize {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Shots fired so far by both players.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Fire the current player's shot and pass the turn.
    ///
    /// `(x, y)` is only honoured for a human player. Errors leave the turn
    /// with the same player.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<TurnReport, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }
        let attacker = self.turn;
        let defender = 1 - attacker;
        let (left, right) = self.players.split_at_mut(1);
        let (shooter, target_player) = if attacker == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        };

        let sunk_before = target_player.gameboard().sunk_ships_count();
        let result = shooter.attack(target_player.gameboard_mut(), x, y)?;
        let target = shooter.last_attack().unwrap_or(Coord::new(x, y));
        let sunk = target_player.gameboard().sunk_ships_count() > sunk_before;
        if target_player.has_lost() {
            self.winner = Some(attacker);
            info!("{} wins after {} shots", shooter.name(), self.turns_played + 1);
        }
        debug!("{} fired at {}: {}{}", shooter.name(), target, result, if sunk { " (sunk)" } else { "" });

        self.turns_played += 1;
        self.turn = defender;
        Ok(TurnReport {
            attacker,
            target,
            result,
            sunk,
            winner: self.winner,
        })
    }
}
