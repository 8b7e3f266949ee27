#![cfg_attr(not(feature = "std"), no_std)]

//! Battleship engine: fleet placement, attack resolution and a hunt/destroy
//! computer opponent.
//!
//! The engine never renders anything. A front end creates two [`Player`]s,
//! places fleets, then alternates [`Player::attack`] calls (or lets
//! [`Game`] alternate them) and reads results back from the boards.

extern crate alloc;

mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod player;
mod ship;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from_env};
pub use placement::{check_placement, is_valid_placement, ship_coordinates};
pub use player::{AttackStrategy, HuntDestroy, ManualTargeting, Mode, Player, PlayerKind};
pub use ship::*;
