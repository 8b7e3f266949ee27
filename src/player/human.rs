use crate::board::BB;
use crate::common::{Coord, EngineError};

use super::{AttackStrategy, PlayerKind};

/// Fires exactly where the caller asks, refusing repeats.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTargeting;

impl AttackStrategy for ManualTargeting {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn select_target(&mut self, requested: Coord, previous: &BB) -> Result<Coord, EngineError> {
        if previous.contains(requested) {
            return Err(EngineError::DuplicateAttack(requested));
        }
        Ok(requested)
    }
}
