use timber_util::{GameMode, math::position::BlockPos};
use uuid::Uuid;

/// Fired by the server right before a player breaks a block. A cancelled event
/// leaves the block in place and nothing else may react to it.
#[derive(Clone, Debug)]
pub struct BlockBreakEvent {
    pub player: Uuid,
    pub game_mode: GameMode,
    pub block_position: BlockPos,
    pub cancelled: bool,
}

impl BlockBreakEvent {
    #[must_use]
    pub fn new(player: Uuid, game_mode: GameMode, block_position: BlockPos) -> Self {
        Self {
            player,
            game_mode,
            block_position,
            cancelled: false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}
