use std::collections::HashMap;

use bitflags::bitflags;
use log::trace;
use thiserror::Error;
use timber_data::{Block, Item};
use timber_util::math::position::BlockPos;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u32 {
        const NOTIFY_NEIGHBORS                      = 0b000_0000_0001;
        const NOTIFY_LISTENERS                      = 0b000_0000_0010;
        const NOTIFY_ALL                            = 0b000_0000_0011;
        const SKIP_DROPS                            = 0b000_0000_1000;
    }
}

/// Read access to the blocks of a world.
pub trait BlockAccessor {
    /// Positions outside the world read as air.
    fn get_block(&self, position: &BlockPos) -> &'static Block;
}

/// A world whose blocks can be broken as if mined.
pub trait BlockBreaker: BlockAccessor {
    type Error: std::error::Error;

    /// Replaces the block with air. What drops, and how, is up to the world
    /// unless `flags` contains [`BlockFlags::SKIP_DROPS`].
    fn break_block(&mut self, position: &BlockPos, flags: BlockFlags) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("block position {0} is outside of the world's build height")]
    BlockOutOfWorldBounds(BlockPos),
}

/// A sparse world kept entirely in memory. Unset positions are air, broken blocks
/// are counted as dropped items instead of spawning entities.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPos, &'static Block>,
    drops: HashMap<&'static Item, u32>,
    min_y: i32,
    height: u16,
}

impl Default for MemoryWorld {
    /// Same build height as the overworld.
    fn default() -> Self {
        Self::new(-64, 384)
    }
}

impl MemoryWorld {
    #[must_use]
    pub fn new(min_y: i32, height: u16) -> Self {
        Self {
            blocks: HashMap::new(),
            drops: HashMap::new(),
            min_y,
            height,
        }
    }

    pub fn top_y(&self) -> i32 {
        self.min_y + i32::from(self.height)
    }

    pub fn is_out_of_bounds(&self, position: &BlockPos) -> bool {
        position.0.y < self.min_y || position.0.y >= self.top_y()
    }

    /// Places `block` without any drops or updates and returns what was there before.
    pub fn set_block(
        &mut self,
        position: &BlockPos,
        block: &'static Block,
    ) -> Result<&'static Block, WorldError> {
        if self.is_out_of_bounds(position) {
            return Err(WorldError::BlockOutOfWorldBounds(*position));
        }
        let previous = if block.is_air() {
            self.blocks.remove(position)
        } else {
            self.blocks.insert(*position, block)
        };
        Ok(previous.unwrap_or(&Block::AIR))
    }

    /// Number of positions currently holding `block`.
    pub fn count(&self, block: &Block) -> usize {
        self.blocks.values().filter(|b| **b == block).count()
    }

    /// Number of `item` dropped by broken blocks so far.
    pub fn dropped(&self, item: &Item) -> u32 {
        self.drops.get(item).copied().unwrap_or(0)
    }
}

impl BlockAccessor for MemoryWorld {
    fn get_block(&self, position: &BlockPos) -> &'static Block {
        self.blocks.get(position).copied().unwrap_or(&Block::AIR)
    }
}

impl BlockBreaker for MemoryWorld {
    type Error = WorldError;

    fn break_block(&mut self, position: &BlockPos, flags: BlockFlags) -> Result<(), WorldError> {
        let broken = self.set_block(position, &Block::AIR)?;
        if broken.is_air() {
            return Ok(());
        }
        trace!("Broke {} at {position}", broken.name);

        if !flags.contains(BlockFlags::SKIP_DROPS) {
            if let Some(item) = broken.to_item() {
                *self.drops.entry(item).or_default() += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockAccessor, BlockBreaker, BlockFlags, MemoryWorld, WorldError};
    use timber_data::{Block, Item};
    use timber_util::math::position::BlockPos;

    #[test]
    fn unset_positions_are_air() {
        let world = MemoryWorld::default();
        assert!(world.get_block(&BlockPos::new(3, 70, -9)).is_air());
        assert!(world.get_block(&BlockPos::new(0, 10_000, 0)).is_air());
    }

    #[test]
    fn set_and_break() {
        let mut world = MemoryWorld::default();
        let pos = BlockPos::new(1, 64, 1);
        assert_eq!(world.set_block(&pos, &Block::OAK_LOG), Ok(&Block::AIR));
        assert_eq!(world.get_block(&pos), &Block::OAK_LOG);
        assert_eq!(world.count(&Block::OAK_LOG), 1);

        world.break_block(&pos, BlockFlags::NOTIFY_ALL).unwrap();
        assert!(world.get_block(&pos).is_air());
        assert_eq!(world.count(&Block::OAK_LOG), 0);
        assert_eq!(world.dropped(&Item::OAK_LOG), 1);
    }

    #[test]
    fn skip_drops() {
        let mut world = MemoryWorld::default();
        let pos = BlockPos::new(0, 0, 0);
        world.set_block(&pos, &Block::BIRCH_LEAVES).unwrap();
        world.break_block(&pos, BlockFlags::SKIP_DROPS).unwrap();
        assert!(world.get_block(&pos).is_air());
        assert_eq!(world.dropped(&Item::BIRCH_LEAVES), 0);
    }

    #[test]
    fn breaking_air_drops_nothing() {
        let mut world = MemoryWorld::default();
        world
            .break_block(&BlockPos::new(0, 0, 0), BlockFlags::NOTIFY_ALL)
            .unwrap();
        assert_eq!(world, MemoryWorld::default());
    }

    #[test]
    fn build_height_is_enforced() {
        let mut world = MemoryWorld::new(0, 16);
        let above = BlockPos::new(0, 16, 0);
        let below = BlockPos::new(0, -1, 0);
        assert_eq!(
            world.set_block(&above, &Block::STONE),
            Err(WorldError::BlockOutOfWorldBounds(above))
        );
        assert_eq!(
            world.break_block(&below, BlockFlags::NOTIFY_ALL),
            Err(WorldError::BlockOutOfWorldBounds(below))
        );
        assert!(world.set_block(&BlockPos::new(0, 15, 0), &Block::STONE).is_ok());
    }
}
