//! Felling a whole tree from a single broken log.
//!
//! The search is breadth first: every log taken from the frontier has its eight
//! same-level neighbors checked, then the block above it, then the eight neighbors of
//! that block. Every matching log is broken as soon as it is found and pushed onto the
//! frontier, so a log can never be found twice.
//!
//! The log limit is only checked before taking the next log from the frontier. A single
//! step can still fell up to 17 logs after passing the check, so a tree may lose up to
//! `log_limit + 17` logs.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace, warn};
use timber_config::TreeFellerConfig;
use timber_data::{
    Block, BlockDirection, Item,
    sound::{Sound, SoundCategory},
    tree::leaves_for_log,
};
use timber_util::{math::position::BlockPos, random::RandomImpl};

use crate::{
    error::TreeFellerError,
    event::BlockBreakEvent,
    item::ItemStack,
    notify::Notifier,
    thread::ServerThread,
    tool::{damage_chance, damage_tool},
    world::{BlockBreaker, BlockFlags},
};

/// Leaf radii beyond this are clamped. Every felled log sweeps `(2r + 1)³` positions.
pub const MAX_LEAF_RADIUS: u32 = 32;

/// Validated, immutable tree feller configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FellerSettings {
    tools: HashSet<&'static Item>,
    log_limit: u32,
    pop_leaves: bool,
    leaf_radius: u32,
}

impl FellerSettings {
    /// Negative limits and radii are taken by their absolute value. The leaf radius is
    /// clamped to [`MAX_LEAF_RADIUS`].
    #[must_use]
    pub fn new(
        tools: impl IntoIterator<Item = &'static Item>,
        log_limit: i32,
        pop_leaves: bool,
        leaf_radius: i32,
    ) -> Self {
        let mut radius = leaf_radius.unsigned_abs();
        if radius > MAX_LEAF_RADIUS {
            warn!("Leaf radius {leaf_radius} is too large, using {MAX_LEAF_RADIUS}");
            radius = MAX_LEAF_RADIUS;
        }
        Self {
            tools: tools.into_iter().collect(),
            log_limit: log_limit.unsigned_abs(),
            pop_leaves,
            leaf_radius: radius,
        }
    }

    /// Resolves every configured tool key. The first key that doesn't name an
    /// obtainable item fails the whole configuration.
    pub fn from_config(config: &TreeFellerConfig) -> Result<Self, TreeFellerError> {
        let tools = config
            .tools
            .iter()
            .map(|key| resolve_tool(key))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            tools,
            config.log_limit,
            config.pop_leaves,
            config.leaf_radius,
        ))
    }

    pub fn is_tool(&self, item: &Item) -> bool {
        self.tools.contains(item)
    }

    pub fn tools(&self) -> impl Iterator<Item = &'static Item> + '_ {
        self.tools.iter().copied()
    }

    pub fn log_limit(&self) -> u32 {
        self.log_limit
    }

    pub fn pop_leaves(&self) -> bool {
        self.pop_leaves
    }

    pub fn leaf_radius(&self) -> u32 {
        self.leaf_radius
    }
}

fn resolve_tool(key: &str) -> Result<&'static Item, TreeFellerError> {
    if let Some(item) = Item::from_registry_key(key) {
        return Ok(item);
    }
    if Block::from_registry_key(key).is_some() {
        Err(TreeFellerError::NotAnItem(key.to_string()))
    } else {
        Err(TreeFellerError::UnknownMaterial(key.to_string()))
    }
}

/// What a felling did. The world and the tool already reflect it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FellOutcome {
    /// Logs broken by the feller. The broken origin is not included, the server breaks it.
    pub found_logs: u32,
    pub popped_leaves: u32,
    /// Logs taken from the frontier.
    pub iterations: u32,
    pub tool_broke: bool,
}

pub struct TreeFeller {
    settings: FellerSettings,
}

impl TreeFeller {
    /// Fails unless called on `server_thread`, since felling must never race other
    /// world access.
    pub fn new(
        settings: FellerSettings,
        server_thread: &ServerThread,
    ) -> Result<Self, TreeFellerError> {
        server_thread.ensure_current()?;
        debug!(
            "Tree feller enabled for {} tools, log limit {}, leaf radius {}{}",
            settings.tools.len(),
            settings.log_limit,
            settings.leaf_radius,
            if settings.pop_leaves { "" } else { " (leaves kept)" }
        );
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &FellerSettings {
        &self.settings
    }

    /// Reacts to a player breaking a block with `tool`.
    ///
    /// Returns `Ok(None)` without touching anything if the event is cancelled, the tool
    /// isn't a configured feller tool or the block isn't a log. The origin block itself is
    /// left to the server, only the rest of the tree is broken here.
    ///
    /// Errors from the world are passed through unchanged; whatever was felled before the
    /// error stays felled.
    pub fn on_block_break<W, R, N>(
        &self,
        event: &BlockBreakEvent,
        tool: &mut ItemStack,
        world: &mut W,
        random: &mut R,
        notifier: &mut N,
    ) -> Result<Option<FellOutcome>, W::Error>
    where
        W: BlockBreaker,
        R: RandomImpl + ?Sized,
        N: Notifier + ?Sized,
    {
        if event.is_cancelled() || tool.is_empty() || !self.settings.is_tool(tool.item) {
            return Ok(None);
        }
        let origin = event.block_position;
        let log = world.get_block(&origin);
        let Some(leaves) = leaves_for_log(log) else {
            return Ok(None);
        };

        let mut traversal = Traversal {
            world,
            settings: &self.settings,
            log,
            leaves,
            frontier: VecDeque::from([origin]),
            outcome: FellOutcome::default(),
        };
        let chance = damage_chance(tool, event.game_mode.is_equipment_wear_exempt());

        while traversal.outcome.found_logs <= self.settings.log_limit {
            let Some(center) = traversal.frontier.pop_front() else {
                break;
            };
            traversal.outcome.iterations += 1;

            // Tools that can't wear are never rolled for, even at max damage
            if let Some(max_damage) = tool.max_damage().filter(|_| chance > 0.0) {
                if damage_tool(tool, chance, max_damage, random) {
                    let name = tool.item.name.replace('_', " ");
                    tool.clear();
                    notifier.play_sound(
                        &event.player,
                        Sound::EntityItemBreak,
                        SoundCategory::Players,
                        &center,
                    );
                    notifier.send_message(&event.player, &format!("Your {name} broke!"));
                    debug!("{}'s {name} broke while felling at {center}", event.player);
                    traversal.outcome.tool_broke = true;
                    break;
                }
            }

            let found = traversal.sweep_level(&center)?;
            traversal.outcome.found_logs += found;

            let up = center.up();
            if traversal.world.get_block(&up) == log {
                traversal.fell_log(up)?;
                traversal.outcome.found_logs += 1;
            }
            let found = traversal.sweep_level(&up)?;
            traversal.outcome.found_logs += found;
        }

        let outcome = traversal.outcome;
        debug!(
            "Felled {} {} logs and {} leaves from {origin} in {} steps",
            outcome.found_logs, log.name, outcome.popped_leaves, outcome.iterations
        );
        Ok(Some(outcome))
    }
}

/// State of one felling.
struct Traversal<'a, W> {
    world: &'a mut W,
    settings: &'a FellerSettings,
    log: &'static Block,
    leaves: &'static Block,
    frontier: VecDeque<BlockPos>,
    outcome: FellOutcome,
}

impl<W: BlockBreaker> Traversal<'_, W> {
    /// Fells every matching log around `center` on its own level and returns how many.
    fn sweep_level(&mut self, center: &BlockPos) -> Result<u32, W::Error> {
        let mut found = 0;
        for direction in BlockDirection::horizontal() {
            let neighbor = center.offset(direction.to_offset());
            if self.world.get_block(&neighbor) == self.log {
                self.fell_log(neighbor)?;
                found += 1;
            }
        }
        Ok(found)
    }

    /// Queues `position`, breaks it right away and pops the leaves around it.
    fn fell_log(&mut self, position: BlockPos) -> Result<(), W::Error> {
        trace!("Felling {} at {position}", self.log.name);
        self.frontier.push_back(position);
        self.world.break_block(&position, BlockFlags::NOTIFY_ALL)?;
        if self.settings.pop_leaves {
            let popped = self.pop_leaves(&position)?;
            self.outcome.popped_leaves += popped;
        }
        Ok(())
    }

    /// Breaks every matching leaf block in the cube of `leaf_radius` around `center`.
    /// Leaves never extend the search.
    fn pop_leaves(&mut self, center: &BlockPos) -> Result<u32, W::Error> {
        let radius = i32::try_from(self.settings.leaf_radius).unwrap_or(MAX_LEAF_RADIUS as i32);
        let mut popped = 0;
        for position in BlockPos::iterate_cube(*center, radius) {
            if self.world.get_block(&position) == self.leaves {
                self.world.break_block(&position, BlockFlags::NOTIFY_ALL)?;
                popped += 1;
            }
        }
        Ok(popped)
    }
}
