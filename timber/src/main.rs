use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use timber::{
    FellerSettings, TreeFeller, init_log,
    event::BlockBreakEvent,
    item::ItemStack,
    notify::LogNotifier,
    thread::ServerThread,
    world::{BlockAccessor, BlockBreaker, BlockFlags, MemoryWorld, WorldError},
};
use timber_config::{LoadConfiguration, TimberConfig};
use timber_data::{Block, Item};
use timber_util::{
    GameMode,
    math::position::BlockPos,
    random::{RandomGenerator, get_seed},
};
use uuid::Uuid;

/// A plain oak: a straight trunk, one branch and a blob of leaves around the crown.
fn grow_oak(world: &mut MemoryWorld, base: BlockPos) -> Result<(), WorldError> {
    world.set_block(&base.down(), &Block::GRASS_BLOCK)?;
    for y in 0..6 {
        world.set_block(&base.up_height(y), &Block::OAK_LOG)?;
    }
    world.set_block(&base.add(1, 4, 1), &Block::OAK_LOG)?;

    let crown = base.up_height(5);
    for position in BlockPos::iterate_cube(crown, 2) {
        if world.get_block(&position).is_air() && position.manhattan_distance(crown) <= 3 {
            world.set_block(&position, &Block::OAK_LEAVES)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match TimberConfig::load(Path::new("config")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_log!(&config.logging);

    let server_thread = ServerThread::current();
    let feller = match FellerSettings::from_config(&config.tree_feller)
        .and_then(|settings| TreeFeller::new(settings, &server_thread))
    {
        Ok(feller) => feller,
        Err(err) => {
            error!("Tree feller disabled: {err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(tool) = feller.settings().tools().next() else {
        error!("No tools configured, nothing to fell with");
        return ExitCode::FAILURE;
    };

    let mut world = MemoryWorld::default();
    let origin = BlockPos::new(0, 64, 0);
    if let Err(err) = grow_oak(&mut world, origin) {
        error!("Couldn't grow the demo tree: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "Grew an oak with {} logs and {} leaves at {origin}",
        world.count(&Block::OAK_LOG),
        world.count(&Block::OAK_LEAVES)
    );

    let event = BlockBreakEvent::new(Uuid::new_v4(), GameMode::Survival, origin);
    let mut held = ItemStack::new(1, tool);
    let mut random = RandomGenerator::from_seed(get_seed());

    let result = feller
        .on_block_break(&event, &mut held, &mut world, &mut random, &mut LogNotifier)
        .and_then(|outcome| {
            if !event.is_cancelled() {
                world.break_block(&origin, BlockFlags::NOTIFY_ALL)?;
            }
            Ok(outcome)
        });

    match result {
        Ok(Some(outcome)) if outcome.tool_broke => info!(
            "The {} broke after felling {} logs",
            tool.name,
            outcome.found_logs + 1
        ),
        Ok(Some(outcome)) => info!(
            "Felled {} logs and popped {} leaves, {} durability used on the {}",
            outcome.found_logs + 1,
            outcome.popped_leaves,
            held.damage,
            tool.name
        ),
        Ok(None) => info!("Nothing to fell at {origin}"),
        Err(err) => {
            error!("Felling failed: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!(
        "{} logs and {} leaves left, {} oak logs dropped",
        world.count(&Block::OAK_LOG),
        world.count(&Block::OAK_LEAVES),
        world.dropped(&Item::OAK_LOG)
    );
    ExitCode::SUCCESS
}
