mod block;
mod block_direction;
pub mod enchantment;
pub mod item;
pub mod sound;
pub mod tree;

pub use block::Block;
pub use block_direction::BlockDirection;
pub use enchantment::Enchantment;
pub use item::Item;

/// Strips the vanilla namespace so `minecraft:oak_log` and `oak_log` resolve alike.
/// Keys in any other namespace are returned unchanged and will not match a vanilla entry.
pub(crate) fn strip_vanilla_namespace(key: &str) -> &str {
    key.strip_prefix("minecraft:").unwrap_or(key)
}
