use crate::item::Item;
use crate::strip_vanilla_namespace;
use std::hash::{Hash, Hasher};

#[derive(Debug)]
pub struct Block {
    pub id: u16,
    pub name: &'static str,
    /// `None` for blocks that have no obtainable item form (fluids, fire, air).
    pub item_id: Option<u16>,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Block {
    pub const AIR: Block = Block {
        id: 0,
        name: "air",
        item_id: None,
    };
    pub const STONE: Block = Block {
        id: 1,
        name: "stone",
        item_id: Some(0),
    };
    pub const GRASS_BLOCK: Block = Block {
        id: 2,
        name: "grass_block",
        item_id: Some(1),
    };
    pub const DIRT: Block = Block {
        id: 3,
        name: "dirt",
        item_id: Some(2),
    };
    pub const BEDROCK: Block = Block {
        id: 4,
        name: "bedrock",
        item_id: Some(3),
    };
    pub const WATER: Block = Block {
        id: 5,
        name: "water",
        item_id: None,
    };
    pub const LAVA: Block = Block {
        id: 6,
        name: "lava",
        item_id: None,
    };
    pub const FIRE: Block = Block {
        id: 7,
        name: "fire",
        item_id: None,
    };
    pub const OAK_PLANKS: Block = Block {
        id: 8,
        name: "oak_planks",
        item_id: Some(4),
    };
    pub const OAK_LOG: Block = Block {
        id: 9,
        name: "oak_log",
        item_id: Some(5),
    };
    pub const SPRUCE_LOG: Block = Block {
        id: 10,
        name: "spruce_log",
        item_id: Some(6),
    };
    pub const BIRCH_LOG: Block = Block {
        id: 11,
        name: "birch_log",
        item_id: Some(7),
    };
    pub const JUNGLE_LOG: Block = Block {
        id: 12,
        name: "jungle_log",
        item_id: Some(8),
    };
    pub const ACACIA_LOG: Block = Block {
        id: 13,
        name: "acacia_log",
        item_id: Some(9),
    };
    pub const CHERRY_LOG: Block = Block {
        id: 14,
        name: "cherry_log",
        item_id: Some(10),
    };
    pub const DARK_OAK_LOG: Block = Block {
        id: 15,
        name: "dark_oak_log",
        item_id: Some(11),
    };
    pub const PALE_OAK_LOG: Block = Block {
        id: 16,
        name: "pale_oak_log",
        item_id: Some(12),
    };
    pub const MANGROVE_LOG: Block = Block {
        id: 17,
        name: "mangrove_log",
        item_id: Some(13),
    };
    pub const CRIMSON_STEM: Block = Block {
        id: 18,
        name: "crimson_stem",
        item_id: Some(14),
    };
    pub const WARPED_STEM: Block = Block {
        id: 19,
        name: "warped_stem",
        item_id: Some(15),
    };
    pub const OAK_LEAVES: Block = Block {
        id: 20,
        name: "oak_leaves",
        item_id: Some(16),
    };
    pub const SPRUCE_LEAVES: Block = Block {
        id: 21,
        name: "spruce_leaves",
        item_id: Some(17),
    };
    pub const BIRCH_LEAVES: Block = Block {
        id: 22,
        name: "birch_leaves",
        item_id: Some(18),
    };
    pub const JUNGLE_LEAVES: Block = Block {
        id: 23,
        name: "jungle_leaves",
        item_id: Some(19),
    };
    pub const ACACIA_LEAVES: Block = Block {
        id: 24,
        name: "acacia_leaves",
        item_id: Some(20),
    };
    pub const CHERRY_LEAVES: Block = Block {
        id: 25,
        name: "cherry_leaves",
        item_id: Some(21),
    };
    pub const DARK_OAK_LEAVES: Block = Block {
        id: 26,
        name: "dark_oak_leaves",
        item_id: Some(22),
    };
    pub const PALE_OAK_LEAVES: Block = Block {
        id: 27,
        name: "pale_oak_leaves",
        item_id: Some(23),
    };
    pub const MANGROVE_LEAVES: Block = Block {
        id: 28,
        name: "mangrove_leaves",
        item_id: Some(24),
    };
    pub const NETHER_WART_BLOCK: Block = Block {
        id: 29,
        name: "nether_wart_block",
        item_id: Some(25),
    };
    pub const WARPED_WART_BLOCK: Block = Block {
        id: 30,
        name: "warped_wart_block",
        item_id: Some(26),
    };
    pub const VINE: Block = Block {
        id: 31,
        name: "vine",
        item_id: Some(27),
    };

    #[inline]
    pub fn from_id(id: u16) -> Option<&'static Block> {
        BLOCKS_BY_ID.get(id as usize).copied()
    }

    /// Accepts both `minecraft:oak_log` and `oak_log`.
    pub fn from_registry_key(key: &str) -> Option<&'static Block> {
        BLOCKS.get(strip_vanilla_namespace(key)).copied()
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.id == Self::AIR.id
    }

    pub fn to_item(&self) -> Option<&'static Item> {
        self.item_id.and_then(Item::from_id)
    }
}

static BLOCKS_BY_ID: &[&Block] = &[
    &Block::AIR,
    &Block::STONE,
    &Block::GRASS_BLOCK,
    &Block::DIRT,
    &Block::BEDROCK,
    &Block::WATER,
    &Block::LAVA,
    &Block::FIRE,
    &Block::OAK_PLANKS,
    &Block::OAK_LOG,
    &Block::SPRUCE_LOG,
    &Block::BIRCH_LOG,
    &Block::JUNGLE_LOG,
    &Block::ACACIA_LOG,
    &Block::CHERRY_LOG,
    &Block::DARK_OAK_LOG,
    &Block::PALE_OAK_LOG,
    &Block::MANGROVE_LOG,
    &Block::CRIMSON_STEM,
    &Block::WARPED_STEM,
    &Block::OAK_LEAVES,
    &Block::SPRUCE_LEAVES,
    &Block::BIRCH_LEAVES,
    &Block::JUNGLE_LEAVES,
    &Block::ACACIA_LEAVES,
    &Block::CHERRY_LEAVES,
    &Block::DARK_OAK_LEAVES,
    &Block::PALE_OAK_LEAVES,
    &Block::MANGROVE_LEAVES,
    &Block::NETHER_WART_BLOCK,
    &Block::WARPED_WART_BLOCK,
    &Block::VINE,
];

static BLOCKS: phf::Map<&'static str, &'static Block> = phf::phf_map! {
    "air" => &Block::AIR,
    "stone" => &Block::STONE,
    "grass_block" => &Block::GRASS_BLOCK,
    "dirt" => &Block::DIRT,
    "bedrock" => &Block::BEDROCK,
    "water" => &Block::WATER,
    "lava" => &Block::LAVA,
    "fire" => &Block::FIRE,
    "oak_planks" => &Block::OAK_PLANKS,
    "oak_log" => &Block::OAK_LOG,
    "spruce_log" => &Block::SPRUCE_LOG,
    "birch_log" => &Block::BIRCH_LOG,
    "jungle_log" => &Block::JUNGLE_LOG,
    "acacia_log" => &Block::ACACIA_LOG,
    "cherry_log" => &Block::CHERRY_LOG,
    "dark_oak_log" => &Block::DARK_OAK_LOG,
    "pale_oak_log" => &Block::PALE_OAK_LOG,
    "mangrove_log" => &Block::MANGROVE_LOG,
    "crimson_stem" => &Block::CRIMSON_STEM,
    "warped_stem" => &Block::WARPED_STEM,
    "oak_leaves" => &Block::OAK_LEAVES,
    "spruce_leaves" => &Block::SPRUCE_LEAVES,
    "birch_leaves" => &Block::BIRCH_LEAVES,
    "jungle_leaves" => &Block::JUNGLE_LEAVES,
    "acacia_leaves" => &Block::ACACIA_LEAVES,
    "cherry_leaves" => &Block::CHERRY_LEAVES,
    "dark_oak_leaves" => &Block::DARK_OAK_LEAVES,
    "pale_oak_leaves" => &Block::PALE_OAK_LEAVES,
    "mangrove_leaves" => &Block::MANGROVE_LEAVES,
    "nether_wart_block" => &Block::NETHER_WART_BLOCK,
    "warped_wart_block" => &Block::WARPED_WART_BLOCK,
    "vine" => &Block::VINE,
};

#[cfg(test)]
mod tests {
    use super::Block;

    #[test]
    fn ids_match_table_positions() {
        for id in 0..u16::MAX {
            match Block::from_id(id) {
                Some(block) => assert_eq!(block.id, id, "{} is out of place", block.name),
                None => break,
            }
        }
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(Block::from_registry_key("minecraft:oak_log"), Some(&Block::OAK_LOG));
        assert_eq!(Block::from_registry_key("birch_leaves"), Some(&Block::BIRCH_LEAVES));
        assert_eq!(Block::from_registry_key("custom:oak_log"), None);
        assert_eq!(Block::from_registry_key("this_block_does_not_exist"), None);
    }

    #[test]
    fn item_forms() {
        assert_eq!(Block::OAK_LOG.to_item().map(|item| item.name), Some("oak_log"));
        assert!(Block::WATER.to_item().is_none());
        assert!(Block::AIR.is_air());
        assert!(!Block::STONE.is_air());
    }
}
