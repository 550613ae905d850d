use crate::strip_vanilla_namespace;
use std::hash::{Hash, Hasher};

#[derive(Debug)]
pub struct Item {
    pub id: u16,
    pub name: &'static str,
    pub max_stack_size: u8,
    /// Durability. `None` for items that cannot be damaged.
    pub max_damage: Option<i32>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Item {
    /// Fills empty slots. Not registered under any key.
    pub const AIR: Item = Item {
        id: 37,
        name: "air",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const STONE: Item = Item {
        id: 0,
        name: "stone",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const GRASS_BLOCK: Item = Item {
        id: 1,
        name: "grass_block",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const DIRT: Item = Item {
        id: 2,
        name: "dirt",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const BEDROCK: Item = Item {
        id: 3,
        name: "bedrock",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const OAK_PLANKS: Item = Item {
        id: 4,
        name: "oak_planks",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const OAK_LOG: Item = Item {
        id: 5,
        name: "oak_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const SPRUCE_LOG: Item = Item {
        id: 6,
        name: "spruce_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const BIRCH_LOG: Item = Item {
        id: 7,
        name: "birch_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const JUNGLE_LOG: Item = Item {
        id: 8,
        name: "jungle_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const ACACIA_LOG: Item = Item {
        id: 9,
        name: "acacia_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const CHERRY_LOG: Item = Item {
        id: 10,
        name: "cherry_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const DARK_OAK_LOG: Item = Item {
        id: 11,
        name: "dark_oak_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const PALE_OAK_LOG: Item = Item {
        id: 12,
        name: "pale_oak_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const MANGROVE_LOG: Item = Item {
        id: 13,
        name: "mangrove_log",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const CRIMSON_STEM: Item = Item {
        id: 14,
        name: "crimson_stem",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const WARPED_STEM: Item = Item {
        id: 15,
        name: "warped_stem",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const OAK_LEAVES: Item = Item {
        id: 16,
        name: "oak_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const SPRUCE_LEAVES: Item = Item {
        id: 17,
        name: "spruce_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const BIRCH_LEAVES: Item = Item {
        id: 18,
        name: "birch_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const JUNGLE_LEAVES: Item = Item {
        id: 19,
        name: "jungle_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const ACACIA_LEAVES: Item = Item {
        id: 20,
        name: "acacia_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const CHERRY_LEAVES: Item = Item {
        id: 21,
        name: "cherry_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const DARK_OAK_LEAVES: Item = Item {
        id: 22,
        name: "dark_oak_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const PALE_OAK_LEAVES: Item = Item {
        id: 23,
        name: "pale_oak_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const MANGROVE_LEAVES: Item = Item {
        id: 24,
        name: "mangrove_leaves",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const NETHER_WART_BLOCK: Item = Item {
        id: 25,
        name: "nether_wart_block",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const WARPED_WART_BLOCK: Item = Item {
        id: 26,
        name: "warped_wart_block",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const VINE: Item = Item {
        id: 27,
        name: "vine",
        max_stack_size: 64,
        max_damage: None,
    };
    pub const WOODEN_AXE: Item = Item {
        id: 28,
        name: "wooden_axe",
        max_stack_size: 1,
        max_damage: Some(59),
    };
    pub const STONE_AXE: Item = Item {
        id: 29,
        name: "stone_axe",
        max_stack_size: 1,
        max_damage: Some(131),
    };
    pub const IRON_AXE: Item = Item {
        id: 30,
        name: "iron_axe",
        max_stack_size: 1,
        max_damage: Some(250),
    };
    pub const GOLDEN_AXE: Item = Item {
        id: 31,
        name: "golden_axe",
        max_stack_size: 1,
        max_damage: Some(32),
    };
    pub const DIAMOND_AXE: Item = Item {
        id: 32,
        name: "diamond_axe",
        max_stack_size: 1,
        max_damage: Some(1561),
    };
    pub const NETHERITE_AXE: Item = Item {
        id: 33,
        name: "netherite_axe",
        max_stack_size: 1,
        max_damage: Some(2031),
    };
    pub const IRON_PICKAXE: Item = Item {
        id: 34,
        name: "iron_pickaxe",
        max_stack_size: 1,
        max_damage: Some(250),
    };
    pub const SHEARS: Item = Item {
        id: 35,
        name: "shears",
        max_stack_size: 1,
        max_damage: Some(238),
    };
    pub const STICK: Item = Item {
        id: 36,
        name: "stick",
        max_stack_size: 64,
        max_damage: None,
    };

    #[inline]
    pub fn from_id(id: u16) -> Option<&'static Item> {
        ITEMS_BY_ID.get(id as usize).copied()
    }

    /// Accepts both `minecraft:diamond_axe` and `diamond_axe`.
    pub fn from_registry_key(key: &str) -> Option<&'static Item> {
        ITEMS.get(strip_vanilla_namespace(key)).copied()
    }
}

static ITEMS_BY_ID: &[&Item] = &[
    &Item::STONE,
    &Item::GRASS_BLOCK,
    &Item::DIRT,
    &Item::BEDROCK,
    &Item::OAK_PLANKS,
    &Item::OAK_LOG,
    &Item::SPRUCE_LOG,
    &Item::BIRCH_LOG,
    &Item::JUNGLE_LOG,
    &Item::ACACIA_LOG,
    &Item::CHERRY_LOG,
    &Item::DARK_OAK_LOG,
    &Item::PALE_OAK_LOG,
    &Item::MANGROVE_LOG,
    &Item::CRIMSON_STEM,
    &Item::WARPED_STEM,
    &Item::OAK_LEAVES,
    &Item::SPRUCE_LEAVES,
    &Item::BIRCH_LEAVES,
    &Item::JUNGLE_LEAVES,
    &Item::ACACIA_LEAVES,
    &Item::CHERRY_LEAVES,
    &Item::DARK_OAK_LEAVES,
    &Item::PALE_OAK_LEAVES,
    &Item::MANGROVE_LEAVES,
    &Item::NETHER_WART_BLOCK,
    &Item::WARPED_WART_BLOCK,
    &Item::VINE,
    &Item::WOODEN_AXE,
    &Item::STONE_AXE,
    &Item::IRON_AXE,
    &Item::GOLDEN_AXE,
    &Item::DIAMOND_AXE,
    &Item::NETHERITE_AXE,
    &Item::IRON_PICKAXE,
    &Item::SHEARS,
    &Item::STICK,
    &Item::AIR,
];

static ITEMS: phf::Map<&'static str, &'static Item> = phf::phf_map! {
    "stone" => &Item::STONE,
    "grass_block" => &Item::GRASS_BLOCK,
    "dirt" => &Item::DIRT,
    "bedrock" => &Item::BEDROCK,
    "oak_planks" => &Item::OAK_PLANKS,
    "oak_log" => &Item::OAK_LOG,
    "spruce_log" => &Item::SPRUCE_LOG,
    "birch_log" => &Item::BIRCH_LOG,
    "jungle_log" => &Item::JUNGLE_LOG,
    "acacia_log" => &Item::ACACIA_LOG,
    "cherry_log" => &Item::CHERRY_LOG,
    "dark_oak_log" => &Item::DARK_OAK_LOG,
    "pale_oak_log" => &Item::PALE_OAK_LOG,
    "mangrove_log" => &Item::MANGROVE_LOG,
    "crimson_stem" => &Item::CRIMSON_STEM,
    "warped_stem" => &Item::WARPED_STEM,
    "oak_leaves" => &Item::OAK_LEAVES,
    "spruce_leaves" => &Item::SPRUCE_LEAVES,
    "birch_leaves" => &Item::BIRCH_LEAVES,
    "jungle_leaves" => &Item::JUNGLE_LEAVES,
    "acacia_leaves" => &Item::ACACIA_LEAVES,
    "cherry_leaves" => &Item::CHERRY_LEAVES,
    "dark_oak_leaves" => &Item::DARK_OAK_LEAVES,
    "pale_oak_leaves" => &Item::PALE_OAK_LEAVES,
    "mangrove_leaves" => &Item::MANGROVE_LEAVES,
    "nether_wart_block" => &Item::NETHER_WART_BLOCK,
    "warped_wart_block" => &Item::WARPED_WART_BLOCK,
    "vine" => &Item::VINE,
    "wooden_axe" => &Item::WOODEN_AXE,
    "stone_axe" => &Item::STONE_AXE,
    "iron_axe" => &Item::IRON_AXE,
    "golden_axe" => &Item::GOLDEN_AXE,
    "diamond_axe" => &Item::DIAMOND_AXE,
    "netherite_axe" => &Item::NETHERITE_AXE,
    "iron_pickaxe" => &Item::IRON_PICKAXE,
    "shears" => &Item::SHEARS,
    "stick" => &Item::STICK,
};
