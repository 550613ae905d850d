//! Which trunk blocks count as logs, and which leaves belong to each of them.

use crate::Block;

/// Leaves grown by each log species. Nether stems count as logs and their
/// wart blocks play the role of leaves.
static LEAVES_BY_LOG: phf::Map<&'static str, &'static Block> = phf::phf_map! {
    "oak_log" => &Block::OAK_LEAVES,
    "spruce_log" => &Block::SPRUCE_LEAVES,
    "birch_log" => &Block::BIRCH_LEAVES,
    "jungle_log" => &Block::JUNGLE_LEAVES,
    "acacia_log" => &Block::ACACIA_LEAVES,
    "cherry_log" => &Block::CHERRY_LEAVES,
    "dark_oak_log" => &Block::DARK_OAK_LEAVES,
    "pale_oak_log" => &Block::PALE_OAK_LEAVES,
    "mangrove_log" => &Block::MANGROVE_LEAVES,
    "crimson_stem" => &Block::NETHER_WART_BLOCK,
    "warped_stem" => &Block::WARPED_WART_BLOCK,
};

/// The leaf block of the same species as `log`, or `None` if `log` is not a log.
#[inline]
pub fn leaves_for_log(log: &Block) -> Option<&'static Block> {
    LEAVES_BY_LOG.get(log.name).copied()
}

#[cfg(test)]
mod tests {
    use super::leaves_for_log;
    use crate::Block;

    #[test]
    fn species_are_matched_exactly() {
        assert_eq!(leaves_for_log(&Block::OAK_LOG), Some(&Block::OAK_LEAVES));
        assert_eq!(leaves_for_log(&Block::DARK_OAK_LOG), Some(&Block::DARK_OAK_LEAVES));
        assert_eq!(leaves_for_log(&Block::WARPED_STEM), Some(&Block::WARPED_WART_BLOCK));
        assert_ne!(leaves_for_log(&Block::BIRCH_LOG), Some(&Block::OAK_LEAVES));
    }

    #[test]
    fn non_logs() {
        assert_eq!(leaves_for_log(&Block::SPRUCE_LEAVES), None);
        assert_eq!(leaves_for_log(&Block::OAK_PLANKS), None);
        assert_eq!(leaves_for_log(&Block::AIR), None);
        assert_eq!(leaves_for_log(&Block::STONE), None);
    }
}
