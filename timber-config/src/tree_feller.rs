use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TreeFellerConfig {
    /// Registry keys of the items that fell a whole tree, e.g. `minecraft:diamond_axe`.
    pub tools: Vec<String>,
    /// Soft limit on felled logs. The sign is ignored.
    pub log_limit: i32,
    pub pop_leaves: bool,
    /// Half-width of the cube searched for leaves around every felled log. The sign is ignored.
    pub leaf_radius: i32,
}

impl Default for TreeFellerConfig {
    fn default() -> Self {
        Self {
            tools: vec!["minecraft:golden_axe".to_string()],
            log_limit: 250,
            pop_leaves: true,
            leaf_radius: 3,
        }
    }
}
