use timber_data::{Enchantment, Item};

#[derive(Clone, Debug, PartialEq)]
pub struct ItemStack {
    pub item_count: u8,
    pub item: &'static Item,
    /// Durability used up so far. The stack breaks when this reaches the item's `max_damage`.
    pub damage: i32,
    pub unbreakable: bool,
    pub enchantments: Vec<(Enchantment, i32)>,
}

impl ItemStack {
    pub const EMPTY: ItemStack = ItemStack {
        item_count: 0,
        item: &Item::AIR,
        damage: 0,
        unbreakable: false,
        enchantments: Vec::new(),
    };

    #[must_use]
    pub fn new(item_count: u8, item: &'static Item) -> Self {
        Self {
            item_count,
            item,
            damage: 0,
            unbreakable: false,
            enchantments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Enchantment, level: i32) -> Self {
        self.enchant(enchantment, level);
        self
    }

    #[must_use]
    pub fn unbreakable(mut self) -> Self {
        self.unbreakable = true;
        self
    }

    /// Sets the level of `enchantment`, replacing any previous level.
    pub fn enchant(&mut self, enchantment: Enchantment, level: i32) {
        match self.enchantments.iter_mut().find(|(e, _)| *e == enchantment) {
            Some((_, current)) => *current = level,
            None => self.enchantments.push((enchantment, level)),
        }
    }

    /// 0 if the stack doesn't carry `enchantment`.
    pub fn enchantment_level(&self, enchantment: Enchantment) -> i32 {
        self.enchantments
            .iter()
            .find(|(e, _)| *e == enchantment)
            .map_or(0, |(_, level)| *level)
    }

    pub fn max_damage(&self) -> Option<i32> {
        self.item.max_damage
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item == &Item::AIR
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }
}
