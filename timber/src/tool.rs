//! How felling wears down the tool.

use timber_data::Enchantment;
use timber_util::random::RandomImpl;

use crate::item::ItemStack;

/// Chance that felling one log costs a point of durability.
///
/// Unbreaking works like vanilla: level `n` only lets `1 / (n + 1)` of the uses through.
/// Exempt players (creative and spectator), unbreakable stacks and items without
/// durability never take damage.
pub fn damage_chance(tool: &ItemStack, exempt: bool) -> f64 {
    if exempt || tool.unbreakable || tool.max_damage().is_none() {
        return 0.0;
    }
    let unbreaking = tool.enchantment_level(Enchantment::Unbreaking).max(0);
    1.0 / (1.0 + f64::from(unbreaking))
}

/// Rolls `chance` and applies one point of damage on success. A chance of 1 or more
/// always damages without drawing from `random`.
///
/// Returns `true` once the tool's damage has reached `max_damage`, i.e. the tool breaks.
pub fn damage_tool<R: RandomImpl + ?Sized>(
    tool: &mut ItemStack,
    chance: f64,
    max_damage: i32,
    random: &mut R,
) -> bool {
    if chance >= 1.0 || random.next_f64() < chance {
        tool.damage += 1;
    }
    tool.damage == max_damage
}

#[cfg(test)]
mod tests {
    use super::{damage_chance, damage_tool};
    use crate::item::ItemStack;
    use std::collections::VecDeque;
    use timber_data::{Enchantment, Item};
    use timber_util::random::RandomImpl;

    /// Hands out the given floats and counts the draws.
    struct Scripted {
        values: VecDeque<f64>,
        draws: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
                draws: 0,
            }
        }
    }

    impl RandomImpl for Scripted {
        fn next_i64(&mut self) -> i64 {
            unreachable!("only floats are scripted")
        }

        fn next_f64(&mut self) -> f64 {
            self.draws += 1;
            self.values.pop_front().expect("ran out of scripted values")
        }
    }

    #[test]
    fn chance_follows_unbreaking() {
        let axe = ItemStack::new(1, &Item::IRON_AXE);
        assert_eq!(damage_chance(&axe, false), 1.0);
        assert_eq!(
            damage_chance(&axe.clone().with_enchantment(Enchantment::Unbreaking, 1), false),
            0.5
        );
        assert_eq!(
            damage_chance(&axe.with_enchantment(Enchantment::Unbreaking, 3), false),
            0.25
        );
    }

    #[test]
    fn no_chance_without_wear() {
        let axe = ItemStack::new(1, &Item::IRON_AXE);
        assert_eq!(damage_chance(&axe, true), 0.0);
        assert_eq!(damage_chance(&axe.unbreakable(), false), 0.0);
        assert_eq!(damage_chance(&ItemStack::new(1, &Item::STICK), false), 0.0);
    }

    #[test]
    fn negative_unbreaking_counts_as_none() {
        let axe = ItemStack::new(1, &Item::IRON_AXE).with_enchantment(Enchantment::Unbreaking, -2);
        assert_eq!(damage_chance(&axe, false), 1.0);
    }

    #[test]
    fn certain_damage_skips_the_roll() {
        let mut axe = ItemStack::new(1, &Item::GOLDEN_AXE);
        let mut random = Scripted::new(&[]);
        assert!(!damage_tool(&mut axe, 1.0, 32, &mut random));
        assert_eq!(axe.damage, 1);
        assert_eq!(random.draws, 0);
    }

    #[test]
    fn roll_below_chance_damages() {
        let mut axe = ItemStack::new(1, &Item::GOLDEN_AXE);
        let mut random = Scripted::new(&[0.4, 0.6, 0.5]);
        damage_tool(&mut axe, 0.5, 32, &mut random);
        assert_eq!(axe.damage, 1);
        damage_tool(&mut axe, 0.5, 32, &mut random);
        assert_eq!(axe.damage, 1);
        // The bound is exclusive
        damage_tool(&mut axe, 0.5, 32, &mut random);
        assert_eq!(axe.damage, 1);
        assert_eq!(random.draws, 3);
    }

    #[test]
    fn breaks_at_max_damage() {
        let mut axe = ItemStack::new(1, &Item::GOLDEN_AXE).with_damage(30);
        let mut random = Scripted::new(&[]);
        assert!(!damage_tool(&mut axe, 1.0, 32, &mut random));
        assert!(damage_tool(&mut axe, 1.0, 32, &mut random));
        assert_eq!(axe.damage, 32);
    }

    #[test]
    fn zero_chance_never_damages() {
        let mut axe = ItemStack::new(1, &Item::GOLDEN_AXE).with_damage(31);
        let mut random = Scripted::new(&[0.0, 0.0]);
        assert!(!damage_tool(&mut axe, 0.0, 32, &mut random));
        assert!(!damage_tool(&mut axe, 0.0, 32, &mut random));
        assert_eq!(axe.damage, 31);
    }
}
