/// Tool enchantments. Only Unbreaking changes how a tool wears while felling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Enchantment {
    Efficiency,
    Fortune,
    Unbreaking,
}
