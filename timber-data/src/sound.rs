#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    EntityItemBreak,
}

impl Sound {
    pub const fn to_name(&self) -> &'static str {
        match self {
            Self::EntityItemBreak => "entity.item.break",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCategory {
    Players,
}

impl SoundCategory {
    pub const fn to_name(&self) -> &'static str {
        match self {
            Self::Players => "players",
        }
    }
}
