use timber_util::math::vector3::Vector3;

/// The two vertical faces plus the eight compass directions of the horizontal plane.
#[derive(PartialEq, Clone, Copy, Debug, Hash, Eq)]
pub enum BlockDirection {
    Down,
    Up,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl BlockDirection {
    pub fn to_offset(&self) -> Vector3<i32> {
        match self {
            BlockDirection::Down => (0, -1, 0),
            BlockDirection::Up => (0, 1, 0),
            BlockDirection::North => (0, 0, -1),
            BlockDirection::NorthEast => (1, 0, -1),
            BlockDirection::East => (1, 0, 0),
            BlockDirection::SouthEast => (1, 0, 1),
            BlockDirection::South => (0, 0, 1),
            BlockDirection::SouthWest => (-1, 0, 1),
            BlockDirection::West => (-1, 0, 0),
            BlockDirection::NorthWest => (-1, 0, -1),
        }
        .into()
    }

    /// The eight same-level neighbors, clockwise from north.
    pub const fn horizontal() -> [BlockDirection; 8] {
        [
            BlockDirection::North,
            BlockDirection::NorthEast,
            BlockDirection::East,
            BlockDirection::SouthEast,
            BlockDirection::South,
            BlockDirection::SouthWest,
            BlockDirection::West,
            BlockDirection::NorthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::BlockDirection;
    use std::collections::HashSet;
    use timber_util::math::vector3::Vector3;

    #[test]
    fn horizontal_offsets_are_distinct_and_level() {
        let offsets: HashSet<_> = BlockDirection::horizontal()
            .iter()
            .map(BlockDirection::to_offset)
            .collect();
        assert_eq!(offsets.len(), 8);
        assert!(offsets.iter().all(|offset| offset.y == 0));
        assert!(offsets.iter().all(|offset| offset.x != 0 || offset.z != 0));
    }

    #[test]
    fn horizontal_starts_north_and_turns_clockwise() {
        let offsets = BlockDirection::horizontal().map(|direction| direction.to_offset());
        assert_eq!(offsets[0], Vector3::new(0, 0, -1));
        assert_eq!(offsets[2], Vector3::new(1, 0, 0));
        assert_eq!(offsets[4], Vector3::new(0, 0, 1));
        assert_eq!(offsets[6], Vector3::new(-1, 0, 0));
        assert_eq!(BlockDirection::Up.to_offset(), Vector3::new(0, 1, 0));
    }
}
