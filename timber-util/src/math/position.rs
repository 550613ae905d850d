use super::vector3::Vector3;
use std::fmt;
use std::hash::Hash;

/// Walks every position of a cuboid, x fastest, then y, then z.
pub struct BlockPosIterator {
    start_x: i32,
    start_y: i32,
    start_z: i32,
    size_x: usize,
    size_y: usize,
    index: usize,
    count: usize,
}

impl BlockPosIterator {
    pub fn new(
        start_x: i32,
        start_y: i32,
        start_z: i32,
        end_x: i32,
        end_y: i32,
        end_z: i32,
    ) -> Self {
        let size_x = span(start_x, end_x);
        let size_y = span(start_y, end_y);
        let size_z = span(start_z, end_z);
        BlockPosIterator {
            start_x,
            start_y,
            start_z,
            size_x,
            size_y,
            index: 0,
            count: size_x.saturating_mul(size_y).saturating_mul(size_z),
        }
    }
}

/// Number of coordinates in `start..=end`, 0 if `end < start`.
fn span(start: i32, end: i32) -> usize {
    usize::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(0)
}

impl Iterator for BlockPosIterator {
    type Item = BlockPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let x_offset = self.index % self.size_x;
        let y_offset = (self.index / self.size_x) % self.size_y;
        let z_offset = (self.index / self.size_x) / self.size_y;

        self.index += 1;
        Some(BlockPos::new(
            self.start_x.wrapping_add(x_offset as i32),
            self.start_y.wrapping_add(y_offset as i32),
            self.start_z.wrapping_add(z_offset as i32),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BlockPosIterator {}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Aka Block Position
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Iterates through all `BlockPos` within a cuboid region defined by two corner points,
    /// `start` and `end`. The iteration covers all blocks inclusively between the minimum
    /// and maximum coordinates of the two provided positions, so the corners may be given
    /// in any order.
    pub fn iterate(start: BlockPos, end: BlockPos) -> BlockPosIterator {
        BlockPosIterator::new(
            start.0.x.min(end.0.x),
            start.0.y.min(end.0.y),
            start.0.z.min(end.0.z),
            start.0.x.max(end.0.x),
            start.0.y.max(end.0.y),
            start.0.z.max(end.0.z),
        )
    }

    /// Every position of the cube with the given `radius` around `center`, center included.
    /// A negative radius counts as its absolute value. The cube is cut off at the edges of
    /// the `i32` coordinate range.
    pub fn iterate_cube(center: BlockPos, radius: i32) -> BlockPosIterator {
        let radius = i32::try_from(radius.unsigned_abs()).unwrap_or(i32::MAX);
        let Vector3 { x, y, z } = center.0;
        BlockPosIterator::new(
            x.saturating_sub(radius),
            y.saturating_sub(radius),
            z.saturating_sub(radius),
            x.saturating_add(radius),
            y.saturating_add(radius),
            z.saturating_add(radius),
        )
    }

    pub fn offset(&self, offset: Vector3<i32>) -> Self {
        BlockPos(self.0 + offset)
    }

    pub fn add(&self, x: i32, y: i32, z: i32) -> Self {
        BlockPos::new(self.0.x + x, self.0.y + y, self.0.z + z)
    }

    pub fn up(&self) -> Self {
        self.offset(Vector3::new(0, 1, 0))
    }

    pub fn up_height(&self, height: i32) -> Self {
        self.offset(Vector3::new(0, height, 0))
    }

    pub fn down(&self) -> Self {
        self.offset(Vector3::new(0, -1, 0))
    }

    pub fn manhattan_distance(&self, other: Self) -> i32 {
        let x = (other.0.x - self.0.x).abs();
        let y = (other.0.y - self.0.y).abs();
        let z = (other.0.z - self.0.z).abs();
        x + y + z
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::BlockPos;
    use std::collections::HashSet;

    #[test]
    fn iterate_is_inclusive_and_order_independent() {
        let a = BlockPos::new(2, 5, -1);
        let b = BlockPos::new(0, 4, 0);
        let forward: Vec<_> = BlockPos::iterate(a, b).collect();
        let backward: Vec<_> = BlockPos::iterate(b, a).collect();
        assert_eq!(forward.len(), 3 * 2 * 2);
        assert_eq!(forward, backward);
        assert_eq!(forward.first(), Some(&BlockPos::new(0, 4, -1)));
        assert_eq!(forward.last(), Some(&BlockPos::new(2, 5, 0)));
    }

    #[test]
    fn cube_has_no_duplicates() {
        let center = BlockPos::new(10, 64, -3);
        let cube: HashSet<_> = BlockPos::iterate_cube(center, 2).collect();
        assert_eq!(cube.len(), 125);
        assert!(cube.contains(&center));
        assert!(cube.contains(&center.add(-2, 2, -2)));
        assert!(!cube.contains(&center.add(3, 0, 0)));
    }

    #[test]
    fn zero_radius_cube_is_the_center() {
        let center = BlockPos::new(1, 2, 3);
        let mut cube = BlockPos::iterate_cube(center, 0);
        assert_eq!(cube.len(), 1);
        assert_eq!(cube.next(), Some(center));
        assert_eq!(cube.next(), None);
    }

    #[test]
    fn cube_stops_at_the_coordinate_limits() {
        let corner = BlockPos::new(i32::MAX, 0, i32::MIN);
        let cube: Vec<_> = BlockPos::iterate_cube(corner, 1).collect();
        assert_eq!(cube.len(), 2 * 3 * 2);
        assert!(cube.contains(&corner));
        assert!(cube.contains(&BlockPos::new(i32::MAX - 1, -1, i32::MIN + 1)));
    }

    #[test]
    fn negative_radius_is_mirrored() {
        let center = BlockPos::new(4, 4, 4);
        let mirrored: Vec<_> = BlockPos::iterate_cube(center, -2).collect();
        let cube: Vec<_> = BlockPos::iterate_cube(center, 2).collect();
        assert_eq!(mirrored, cube);
    }

    #[test]
    fn offsets() {
        let pos = BlockPos::new(0, 0, 0);
        assert_eq!(pos.up(), BlockPos::new(0, 1, 0));
        assert_eq!(pos.down(), BlockPos::new(0, -1, 0));
        assert_eq!(pos.up_height(5).manhattan_distance(pos), 5);
        assert_eq!(pos.to_string(), "0, 0, 0");
    }
}
