use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Math + Copy> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Math + Copy> Add for Vector3<T> {
    type Output = Vector3<T>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: Math + Copy> Sub for Vector3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: Math + Copy> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    #[inline(always)]
    fn from((x, y, z): (T, T, T)) -> Self {
        Vector3 { x, y, z }
    }
}

pub trait Math:
    Mul<Output = Self> + Neg<Output = Self> + Add<Output = Self> + Sub<Output = Self> + Sized
{
}
impl Math for f64 {}
impl Math for f32 {}
impl Math for i32 {}
impl Math for i64 {}

#[cfg(test)]
mod tests {
    use super::Vector3;

    #[test]
    fn add_and_sub_are_component_wise() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(-4, 5, 0);
        assert_eq!(a + b, Vector3::new(-3, 7, 3));
        assert_eq!(a - b, Vector3::new(5, -3, 3));
        assert_eq!(-a, Vector3::new(-1, -2, -3));
    }

    #[test]
    fn tuples_convert_in_order() {
        let offset: Vector3<i32> = (1, -1, 0).into();
        assert_eq!(offset, Vector3::new(1, -1, 0));
    }
}
