use core::fmt::Debug;
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use num_traits::Float;

use super::point::{Point, Point3, PointDot, PointIndex, PointNorm};

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array
/// see book or https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the point traits, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) traits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub const fn new(array: [T; N]) -> Self {
        PointN(array)
    }

    /// Returns the underlying coordinate array.
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

impl<T: Copy> PointN<T, 3> {
    pub fn x(&self) -> T {
        self.0[0]
    }

    pub fn y(&self) -> T {
        self.0[1]
    }

    pub fn z(&self) -> T {
        self.0[2]
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Mul<T> for PointN<T, N>
where
    // The multiplication is done by multiplying T * T => T per component
    T: Mul<Output = T> + Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: T) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = res.0[i] * rhs;
        }
        res
    }
}

/// This is not required by the Point trait or library but
/// convenient if you want to use the type externally
impl<T, const N: usize> Neg for PointN<T, N>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Self;

    fn neg(self) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = -self.0[i];
        }
        res
    }
}

impl<T, const N: usize> Index<usize> for PointN<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for PointN<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = N;
}

impl<T, const N: usize> PointIndex for PointN<T, N> where T: Float + Default + Debug {}

impl<T> Point3 for PointN<T, 3> where T: Float + Default + Debug {}

impl<T, const N: usize> PointNorm for PointN<T, N>
where
    T: Float + Default + Debug,
{
    fn squared_norm(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, x| acc + *x * *x)
    }
}

impl<T, const N: usize> PointDot for PointN<T, N>
where
    T: Float + Default + Debug,
{
    fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::PointN;

    // Const-generic arrays have no serde impls, so points go through a tuple of N scalars.
    impl<T: Serialize, const N: usize> Serialize for PointN<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tup = serializer.serialize_tuple(N)?;
            for value in self.0.iter() {
                tup.serialize_element(value)?;
            }
            tup.end()
        }
    }

    struct PointVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T, const N: usize> Visitor<'de> for PointVisitor<T, N>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        type Value = PointN<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} coordinates", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut coords = [T::default(); N];
            for (i, coord) in coords.iter_mut().enumerate() {
                *coord = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            Ok(PointN(coords))
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for PointN<T, N>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, PointVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = PointN::new([1.0, 2.0, 3.0]);
        let b = PointN::new([0.5, -1.0, 4.0]);
        assert_eq!(a + b, PointN::new([1.5, 1.0, 7.0]));
        assert_eq!(a - b, PointN::new([0.5, 3.0, -1.0]));
        assert_eq!(a * 2.0, PointN::new([2.0, 4.0, 6.0]));
        assert_eq!(-a, PointN::new([-1.0, -2.0, -3.0]));
    }

    #[test]
    fn norm_and_dot() {
        let v = PointN::new([3.0f64, 4.0, 0.0]);
        assert!((v.norm() - 5.0).abs() < EPSILON);
        assert!((v.dot(&PointN::new([1.0, 1.0, 1.0])) - 7.0).abs() < EPSILON);

        let unit = v.normalize_or_none().unwrap();
        assert!((unit - PointN::new([0.6, 0.8, 0.0])).squared_norm() < EPSILON);
        assert!(PointN::<f64, 3>::default().normalize_or_none().is_none());
    }

    #[test]
    fn index_access() {
        let mut p = PointN::new([1.0f32, 2.0, 3.0]);
        p[1] = 5.0;
        assert_eq!(p.y(), 5.0);
        assert_eq!(p.into_iter().sum::<f32>(), 9.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_sequence() {
        let p = PointN::new([1.0f64, -2.0, 0.5]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,-2.0,0.5]");
        let back: PointN<f64, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<PointN<f64, 3>>("[1.0,2.0]").is_err());
    }
}
