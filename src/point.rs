use core::fmt::Debug;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points P which themselves are generic over their Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing it requires mostly wrapping.
/// Keeping the trait as minimal as possible makes integration with other libraries easy;
/// everything that needs component access or norms asks for the extension traits below.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes, e.g. 3 for points in space.
    const DIM: usize;
}

/// Points whose components can be read and written by axis index `[0, 1, 2] -> [x, y, z]`.
pub trait PointIndex: Point + Index<usize, Output = Self::Scalar> + IndexMut<usize> {}

/// Points in three-dimensional space, `DIM == 3`.
///
/// Transforms that read `[x, y, z]` (such as [`Affine3`](crate::Affine3)) ask for this bound, so
/// pairing them with a point of another dimension is rejected at compile time:
///
/// ```rust,compile_fail
/// use bezier_spline::{Affine3, BezierSpline, PointN};
///
/// let flat: BezierSpline<PointN<f64, 2>, Affine3<f64>> =
///     BezierSpline::new_with_transform(Affine3::translate([1.0, 0.0, 0.0]));
/// flat.point(0.5);
/// ```
pub trait Point3: PointIndex {}

/// Points that can be interpreted as vectors with a length.
pub trait PointNorm: Point {
    /// Squared L2 norm of the point interpreted as a vector.
    fn squared_norm(&self) -> Self::Scalar;

    /// L2 norm of the point interpreted as a vector.
    fn norm(&self) -> Self::Scalar {
        self.squared_norm().sqrt()
    }

    /// Returns the vector scaled to unit length, or `None` if its length
    /// is zero or not finite.
    fn normalize_or_none(&self) -> Option<Self> {
        let len = self.norm();
        if len.is_finite() && len > Self::Scalar::zero() {
            Some(*self * len.recip())
        } else {
            None
        }
    }
}

/// Points which define an inner product.
pub trait PointDot: Point {
    fn dot(&self, other: &Self) -> Self::Scalar;
}
