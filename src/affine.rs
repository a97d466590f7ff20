//! Local-to-world transforms.

use core::ops::Mul;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::{Point, Point3};
use crate::scalar;

/// Maps points and directions from a spline's local space into world space and back.
pub trait Transform<P: Point> {
    /// Transform a position (translation, rotation and scale apply).
    fn to_world(&self, point: P) -> P;

    /// Transform a direction: rotation and scale apply, translation does not.
    ///
    /// The default transforms the vector as a point and subtracts the transformed origin.
    fn to_world_direction(&self, vector: P) -> P {
        self.to_world(vector) - self.to_world(P::default())
    }

    /// Map a world position back into local space, `None` if the transform is singular.
    fn to_local(&self, point: P) -> Option<P>;
}

/// The transform of an object sitting at the world origin, unrotated and unscaled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity;

impl<P: Point> Transform<P> for Identity {
    #[inline]
    fn to_world(&self, point: P) -> P {
        point
    }

    #[inline]
    fn to_world_direction(&self, vector: P) -> P {
        vector
    }

    #[inline]
    fn to_local(&self, point: P) -> Option<P> {
        Some(point)
    }
}

/// A 3D affine transform: a 3x3 linear part (row-major) followed by a translation.
///
/// Works on any [`Point3`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Affine3<T> {
    linear: [[T; 3]; 3],
    translation: [T; 3],
}

impl<T: Float> Affine3<T> {
    /// Construct an affine transform from its linear part and translation.
    #[inline]
    pub fn new(linear: [[T; 3]; 3], translation: [T; 3]) -> Self {
        Affine3 {
            linear,
            translation,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Affine3::scale(T::one())
    }

    /// An affine transform representing translation.
    #[inline]
    pub fn translate(offset: [T; 3]) -> Self {
        let mut affine = Affine3::identity();
        affine.translation = offset;
        affine
    }

    /// An affine transform representing uniform scaling.
    #[inline]
    pub fn scale(s: T) -> Self {
        Affine3::scale_non_uniform([s, s, s])
    }

    /// An affine transform scaling each axis separately.
    #[inline]
    pub fn scale_non_uniform(s: [T; 3]) -> Self {
        let o = T::zero();
        Affine3::new([[s[0], o, o], [o, s[1], o], [o, o, s[2]]], [o, o, o])
    }

    /// Rotation by `angle` radians around the x axis (right-handed).
    pub fn rotate_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Affine3::new([[l, o, o], [o, c, -s], [o, s, c]], [o, o, o])
    }

    /// Rotation by `angle` radians around the y axis (right-handed).
    pub fn rotate_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Affine3::new([[c, o, s], [o, l, o], [-s, o, c]], [o, o, o])
    }

    /// Rotation by `angle` radians around the z axis (right-handed).
    pub fn rotate_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Affine3::new([[c, -s, o], [s, c, o], [o, o, l]], [o, o, o])
    }

    /// Rotation given by a quaternion `[x, y, z, w]`. The quaternion is normalized first;
    /// a zero quaternion gives the identity.
    pub fn from_quaternion(q: [T; 4]) -> Self {
        let len = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
        if len.is_nan() || len <= T::zero() {
            return Affine3::identity();
        }
        let (x, y, z, w) = (q[0] / len, q[1] / len, q[2] / len, q[3] / len);
        let two: T = scalar(2.0);
        let l = T::one();
        let o = T::zero();
        Affine3::new(
            [
                [l - two * (y * y + z * z), two * (x * y - z * w), two * (x * z + y * w)],
                [two * (x * y + z * w), l - two * (x * x + z * z), two * (y * z - x * w)],
                [two * (x * z - y * w), two * (y * z + x * w), l - two * (x * x + y * y)],
            ],
            [o, o, o],
        )
    }

    /// Compose translation, rotation and scale the way scene graphs do:
    /// scale first, then rotate, then translate.
    pub fn from_trs(translation: [T; 3], rotation: [T; 4], scale: [T; 3]) -> Self {
        Affine3::translate(translation)
            * Affine3::from_quaternion(rotation)
            * Affine3::scale_non_uniform(scale)
    }

    /// Returns `other * self`: `self` applied first, then `other`.
    #[inline]
    pub fn then(self, other: Affine3<T>) -> Self {
        other * self
    }

    #[inline]
    pub fn linear(&self) -> [[T; 3]; 3] {
        self.linear
    }

    #[inline]
    pub fn translation(&self) -> [T; 3] {
        self.translation
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> T {
        let m = &self.linear;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// The inverse transform, `None` when the linear part is singular (e.g. a zero scale axis).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            return None;
        }
        let m = &self.linear;
        let inv_det = det.recip();
        // adjugate (transposed cofactors) divided by the determinant
        let linear = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ];
        let t = self.translation;
        let mut translation = [T::zero(); 3];
        for (i, row) in linear.iter().enumerate() {
            translation[i] = -(row[0] * t[0] + row[1] * t[1] + row[2] * t[2]);
        }
        Some(Affine3::new(linear, translation))
    }

    #[inline]
    fn apply_linear(&self, v: [T; 3]) -> [T; 3] {
        let m = &self.linear;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Transform a position given as any three-axis point.
    pub fn transform_point<P>(&self, point: P) -> P
    where
        P: Point3<Scalar = T>,
    {
        let v = self.apply_linear([point[0], point[1], point[2]]);
        let mut out = point;
        for i in 0..3 {
            out[i] = v[i] + self.translation[i];
        }
        out
    }

    /// Transform a direction given as any three-axis point (translation is ignored).
    pub fn transform_vector<P>(&self, vector: P) -> P
    where
        P: Point3<Scalar = T>,
    {
        let v = self.apply_linear([vector[0], vector[1], vector[2]]);
        let mut out = vector;
        for i in 0..3 {
            out[i] = v[i];
        }
        out
    }
}

impl<T: Float> Default for Affine3<T> {
    #[inline]
    fn default() -> Self {
        Affine3::identity()
    }
}

impl<T: Float> Mul for Affine3<T> {
    type Output = Affine3<T>;

    /// `(a * b)` applies `b` first, then `a`.
    fn mul(self, other: Affine3<T>) -> Affine3<T> {
        let mut linear = [[T::zero(); 3]; 3];
        for (i, row) in linear.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.linear[i][0] * other.linear[0][j]
                    + self.linear[i][1] * other.linear[1][j]
                    + self.linear[i][2] * other.linear[2][j];
            }
        }
        let moved = self.apply_linear(other.translation);
        let translation = [
            moved[0] + self.translation[0],
            moved[1] + self.translation[1],
            moved[2] + self.translation[2],
        ];
        Affine3::new(linear, translation)
    }
}

impl<T, P> Transform<P> for Affine3<T>
where
    T: Float,
    P: Point3<Scalar = T>,
{
    #[inline]
    fn to_world(&self, point: P) -> P {
        self.transform_point(point)
    }

    #[inline]
    fn to_world_direction(&self, vector: P) -> P {
        self.transform_vector(vector)
    }

    fn to_local(&self, point: P) -> Option<P> {
        self.inverse().map(|inv| inv.transform_point(point))
    }
}
