//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to use `nalgebra::SVector<T, D>`
//! as spline control points. Add `nalgebra` as a direct dependency to construct the vectors
//! in your own code.
//!
//! # Example
//! ```rust,no_run
//! use nalgebra::Vector3;
//! use bezier_spline::{Affine3, BezierSpline};
//!
//! let mut spline: BezierSpline<Vector3<f32>> = BezierSpline::new();
//! spline.add_segment();
//! spline.set_control_point(4, Vector3::new(4.0, 2.0, 0.0));
//!
//! let spline = spline.with_transform(Affine3::translate([0.0, 1.0, 0.0]));
//! let mid = spline.point(0.5);
//! # let _ = mid;
//! ```
//!
//! The scalar type must satisfy `nalgebra::RealField` and `num_traits::Float`
//! (e.g. `f32` or `f64`).

use nalgebra::{RealField, SVector};
use num_traits::Float;

use crate::point::{Point, Point3, PointDot, PointIndex, PointNorm};

// `SVector<T, D>: Default` only holds for concrete dimensions, so every impl repeats it.
impl<T, const D: usize> Point for SVector<T, D>
where
    T: RealField + Float + Default,
    SVector<T, D>: Default,
{
    type Scalar = T;
    const DIM: usize = D;
}

impl<T, const D: usize> PointIndex for SVector<T, D>
where
    T: RealField + Float + Default,
    SVector<T, D>: Default,
{
}

impl<T> Point3 for SVector<T, 3> where T: RealField + Float + Default {}

impl<T, const D: usize> PointNorm for SVector<T, D>
where
    T: RealField + Float + Default,
    SVector<T, D>: Default,
{
    fn squared_norm(&self) -> T {
        nalgebra::Matrix::dot(self, self)
    }
}

impl<T, const D: usize> PointDot for SVector<T, D>
where
    T: RealField + Float + Default,
    SVector<T, D>: Default,
{
    fn dot(&self, other: &Self) -> T {
        nalgebra::Matrix::dot(self, other)
    }
}
