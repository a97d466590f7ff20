//! Chains of cubic Bezier curves for 3D scene editing.
//!
//! A [`BezierSpline`] owns an ordered list of control points that describe
//! consecutive cubic segments sharing their endpoints. A global parameter
//! `t` in `[0, 1]` is mapped onto one segment and evaluated there; results are
//! carried into world space by the spline's [`Transform`].
//!
//! Points are generic: anything implementing the small [`Point`] trait works.
//! [`PointN`] is a ready-made const-generic point, and the `nalgebra` feature
//! adds impls for `nalgebra::SVector`.
//!
//! ```rust
//! use bezier_spline::{BezierSpline, PointN};
//!
//! let mut spline: BezierSpline<PointN<f64, 3>> = BezierSpline::new();
//! assert_eq!(spline.point_count(), 4);
//! assert_eq!(spline.point(0.0), PointN::new([1.0, 0.0, 0.0]));
//! assert_eq!(spline.point(1.0), PointN::new([4.0, 0.0, 0.0]));
//!
//! spline.add_segment();
//! assert_eq!(spline.segment_count(), 2);
//! ```
#![no_std]

extern crate alloc;

pub mod adapters;
pub mod affine;
pub mod bezier_spline;
pub mod cubic_bezier;
pub mod display;
pub mod editing;
pub mod error;
pub mod point;
pub mod point_generic;
pub mod spline;

pub use affine::{Affine3, Identity, Transform};
pub use bezier_spline::{BezierSpline, SegmentParameter};
pub use cubic_bezier::CubicBezier;
pub use display::DisplayOptions;
pub use editing::HandleSelection;
pub use error::SplineError;
pub use point::{Point, Point3, PointDot, PointIndex, PointNorm};
pub use point_generic::PointN;
pub use spline::Spline;

use num_traits::Float;

/// Tolerance used by the unit tests to compare points.
#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-10;

/// Convert an `f64` literal into the point's scalar type.
///
/// Only used for small constants (coefficients like `3.0` or `0.5`) which
/// every `Float` implementation can represent.
#[inline]
pub(crate) fn scalar<S: Float>(value: f64) -> S {
    S::from(value).unwrap_or_else(S::nan)
}
