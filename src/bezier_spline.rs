//! A chain of cubic Bezier segments sharing their endpoints.

use core::slice;

use num_traits::{Float, One, ToPrimitive, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tinyvec::TinyVec;

use super::affine::{Identity, Transform};
use super::cubic_bezier::{self, CubicBezier};
use super::error::SplineError;
use super::point::{Point, PointIndex, PointNorm};
use super::scalar;
use super::spline::Spline;

/// Control points kept inline before the storage spills to the heap (five segments).
const INLINE_POINTS: usize = 16;

/// Segment selected for a global parameter, together with the parameter local to that segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParameter<S> {
    /// Index of the segment, its control points start at `3 * index`.
    pub index: usize,
    /// Parameter within the segment in `[0, 1]`.
    pub t: S,
}

impl<S> SegmentParameter<S> {
    /// Index of the first of the four control points of the segment.
    pub fn first_point(&self) -> usize {
        self.index * 3
    }
}

/// A piecewise cubic Bezier spline.
///
/// Segment `i` is defined by the control points `3i, 3i + 1, 3i + 2, 3i + 3`, so neighbouring
/// segments share one endpoint. That gives positional continuity only: the shared point and its
/// neighbours are not kept colinear.
///
/// The number of control points is always `3n + 1` with `n >= 1`. Points are stored in local
/// space; [`point`](BezierSpline::point), [`velocity`](BezierSpline::velocity) and
/// [`direction`](BezierSpline::direction) carry their results into world space through the
/// transform `X` of the owning object.
///
/// # Examples
/// ```rust
/// use bezier_spline::{Affine3, BezierSpline, PointN};
///
/// let spline = BezierSpline::from_points([
///     PointN::new([0.0, 0.0, 0.0]),
///     PointN::new([1.0, 1.0, 0.0]),
///     PointN::new([2.0, 1.0, 0.0]),
///     PointN::new([3.0, 0.0, 0.0]),
/// ])
/// .unwrap()
/// .with_transform(Affine3::translate([0.0, 0.0, 10.0]));
///
/// assert_eq!(spline.point(1.0), PointN::new([3.0, 0.0, 10.0]));
/// // directions ignore the translation
/// assert_eq!(spline.velocity(0.0), PointN::new([3.0, 3.0, 0.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSpline<P, X>",
        bound(
            serialize = "P: Serialize, X: Serialize",
            deserialize = "P: Deserialize<'de>, X: Deserialize<'de>"
        )
    )
)]
pub struct BezierSpline<P, X = Identity>
where
    P: Point,
{
    points: TinyVec<[P; INLINE_POINTS]>,
    transform: X,
}

fn check_point_count(len: usize) -> Result<(), SplineError> {
    if len < 4 || len % 3 != 1 {
        log::warn!("rejecting control point list of length {}", len);
        return Err(SplineError::InvalidPointCount { len });
    }
    Ok(())
}

impl<P> BezierSpline<P, Identity>
where
    P: PointIndex,
{
    /// Create a spline with a single segment along the local x axis:
    /// `(1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)`.
    pub fn new() -> Self {
        BezierSpline::new_with_transform(Identity)
    }
}

impl<P> BezierSpline<P, Identity>
where
    P: Point,
{
    /// Create a spline from explicit control points.
    /// Fails unless there are `3n + 1` points with `n >= 1`.
    pub fn from_points<I>(points: I) -> Result<Self, SplineError>
    where
        I: IntoIterator<Item = P>,
    {
        BezierSpline::from_points_with_transform(points, Identity)
    }
}

impl<P, X> BezierSpline<P, X>
where
    P: PointIndex,
{
    /// Create the default single-segment spline owned by an object with `transform`.
    pub fn new_with_transform(transform: X) -> Self {
        let mut spline = BezierSpline {
            points: TinyVec::new(),
            transform,
        };
        spline.reset();
        spline
    }

    /// Discard all control points and start over with the default single segment.
    pub fn reset(&mut self) {
        self.points.clear();
        self.points.push(Self::on_x_axis(1));
        self.add_segment();
        log::debug!("spline reset to a single segment");
    }

    /// Append a segment of three new control points.
    ///
    /// Every new point is placed at `(len + 1, 0, 0)` in local space, with `len` the number of
    /// points before it is pushed. The points are not continuous with the previous segment's
    /// tangent; callers are expected to move them afterwards.
    pub fn add_segment(&mut self) {
        for _ in 0..3 {
            let point = Self::on_x_axis(self.points.len() + 1);
            self.points.push(point);
        }
        log::debug!(
            "added segment, spline now has {} segments ({} points)",
            self.segment_count(),
            self.points.len()
        );
    }

    fn on_x_axis(x: usize) -> P {
        let mut point = P::default();
        point[0] = scalar(x as f64);
        point
    }
}

impl<P, X> BezierSpline<P, X>
where
    P: Point,
{
    /// Create a spline from explicit control points owned by an object with `transform`.
    pub fn from_points_with_transform<I>(points: I, transform: X) -> Result<Self, SplineError>
    where
        I: IntoIterator<Item = P>,
    {
        let points: TinyVec<[P; INLINE_POINTS]> = points.into_iter().collect();
        check_point_count(points.len())?;
        Ok(BezierSpline { points, transform })
    }

    /// Replace the transform, keeping the control points.
    pub fn with_transform<Y>(self, transform: Y) -> BezierSpline<P, Y> {
        BezierSpline {
            points: self.points,
            transform,
        }
    }

    pub fn transform(&self) -> &X {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: X) {
        self.transform = transform;
    }

    /// Number of control points, always `3 * segment_count() + 1`.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// All control points in local space.
    pub fn control_points(&self) -> &[P] {
        &self.points
    }

    /// Iterate over the control points in local space.
    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Return the control point at `index` in local space.
    ///
    /// # Panics
    /// Panics if `index >= point_count()`.
    pub fn control_point(&self, index: usize) -> P {
        self.points[index]
    }

    /// Overwrite the control point at `index` with a local-space position.
    ///
    /// # Panics
    /// Panics if `index >= point_count()`.
    pub fn set_control_point(&mut self, index: usize, point: P) {
        self.points[index] = point;
    }

    /// Like [`control_point`](Self::control_point), but reports a bad index as an error.
    pub fn try_control_point(&self, index: usize) -> Result<P, SplineError> {
        self.points
            .get(index)
            .copied()
            .ok_or(SplineError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    /// Like [`set_control_point`](Self::set_control_point), but reports a bad index as an error.
    pub fn try_set_control_point(&mut self, index: usize, point: P) -> Result<(), SplineError> {
        let len = self.points.len();
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(SplineError::IndexOutOfBounds { index, len }),
        }
    }

    /// Number of segments, computed as `point_count() / 3`.
    pub fn segment_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Return segment `index` as a standalone curve, `None` if there is no such segment.
    pub fn segment(&self, index: usize) -> Option<CubicBezier<P>> {
        let base = index.checked_mul(3)?;
        let window = self.points.get(base..base.checked_add(4)?)?;
        Some(CubicBezier::new(window[0], window[1], window[2], window[3]))
    }

    /// Iterate over all segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier<P>> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| CubicBezier::new(w[0], w[1], w[2], w[3]))
    }

    /// Remove the last segment (its three trailing control points).
    ///
    /// A spline never drops below one segment: with a single segment this is a no-op.
    /// Returns whether a segment was removed.
    pub fn remove_segment(&mut self) -> bool {
        if self.segment_count() <= 1 {
            log::debug!("not removing the only segment of the spline");
            return false;
        }
        let len = self.points.len();
        self.points.truncate(len - 3);
        log::debug!(
            "removed segment, spline now has {} segments ({} points)",
            self.segment_count(),
            self.points.len()
        );
        true
    }

    /// Map a global parameter onto a segment and the parameter local to it.
    ///
    /// For `t >= 1` the last segment (points `len - 4 ..= len - 1`) is selected with local
    /// `t = 1`. Otherwise `t` is clamped into `[0, 1]` (NaN counts as 0), scaled by
    /// [`segment_count`](Self::segment_count) and split into integer and fractional part.
    pub fn resolve(&self, t: P::Scalar) -> SegmentParameter<P::Scalar> {
        let one = P::Scalar::one();
        if t >= one {
            return SegmentParameter {
                index: (self.points.len() - 4) / 3,
                t: one,
            };
        }

        let count = self.segment_count();
        let count_native: P::Scalar = scalar(count as f64);
        let scaled = t.max(P::Scalar::zero()).min(one) * count_native;
        if scaled >= count_native {
            return SegmentParameter {
                index: count - 1,
                t: one,
            };
        }

        let index = scaled.floor().to_usize().unwrap_or(0);
        let local = scaled - scalar(index as f64);
        SegmentParameter { index, t: local }
    }

    fn resolved_points(&self, t: P::Scalar) -> ([P; 4], P::Scalar) {
        let seg = self.resolve(t);
        let base = seg.first_point();
        let p = &self.points;
        ([p[base], p[base + 1], p[base + 2], p[base + 3]], seg.t)
    }

    /// Position on the spline at `t` in local space.
    pub fn local_point(&self, t: P::Scalar) -> P {
        let ([p0, p1, p2, p3], t) = self.resolved_points(t);
        cubic_bezier::evaluate(p0, p1, p2, p3, t)
    }

    /// Derivative of the spline at `t` with respect to the segment parameter, in local space.
    pub fn local_velocity(&self, t: P::Scalar) -> P {
        let ([p0, p1, p2, p3], t) = self.resolved_points(t);
        cubic_bezier::derivative(p0, p1, p2, p3, t)
    }
}

impl<P, X> BezierSpline<P, X>
where
    P: Point,
    X: Transform<P>,
{
    /// World-space position of the spline at `t`.
    pub fn point(&self, t: P::Scalar) -> P {
        self.transform.to_world(self.local_point(t))
    }

    /// World-space control point at `index`.
    ///
    /// # Panics
    /// Panics if `index >= point_count()`.
    pub fn world_control_point(&self, index: usize) -> P {
        self.transform.to_world(self.points[index])
    }

    /// World-space tangent of the spline at `t`; only rotation and scale of the transform apply.
    /// Not normalized.
    pub fn velocity(&self, t: P::Scalar) -> P {
        self.transform.to_world_direction(self.local_velocity(t))
    }

    /// Unit-length world-space direction of the spline at `t`.
    ///
    /// Where the velocity vanishes (e.g. coincident control points) the zero vector is returned.
    pub fn direction(&self, t: P::Scalar) -> P
    where
        P: PointNorm,
    {
        match self.velocity(t).normalize_or_none() {
            Some(direction) => direction,
            None => {
                log::trace!("velocity vanishes at t = {:?}, returning zero direction", t);
                P::default()
            }
        }
    }
}

impl<P, X> Default for BezierSpline<P, X>
where
    P: PointIndex,
    X: Default,
{
    fn default() -> Self {
        BezierSpline::new_with_transform(X::default())
    }
}

impl<P, X> Spline<P> for BezierSpline<P, X>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.local_point(t)
    }

    fn velocity(&self, t: P::Scalar) -> P {
        self.local_velocity(t)
    }
}

impl<'a, P, X> IntoIterator for &'a BezierSpline<P, X>
where
    P: Point,
{
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.points.iter()
    }
}

/// Unvalidated shape of a deserialized spline.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSpline<P, X> {
    points: alloc::vec::Vec<P>,
    transform: X,
}

#[cfg(feature = "serde")]
impl<P, X> TryFrom<RawSpline<P, X>> for BezierSpline<P, X>
where
    P: Point,
{
    type Error = SplineError;

    fn try_from(raw: RawSpline<P, X>) -> Result<Self, SplineError> {
        BezierSpline::from_points_with_transform(raw.points, raw.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affine::Affine3;
    use crate::point_generic::PointN;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    type P3 = PointN<f64, 3>;

    fn p(x: f64, y: f64, z: f64) -> P3 {
        PointN::new([x, y, z])
    }

    fn assert_near(a: P3, b: P3) {
        assert!((a - b).squared_norm() < EPSILON, "{:?} != {:?}", a, b);
    }

    fn wavy() -> BezierSpline<P3> {
        BezierSpline::from_points([
            p(0.0, 0.0, 0.0),
            p(1.0, 2.0, 0.0),
            p(2.0, -2.0, 1.0),
            p(3.0, 0.0, 0.0),
            p(4.0, 1.0, -1.0),
            p(5.0, 3.0, 0.0),
            p(6.0, 0.0, 0.0),
            p(7.0, -1.0, 2.0),
            p(8.0, 0.5, 0.0),
            p(9.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn new_spline_is_one_segment_along_x() {
        let spline: BezierSpline<P3> = BezierSpline::new();
        assert_eq!(
            spline.control_points(),
            &[p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(4.0, 0.0, 0.0)]
        );
        assert_eq!(spline.segment_count(), 1);
        assert_eq!(spline.point(0.0), p(1.0, 0.0, 0.0));
        assert_eq!(spline.point(1.0), p(4.0, 0.0, 0.0));
        assert_eq!(spline.point(0.5), p(2.5, 0.0, 0.0));
    }

    #[test]
    fn add_segment_extends_along_x() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        spline.add_segment();
        assert_eq!(spline.point_count(), 7);
        assert_eq!(spline.segment_count(), 2);
        assert_eq!(spline.control_point(4), p(5.0, 0.0, 0.0));
        assert_eq!(spline.control_point(5), p(6.0, 0.0, 0.0));
        assert_eq!(spline.control_point(6), p(7.0, 0.0, 0.0));
    }

    #[test]
    fn remove_segment_keeps_one_segment() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        let before = spline.clone();
        assert!(!spline.remove_segment());
        assert_eq!(spline, before);
        assert_eq!(spline.point_count(), 4);
    }

    #[test]
    fn add_then_remove_restores_count() {
        let mut spline = wavy();
        let count = spline.point_count();
        spline.add_segment();
        assert!(spline.remove_segment());
        assert_eq!(spline.point_count(), count);
        assert_eq!(spline, wavy());
    }

    #[test]
    fn point_count_invariant_holds_for_any_edit_sequence() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        // deterministic mix of adds and removes, including runs of removes past one segment
        let script = [1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1];
        for op in script {
            if op == 1 {
                spline.add_segment();
            } else {
                spline.remove_segment();
            }
            assert_eq!(spline.point_count() % 3, 1);
            assert!(spline.point_count() >= 4);
            assert_eq!(spline.segments().count(), spline.segment_count());
        }
    }

    #[test]
    fn segment_counting_formulas_agree() {
        // `len / 3` and the `(len - 4) / 3` index of the `t >= 1` branch both land on the last
        // segment as long as the point count is 3n + 1
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        for _ in 0..6 {
            let len = spline.point_count();
            assert_eq!(spline.segment_count(), (len - 1) / 3);
            assert_eq!(spline.resolve(1.0).index, spline.segment_count() - 1);
            assert_eq!(spline.resolve(1.0).first_point(), len - 4);
            spline.add_segment();
        }
    }

    #[test]
    fn resolve_scales_and_splits() {
        let spline = wavy();
        assert_eq!(spline.segment_count(), 3);

        let seg = spline.resolve(0.5);
        assert_eq!(seg.index, 1);
        assert_relative_eq!(seg.t, 0.5, epsilon = 1e-12);

        let seg = spline.resolve(0.2);
        assert_eq!(seg.index, 0);
        assert_relative_eq!(seg.t, 0.6, epsilon = 1e-12);

        assert_eq!(spline.resolve(0.0), SegmentParameter { index: 0, t: 0.0 });
        assert_eq!(spline.resolve(-3.0), SegmentParameter { index: 0, t: 0.0 });
        assert_eq!(spline.resolve(f64::NAN), SegmentParameter { index: 0, t: 0.0 });
        assert_eq!(spline.resolve(1.0), SegmentParameter { index: 2, t: 1.0 });
        assert_eq!(spline.resolve(7.5), SegmentParameter { index: 2, t: 1.0 });
    }

    #[test]
    fn resolve_at_one_agrees_with_approach_from_below() {
        let spline: BezierSpline<P3> = BezierSpline::new();
        let at_one = spline.resolve(1.0);
        let below = spline.resolve(1.0 - 1e-9);
        assert_eq!(at_one.index, 0);
        assert_eq!(below.index, 0);
        assert!((spline.point(1.0) - spline.point(1.0 - 1e-9)).norm() < 1e-6);

        // same on a multi-segment spline, where the two branches compute the index differently
        let spline = wavy();
        assert_eq!(spline.resolve(1.0).index, spline.resolve(1.0 - 1e-9).index);
        assert!((spline.point(1.0) - spline.point(1.0 - 1e-9)).norm() < 1e-6);
    }

    #[test]
    fn segments_share_endpoints() {
        let spline = wavy();
        let segments: alloc::vec::Vec<_> = spline.segments().collect();
        assert_eq!(segments.len(), 3);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        assert_eq!(spline.segment(1), Some(segments[1]));
        assert_eq!(spline.segment(3), None);
        assert_eq!(spline.segment(usize::MAX), None);
    }

    #[test]
    fn point_is_continuous_at_segment_boundaries() {
        let spline = wavy();
        let boundary = 1.0 / 3.0;
        assert_near(spline.point(boundary - 1e-12), spline.point(boundary + 1e-12));
        assert_near(spline.point(2.0 * boundary), spline.control_point(6));
    }

    #[test]
    fn endpoints_interpolate_through_transform() {
        let xf = Affine3::from_trs([1.0, -2.0, 4.0], [0.1, 0.7, -0.2, 0.6], [2.0, 1.0, 0.5]);
        let spline = wavy().with_transform(xf);
        let first = xf.transform_point(spline.control_point(0));
        let last = xf.transform_point(spline.control_point(spline.point_count() - 1));
        assert_near(spline.point(0.0), first);
        assert_near(spline.point(1.0), last);
        assert_near(spline.world_control_point(0), first);
    }

    #[test]
    fn velocity_ignores_translation() {
        let local = wavy();
        let moved = wavy().with_transform(Affine3::translate([100.0, 50.0, -7.0]));
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_near(moved.velocity(t), local.velocity(t));
            assert_near(moved.point(t), local.point(t) + p(100.0, 50.0, -7.0));
        }
    }

    #[test]
    fn velocity_follows_rotation_and_scale() {
        let spline: BezierSpline<P3> = BezierSpline::new();
        // local velocity of the default segment is (3, 0, 0) everywhere
        assert_near(spline.velocity(0.25), p(3.0, 0.0, 0.0));

        let xf = Affine3::translate([5.0, 5.0, 5.0])
            * Affine3::rotate_z(core::f64::consts::FRAC_PI_2)
            * Affine3::scale(2.0);
        let spline = spline.with_transform(xf);
        assert_near(spline.velocity(0.25), p(0.0, 6.0, 0.0));
        assert_near(spline.direction(0.25), p(0.0, 1.0, 0.0));
    }

    #[test]
    fn direction_is_unit_length() {
        let spline = wavy();
        for i in 0..=30 {
            let t = i as f64 / 30.0;
            assert_relative_eq!(spline.direction(t).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_direction_is_zero() {
        let c = p(1.0, 1.0, 1.0);
        let spline = BezierSpline::from_points([c, c, c, c]).unwrap();
        assert_eq!(spline.velocity(0.5), P3::default());
        assert_eq!(spline.direction(0.5), P3::default());
        assert!(spline.direction(0.5).into_iter().all(|x| x.is_finite()));
    }

    #[test]
    fn set_control_point_moves_the_curve() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        spline.set_control_point(0, p(0.0, 5.0, 0.0));
        assert_eq!(spline.point(0.0), p(0.0, 5.0, 0.0));
        assert_eq!(spline.control_point(0), p(0.0, 5.0, 0.0));
    }

    #[test]
    fn try_accessors_report_bad_indices() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        assert_eq!(spline.try_control_point(3), Ok(p(4.0, 0.0, 0.0)));
        assert_eq!(
            spline.try_control_point(4),
            Err(SplineError::IndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            spline.try_set_control_point(9, P3::default()),
            Err(SplineError::IndexOutOfBounds { index: 9, len: 4 })
        );
        assert!(spline.try_set_control_point(2, P3::default()).is_ok());
        assert_eq!(spline.control_point(2), P3::default());
    }

    #[test]
    #[should_panic]
    fn control_point_out_of_bounds_panics() {
        let spline: BezierSpline<P3> = BezierSpline::new();
        let _ = spline.control_point(4);
    }

    #[test]
    fn from_points_validates_count() {
        for len in [0usize, 1, 2, 3, 5, 6, 8] {
            let points = (0..len).map(|i| p(i as f64, 0.0, 0.0));
            assert_eq!(
                BezierSpline::from_points(points).unwrap_err(),
                SplineError::InvalidPointCount { len }
            );
        }
        let spline = BezierSpline::from_points((0..7).map(|i| p(i as f64, 0.0, 0.0))).unwrap();
        assert_eq!(spline.segment_count(), 2);
    }

    #[test]
    fn reset_restores_default_segment() {
        let mut spline = wavy();
        spline.reset();
        assert_eq!(spline, BezierSpline::new());
    }

    #[test]
    fn long_chains_spill_to_the_heap() {
        let mut spline: BezierSpline<P3> = BezierSpline::new();
        for _ in 0..20 {
            spline.add_segment();
        }
        assert_eq!(spline.point_count(), 64);
        assert_eq!(spline.control_point(63), p(64.0, 0.0, 0.0));
        assert_eq!(spline.point(1.0), p(64.0, 0.0, 0.0));
    }

    #[test]
    fn spline_trait_evaluates_in_local_space() {
        let spline = wavy().with_transform(Affine3::translate([1.0, 1.0, 1.0]));
        assert_near(Spline::eval(&spline, 0.3), spline.local_point(0.3));
        assert_near(Spline::velocity(&spline, 0.3), spline.local_velocity(0.3));
        let samples = spline.sample(4);
        assert_eq!(samples.len(), 5);
        assert_near(samples[4], spline.local_point(1.0));
        assert_eq!((&spline).into_iter().count(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_validates_points() {
        let spline = wavy().with_transform(Affine3::translate([1.0, 2.0, 3.0]));
        let json = serde_json::to_string(&spline).unwrap();
        let back: BezierSpline<P3, Affine3<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spline);

        let broken = r#"{"points":[[0.0,0.0,0.0],[1.0,0.0,0.0]],"transform":null}"#;
        assert!(serde_json::from_str::<BezierSpline<P3>>(broken).is_err());
    }
}
