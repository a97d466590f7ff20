//! Display options for spline gizmos and the world-space samples a renderer draws from them.
//!
//! Nothing here draws: the functions return polylines and line pairs in world space, and
//! the host decides how to put them on screen.

use alloc::vec::Vec;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::affine::Transform;
use crate::bezier_spline::BezierSpline;
use crate::point::{Point, PointNorm};
use crate::scalar;

/// How a spline is visualized and picked in the editor.
///
/// None of these values affect the curve itself, only the density and size of its gizmos.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayOptions {
    /// Draw tangent ticks along the curve.
    pub show_velocity: bool,
    /// Draw the straight control polygon through all control points.
    pub show_primitive: bool,
    /// Curve samples per segment, in `[0, 100]`.
    pub line_steps: f32,
    /// Length of the tangent ticks, in `[0, 2]`.
    pub direction_size_scale: f32,
    /// Tangent tick density relative to `line_steps`, in `[0, 2]`.
    pub direction_noise_scale: f32,
    /// Control point handle size relative to the view's handle scale, in `[0, 0.3]`.
    pub handle_size: f32,
    /// Control point hit-test radius relative to the view's handle scale, in `[0, 0.06]`.
    pub pick_size: f32,
}

impl DisplayOptions {
    pub const LINE_STEPS_MAX: f32 = 100.0;
    pub const DIRECTION_SCALE_MAX: f32 = 2.0;
    pub const HANDLE_SIZE_MAX: f32 = 0.3;
    pub const PICK_SIZE_MAX: f32 = 0.06;

    /// Return a copy with every value forced into its documented range.
    /// NaN values fall back to the lower bound.
    #[must_use]
    pub fn clamped(&self) -> Self {
        DisplayOptions {
            show_velocity: self.show_velocity,
            show_primitive: self.show_primitive,
            line_steps: clamp_range(self.line_steps, Self::LINE_STEPS_MAX),
            direction_size_scale: clamp_range(
                self.direction_size_scale,
                Self::DIRECTION_SCALE_MAX,
            ),
            direction_noise_scale: clamp_range(
                self.direction_noise_scale,
                Self::DIRECTION_SCALE_MAX,
            ),
            handle_size: clamp_range(self.handle_size, Self::HANDLE_SIZE_MAX),
            pick_size: clamp_range(self.pick_size, Self::PICK_SIZE_MAX),
        }
    }

    /// Number of line segments used to draw a spline of `segment_count` segments.
    pub fn curve_steps(&self, segment_count: usize) -> usize {
        let opts = self.clamped();
        Float::ceil(opts.line_steps * segment_count as f32) as usize
    }

    /// Number of tangent ticks drawn along a spline of `segment_count` segments.
    pub fn direction_steps(&self, segment_count: usize) -> usize {
        let opts = self.clamped();
        Float::ceil(opts.line_steps * segment_count as f32 * opts.direction_noise_scale) as usize
    }

    /// On-screen handle radius for a point whose view-dependent handle scale is `view_scale`.
    pub fn handle_radius(&self, view_scale: f32) -> f32 {
        view_scale * self.clamped().handle_size
    }

    /// Hit-test radius for a point whose view-dependent handle scale is `view_scale`.
    pub fn pick_radius(&self, view_scale: f32) -> f32 {
        view_scale * self.clamped().pick_size
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_velocity: false,
            show_primitive: false,
            line_steps: 50.0,
            direction_size_scale: 1.0,
            direction_noise_scale: 1.0,
            handle_size: 0.1,
            pick_size: 0.06,
        }
    }
}

fn clamp_range(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// World-space polyline through the spline, sampled at `i / steps` for `i = 0..=steps`.
///
/// Both endpoints are always included; `steps == 0` is treated as a single line segment.
pub fn curve_polyline<P, X>(spline: &BezierSpline<P, X>, steps: usize) -> Vec<P>
where
    P: Point,
    X: Transform<P>,
{
    let steps = steps.max(1);
    let denom = steps as f64;
    (0..=steps)
        .map(|i| spline.point(scalar(i as f64 / denom)))
        .collect()
}

/// Tangent ticks as `(origin, tip)` pairs in world space.
///
/// Empty unless `show_velocity` is set and `direction_noise_scale` is non-zero. Ticks sit at
/// `i / steps` for `i in 0..steps` and are `direction_size_scale` long.
pub fn direction_ticks<P, X>(spline: &BezierSpline<P, X>, options: &DisplayOptions) -> Vec<(P, P)>
where
    P: PointNorm,
    X: Transform<P>,
{
    let opts = options.clamped();
    if !opts.show_velocity || opts.direction_noise_scale == 0.0 {
        return Vec::new();
    }
    let steps = opts.direction_steps(spline.segment_count());
    let size: P::Scalar = scalar(f64::from(opts.direction_size_scale));
    (0..steps)
        .map(|i| {
            let t: P::Scalar = scalar(i as f64 / steps as f64);
            let origin = spline.point(t);
            (origin, origin + spline.direction(t) * size)
        })
        .collect()
}

/// Consecutive world-space control point pairs forming the control polygon.
///
/// Empty unless `show_primitive` is set.
pub fn control_polygon<P, X>(spline: &BezierSpline<P, X>, options: &DisplayOptions) -> Vec<(P, P)>
where
    P: Point,
    X: Transform<P>,
{
    if !options.show_primitive {
        return Vec::new();
    }
    let world: Vec<P> = (0..spline.point_count())
        .map(|i| spline.world_control_point(i))
        .collect();
    world.windows(2).map(|w| (w[0], w[1])).collect()
}
