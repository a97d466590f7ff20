use num_traits::{One, Zero};

use super::point::{Point, PointNorm};
use super::scalar;
use super::spline::Spline;

/// Evaluate the cubic Bernstein polynomial defined by four control points at `t`.
///
/// ```∀ t,  P(t) = (1 - t)³ * p0 + 3 * (1 - t)² * t * p1 + 3 * (1 - t) * t² * p2 + t³ * p3```
///
/// `t` is not clamped; the result is exact at `t = 0` (`p0`) and `t = 1` (`p3`).
#[inline]
pub fn evaluate<P: Point>(p0: P, p1: P, p2: P, p3: P, t: P::Scalar) -> P {
    let three: P::Scalar = scalar(3.0);
    let one_t = P::Scalar::one() - t;
    p0 * (one_t * one_t * one_t)
        + p1 * (three * one_t * one_t * t)
        + p2 * (three * one_t * t * t)
        + p3 * (t * t * t)
}

/// First derivative of [`evaluate`] with respect to `t`.
///
/// ```P'(t) = 3 * (1 - t)² * (p1 - p0) + 6 * (1 - t) * t * (p2 - p1) + 3 * t² * (p3 - p2)```
///
/// The result is not normalized: its length is the parametric speed of the curve.
#[inline]
pub fn derivative<P: Point>(p0: P, p1: P, p2: P, p3: P, t: P::Scalar) -> P {
    let three: P::Scalar = scalar(3.0);
    let six: P::Scalar = scalar(6.0);
    let one_t = P::Scalar::one() - t;
    (p1 - p0) * (three * one_t * one_t)
        + (p2 - p1) * (six * one_t * t)
        + (p3 - p2) * (three * t * t)
}

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Build a curve from four consecutive control points.
    pub fn from_slice(points: &[P; 4]) -> Self {
        CubicBezier::new(points[0], points[1], points[2], points[3])
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: P::Scalar) -> P {
        evaluate(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Sample the derivative (velocity) of the curve at `t`.
    pub fn derivative(&self, t: P::Scalar) -> P {
        derivative(self.start, self.ctrl1, self.ctrl2, self.end, t)
    }

    /// Unit tangent at `t`. A vanishing derivative (e.g. coincident control points)
    /// yields the zero vector instead of NaN components.
    pub fn tangent(&self, t: P::Scalar) -> P
    where
        P: PointNorm,
    {
        self.derivative(t).normalize_or_none().unwrap_or_default()
    }

    /// Approximates the arc length of the curve by flattening it with `nsteps` straight line
    /// segments.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar
    where
        P: PointNorm,
    {
        let nsteps = nsteps.max(1);
        let steps: P::Scalar = scalar(nsteps as f64);
        let mut arclen = P::Scalar::zero();
        let mut prev = self.start;
        for i in 1..=nsteps {
            let t = scalar::<P::Scalar>(i as f64) / steps;
            let next = self.eval_casteljau(t);
            arclen = arclen + (next - prev).norm();
            prev = next;
        }
        arclen
    }
}

impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        CubicBezier::eval(self, t)
    }

    fn velocity(&self, t: P::Scalar) -> P {
        self.derivative(t)
    }
}
