//! Common interface of the curves in this crate, evaluated in their own (local) space.

use alloc::vec::Vec;

use super::point::Point;
use super::scalar;

pub trait Spline<P: Point> {
    /// Position at parameter `t`.
    fn eval(&self, t: P::Scalar) -> P;

    /// Derivative with respect to the curve parameter at `t`.
    fn velocity(&self, t: P::Scalar) -> P;

    /// Positions at `i / steps` for `i = 0..=steps`; `steps == 0` counts as one step.
    fn sample(&self, steps: usize) -> Vec<P> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.eval(scalar(i as f64 / steps as f64)))
            .collect()
    }
}
