//! Handle picking and dragging for an interactive editor.
//!
//! The selected handle is explicit state owned by the caller and passed in on every update,
//! so a spline carries no editor state and one spline can be shown in several views.

use crate::affine::Transform;
use crate::bezier_spline::BezierSpline;
use crate::error::SplineError;
use crate::point::{Point, PointNorm};

/// Index of the control point currently being edited, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HandleSelection {
    selected: Option<usize>,
}

impl HandleSelection {
    pub fn new() -> Self {
        HandleSelection { selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select the control point under the cursor at world position `world`.
    ///
    /// Keeps the previous selection when nothing is within `radius`, so a click next to the
    /// curve does not drop the handle being edited. Returns the picked index.
    pub fn pick<P, X>(
        &mut self,
        spline: &BezierSpline<P, X>,
        world: P,
        radius: P::Scalar,
    ) -> Option<usize>
    where
        P: PointNorm,
        X: Transform<P>,
    {
        let hit = pick_control_point(spline, world, radius);
        if let Some(index) = hit {
            log::trace!("picked control point {}", index);
            self.selected = Some(index);
        }
        hit
    }

    /// Move the selected control point to the world position `world`.
    ///
    /// The position is mapped back into the spline's local space before it is stored.
    pub fn drag_to<P, X>(
        &self,
        spline: &mut BezierSpline<P, X>,
        world: P,
    ) -> Result<(), SplineError>
    where
        P: Point,
        X: Transform<P>,
    {
        let index = self.selected.ok_or(SplineError::NoSelection)?;
        let local = spline
            .transform()
            .to_local(world)
            .ok_or(SplineError::SingularTransform)?;
        spline.try_set_control_point(index, local)
    }

    /// Drop the selection if it no longer names a control point, e.g. after a segment was removed.
    pub fn retain_valid<P, X>(&mut self, spline: &BezierSpline<P, X>)
    where
        P: Point,
    {
        if let Some(index) = self.selected {
            if index >= spline.point_count() {
                log::debug!("clearing stale selection of control point {}", index);
                self.selected = None;
            }
        }
    }
}

/// Index of the control point closest to `world` among those within `radius` (world units).
pub fn pick_control_point<P, X>(
    spline: &BezierSpline<P, X>,
    world: P,
    radius: P::Scalar,
) -> Option<usize>
where
    P: PointNorm,
    X: Transform<P>,
{
    let max_sq = radius * radius;
    let mut best: Option<(usize, P::Scalar)> = None;
    for index in 0..spline.point_count() {
        let dist_sq = (spline.world_control_point(index) - world).squared_norm();
        if dist_sq > max_sq {
            continue;
        }
        match best {
            Some((_, best_sq)) if best_sq <= dist_sq => {}
            _ => best = Some((index, dist_sq)),
        }
    }
    best.map(|(index, _)| index)
}
