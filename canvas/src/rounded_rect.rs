/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::consts::*;
use super::path::*;
use super::rect::*;

///
/// A rectangle with all four corners rounded by the same radius: one closed sub-path of an
/// outline
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RoundedRect {
    /// The rectangle being rounded
    rect: Rect,

    /// The corner radius, guaranteed to fit the rectangle
    radius: f32,
}

impl RoundedRect {
    ///
    /// Creates a rounded rectangle, clamping the radius to what the rectangle can fit
    ///
    /// The radius can never exceed half of the shorter side (opposite corner arcs would overlap
    /// otherwise), and a negative radius means no rounding at all.
    ///
    pub fn with_radius(rect: Rect, radius: f32) -> RoundedRect {
        let max_radius = rect.width.min(rect.height) / 2.0;
        let radius = radius.max(0.0).min(max_radius);

        RoundedRect { rect, radius }
    }

    ///
    /// The rectangle being rounded
    ///
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    ///
    /// The corner radius
    ///
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    ///
    /// Appends this sub-path to a list of path operations
    ///
    /// The sub-path begins with a `Move`, walks the perimeter and finishes with a `ClosePath`.
    /// Each rounded corner is a single cubic bezier quarter-arc; with a radius of zero the
    /// sub-path is the plain rectangle.
    ///
    pub fn push_path_ops(&self, ops: &mut Vec<PathOp>) {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect;

        let (x0, x1) = (x, x + width);
        let (y0, y1) = (y, y + height);
        let r = self.radius;

        if r <= 0.0 {
            ops.push(PathOp::Move(x0, y0));
            ops.push(PathOp::Line(x1, y0));
            ops.push(PathOp::Line(x1, y1));
            ops.push(PathOp::Line(x0, y1));
            ops.push(PathOp::ClosePath);
            return;
        }

        // Control point offset for the quarter-circle corner arcs
        let k = r * CORNER_CONTROL_FRACTION;

        ops.push(PathOp::Move(x0 + r, y0));
        ops.push(PathOp::Line(x1 - r, y0));
        ops.push(PathOp::BezierCurve(
            ((x1 - r + k, y0), (x1, y0 + r - k)),
            (x1, y0 + r),
        ));
        ops.push(PathOp::Line(x1, y1 - r));
        ops.push(PathOp::BezierCurve(
            ((x1, y1 - r + k), (x1 - r + k, y1)),
            (x1 - r, y1),
        ));
        ops.push(PathOp::Line(x0 + r, y1));
        ops.push(PathOp::BezierCurve(
            ((x0 + r - k, y1), (x0, y1 - r + k)),
            (x0, y1 - r),
        ));
        ops.push(PathOp::Line(x0, y0 + r));
        ops.push(PathOp::BezierCurve(
            ((x0, y0 + r - k), (x0 + r - k, y0)),
            (x0 + r, y0),
        ));
        ops.push(PathOp::ClosePath);
    }
}
