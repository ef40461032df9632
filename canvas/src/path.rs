/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rounded_rect::*;

///
/// Operations that define the perimeter of an outline
///
/// These are the instructions a renderer replays to rebuild an outline as its own path type.
/// Every sub-path starts with a `Move` and ends with a `ClosePath`; the ops in between never
/// start a new sub-path.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathOp {
    /// Move to a new point, starting a new sub-path
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point (the two control points, then the end point)
    BezierCurve(((f32, f32), (f32, f32)), (f32, f32)),

    /// Closes the current sub-path
    ClosePath,
}

///
/// An ordered sequence of closed rounded-rectangle sub-paths
///
/// This is what a shape generator produces: one sub-path per merged run of modules, in sweep
/// order. The path is a value with no retained connection to the generator that built it, so it
/// can be stored, serialized or handed to a renderer freely.
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct OutlinePath {
    /// The sub-paths making up this outline, in the order they were emitted
    rects: Vec<RoundedRect>,
}

impl OutlinePath {
    ///
    /// Creates an empty outline path
    ///
    pub fn new() -> OutlinePath {
        OutlinePath { rects: vec![] }
    }

    ///
    /// Appends a sub-path to this outline
    ///
    #[inline]
    pub fn push(&mut self, rect: RoundedRect) {
        self.rects.push(rect);
    }

    ///
    /// The sub-paths making up this outline, in the order they were emitted
    ///
    #[inline]
    pub fn rects(&self) -> &[RoundedRect] {
        &self.rects
    }

    ///
    /// The number of sub-paths in this outline
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    ///
    /// True if this outline contains no sub-paths at all
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    ///
    /// Flattens every sub-path into move/line/bezier path operations
    ///
    pub fn to_path_ops(&self) -> Vec<PathOp> {
        let mut ops = Vec::with_capacity(self.rects.len() * 10);

        for rect in self.rects.iter() {
            rect.push_path_ops(&mut ops);
        }

        ops
    }
}

impl<'a> IntoIterator for &'a OutlinePath {
    type Item = &'a RoundedRect;
    type IntoIter = std::slice::Iter<'a, RoundedRect>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
