/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The size of the canvas a grid is rendered into, in canvas units
///
/// Supplied per path-building call and never stored: a generator fits the grid into this size
/// with square modules, centering it along whichever axis has surplus space.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width of the canvas
    pub width: f32,

    /// Height of the canvas
    pub height: f32,
}

impl CanvasSize {
    ///
    /// Creates a canvas size
    ///
    #[inline]
    pub fn new(width: f32, height: f32) -> CanvasSize {
        CanvasSize { width, height }
    }
}
