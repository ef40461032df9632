/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use quirl_canvas::*;

///
/// Maps module positions to canvas coordinates
///
/// A grid is always rendered with square modules: the module edge is the smaller of `width/N`
/// and `height/N`, and the grid is centred along whichever canvas axis has surplus space (it is
/// never stretched anisotropically). A layout is recomputed for every path-building call; it's
/// pure and keeps no reference to the grid or the canvas.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridLayout {
    /// Edge length of a single module, in canvas units
    module_size: f32,

    /// Distance from the left canvas edge to the left edge of the grid
    x_offset: f32,

    /// Distance from the top canvas edge to the top edge of the grid
    y_offset: f32,
}

impl GridLayout {
    ///
    /// Lays a grid of the given dimension out inside a canvas
    ///
    pub fn fit(size: CanvasSize, dimension: usize) -> GridLayout {
        let dimension = dimension as f32;
        let module_size = (size.width / dimension).min(size.height / dimension);

        GridLayout {
            module_size,
            x_offset: (size.width - dimension * module_size) / 2.0,
            y_offset: (size.height - dimension * module_size) / 2.0,
        }
    }

    ///
    /// Edge length of a single module, in canvas units
    ///
    #[inline]
    pub fn module_size(&self) -> f32 {
        self.module_size
    }

    ///
    /// Distance from the left canvas edge to the left edge of the grid
    ///
    #[inline]
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    ///
    /// Distance from the top canvas edge to the top edge of the grid
    ///
    #[inline]
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    ///
    /// The canvas rectangle covered by the module at the given position
    ///
    pub fn module_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            self.x_offset + (col as f32) * self.module_size,
            self.y_offset + (row as f32) * self.module_size,
            self.module_size,
            self.module_size,
        )
    }
}
