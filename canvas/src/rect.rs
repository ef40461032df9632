/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// An axis-aligned rectangle in canvas units
///
/// The origin is the corner with the smallest coordinates; width and height are never negative
/// for rectangles produced by this crate (`inset()` clamps rather than turning a rectangle
/// inside out).
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect {
    /// The x coordinate of the rectangle's origin corner
    pub x: f32,

    /// The y coordinate of the rectangle's origin corner
    pub y: f32,

    /// Extent of the rectangle along the x axis
    pub width: f32,

    /// Extent of the rectangle along the y axis
    pub height: f32,
}

impl Rect {
    ///
    /// Creates a rectangle from its origin corner and extents
    ///
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    ///
    /// The x coordinate of the edge opposite the origin
    ///
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    ///
    /// The y coordinate of the edge opposite the origin
    ///
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    ///
    /// Shrinks this rectangle by `amount` on all four sides (a negative amount grows it)
    ///
    /// Insetting by more than half of the width or height clamps that extent to zero instead of
    /// producing an inverted rectangle; the result stays centred on the original.
    ///
    pub fn inset(&self, amount: f32) -> Rect {
        let width = (self.width - amount * 2.0).max(0.0);
        let height = (self.height - amount * 2.0).max(0.0);

        Rect {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}
