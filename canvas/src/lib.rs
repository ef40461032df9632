/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `quirl_canvas` describes fillable outline geometry without requiring a particular renderer
//!
//! It's part of a set of companion crates that together render module grids as vector graphics:
//!
//! * `quirl_grid` supplies the read side of a barcode: the module states and marker regions
//! * `quirl_canvas` is this crate, and it provides the geometry vocabulary the generators emit:
//!   rectangles, rounded rectangles and the `OutlinePath` sequences built from them, along with a
//!   flattening into plain move/line/bezier path operations
//! * `quirl_shapes` turns a grid into outline paths by merging runs of modules into rounded
//!   rectangles
//!
//! Nothing in this crate rasterizes, strokes or fills anything: an `OutlinePath` is a pure
//! description, and a renderer replays `OutlinePath::to_path_ops()` into whatever path
//! representation it fills with color.
//!

#[macro_use]
extern crate serde_derive;

mod consts;
mod path;
mod rect;
mod rounded_rect;
mod size;

pub use self::consts::*;
pub use self::path::*;
pub use self::rect::*;
pub use self::rounded_rect::*;
pub use self::size::*;
