/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `quirl_grid` describes the module grids of 2D barcodes without requiring any particular encoder
//!
//! It's part of a set of companion crates that together render module grids as vector graphics:
//!
//! * `quirl_grid` is this crate, and it supplies the read side of a barcode: a square matrix of
//!   on/off modules plus a classification of which modules belong to the reserved marker regions
//! * `quirl_canvas` describes fillable outline geometry without requiring a particular renderer
//! * `quirl_shapes` turns a grid into outline paths by merging runs of modules into rounded
//!   rectangles
//!
//! The encoder that computes the module states is deliberately out of scope: anything that can
//! report a dimension and answer per-module queries can implement the `ModuleSource` trait and be
//! handed to a shape generator. `ModuleGrid` is the concrete implementation used when the states
//! are already known, and `MarkedGrid` layers the usual three-corner marker classification over
//! any other source.
//!

#[macro_use]
extern crate serde_derive;

mod markers;
mod module_grid;
mod source;

pub use self::markers::*;
pub use self::module_grid::*;
pub use self::source::*;
