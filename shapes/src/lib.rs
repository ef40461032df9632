/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `quirl_shapes` renders the module grid of a 2D barcode as vector outline paths
//!
//! It's part of a set of companion crates that together render module grids as vector graphics:
//!
//! * `quirl_grid` supplies the read side of a barcode: the module states and marker regions
//! * `quirl_canvas` describes fillable outline geometry without requiring a particular renderer
//! * `quirl_shapes` is this crate, and it provides the shape generators: given a grid, a canvas
//!   size and a couple of styling parameters, a generator produces one `OutlinePath` for the set
//!   modules and one for the unset background modules
//!
//! # Why merge runs?
//!
//! Filling every module as its own little square produces thousands of identical sub-paths and a
//! visual texture that can't be styled much. The generators here instead sweep the grid along one
//! axis and merge each maximal run of adjacent modules into a single rounded rectangle:
//! `Horizontal` sweeps every row left to right, `Vertical` sweeps every column top to bottom. An
//! `inset` pulls every merged rectangle in from the module boundaries and a
//! `corner_radius_fraction` rounds its ends, which is enough to produce the familiar
//! "pill"-styled barcodes.
//!
//! The marker regions of the grid (a QR code's finder patterns) are excluded from the merged
//! outlines so a renderer can style them separately; passing `is_template = true` treats them as
//! ordinary modules instead, which is useful for masks and previews.
//!
//! # Getting started
//!
//! ```
//! use quirl_canvas::*;
//! use quirl_grid::*;
//! use quirl_shapes::*;
//!
//! let grid    = ModuleGrid::from_text("
//!     ##.##
//!     .###.
//!     ##.##
//!     .#.#.
//!     ##.##");
//!
//! let shape   = Horizontal::new(0.5, 1.0);
//! let outline = shape.on_path(CanvasSize::new(500.0, 500.0), &grid, false);
//!
//! for op in outline.to_path_ops() {
//!     // Replay into a renderer's path type
//!     # let _ = op;
//! }
//! ```
//!
//! Generators can also be picked by name at configuration time through the registry
//! (`create_shape("horizontal", None)`) and round-tripped through generic settings records, so a
//! stored document can reconstruct whichever generator it was saved with.
//!

#[macro_use]
extern crate serde_derive;

mod generator;
mod horizontal;
mod layout;
mod parameters;
mod registry;
mod vertical;

pub use self::generator::*;
pub use self::horizontal::*;
pub use self::layout::*;
pub use self::parameters::*;
pub use self::registry::*;
pub use self::vertical::*;
