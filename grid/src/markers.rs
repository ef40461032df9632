/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::source::*;

///
/// Adds the usual three-corner marker classification to another module source
///
/// 2D barcodes reserve fixed squares of modules for their finder patterns: one `extent`×`extent`
/// square in the top-left, top-right and bottom-left corners of the grid (a QR code's finder
/// patterns plus their separators occupy an extent of 9 modules). `MarkedGrid` reports the
/// modules inside those squares as marker modules and defers everything else to the wrapped
/// source, so any existing `ModuleSource` can gain marker regions without being copied.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MarkedGrid<G> {
    /// The source supplying the module states
    grid: G,

    /// Edge length, in modules, of the square marker region at each marked corner
    extent: usize,
}

impl<G> MarkedGrid<G>
where
    G: ModuleSource,
{
    ///
    /// Wraps a module source, marking an `extent`×`extent` square of modules at the top-left,
    /// top-right and bottom-left corners of the grid
    ///
    pub fn new(grid: G, extent: usize) -> MarkedGrid<G> {
        MarkedGrid { grid, extent }
    }
}

impl<G> ModuleSource for MarkedGrid<G>
where
    G: ModuleSource,
{
    #[inline]
    fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    #[inline]
    fn is_set(&self, row: usize, col: usize) -> bool {
        self.grid.is_set(row, col)
    }

    fn is_marker(&self, row: usize, col: usize) -> bool {
        // An extent larger than the grid marks every module
        let far_edge = self.grid.dimension().saturating_sub(self.extent);

        let in_corner = if row < self.extent {
            col < self.extent || col >= far_edge
        } else if row >= far_edge {
            col < self.extent
        } else {
            false
        };

        in_corner || self.grid.is_marker(row, col)
    }
}
