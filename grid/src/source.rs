/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Trait implemented by types that can supply the modules of a square 2D barcode grid
///
/// This is the full contract a shape generator requires from its encoder: the grid dimension,
/// per-module state lookups and per-module marker membership. Implementations are read-only; a
/// generator queries a source for the duration of a single path-building call and retains nothing
/// afterwards.
///
pub trait ModuleSource {
    ///
    /// The number of modules along each side of the (always square) grid
    ///
    fn dimension(&self) -> usize;

    ///
    /// True if the module at the given position is set
    ///
    /// Positions are 0-indexed, with `row` selecting the horizontal line of modules and `col` the
    /// position along it. Callers only ever ask about positions inside the grid.
    ///
    fn is_set(&self, row: usize, col: usize) -> bool;

    ///
    /// True if the module at the given position belongs to a reserved marker region (for example,
    /// one of the finder patterns of a QR code)
    ///
    /// Marker modules are styled separately by the renderer, so the shape generators leave them
    /// out of the ordinary run-merging unless they're explicitly asked to produce a template. A
    /// source with no reserved regions can rely on the default implementation.
    ///
    fn is_marker(&self, _row: usize, _col: usize) -> bool {
        false
    }
}

impl<'a, T> ModuleSource for &'a T
where
    T: ModuleSource + ?Sized,
{
    #[inline]
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    #[inline]
    fn is_set(&self, row: usize, col: usize) -> bool {
        (**self).is_set(row, col)
    }

    #[inline]
    fn is_marker(&self, row: usize, col: usize) -> bool {
        (**self).is_marker(row, col)
    }
}
