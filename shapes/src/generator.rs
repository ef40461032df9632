/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use quirl_canvas::*;
use quirl_grid::*;

use serde_json::{Map, Value};

///
/// Trait implemented by shape generators, which render the modules of a grid as outline paths
///
/// The two path builders are pure functions of their arguments: a generator's parameters are
/// fixed when it's constructed, path building retains no state between calls and the grid is
/// only read for the duration of a call. The same generator can therefore build paths on any
/// number of threads at once without synchronization.
///
/// Generators are peers selected by name at configuration time (see the `registry` functions),
/// so everything a caller does with one goes through this trait.
///
pub trait ShapeGenerator: Send + Sync {
    ///
    /// The stable lowercase identifier of this kind of generator, used for registry lookups and
    /// for serialization round-trips
    ///
    fn name(&self) -> &'static str;

    ///
    /// Exports this generator's parameters into a generic settings record
    ///
    /// Passing the result to `create_shape()` along with `name()` reconstructs an identical
    /// generator.
    ///
    fn settings(&self) -> Map<String, Value>;

    ///
    /// Returns a new, independently owned generator with identical parameters
    ///
    /// The copy shares no state with the original: using one never affects the other.
    ///
    fn copy_shape(&self) -> Box<dyn ShapeGenerator>;

    ///
    /// Builds the outline of the set modules of a grid
    ///
    /// Every maximal run of qualifying modules along the generator's sweep axis becomes one
    /// rounded-rectangle sub-path. Marker modules are excluded from the runs unless
    /// `is_template` is true, in which case they merge like ordinary modules (for masks and
    /// previews where the markers aren't styled separately).
    ///
    fn on_path(
        &self,
        size: CanvasSize,
        modules: &dyn ModuleSource,
        is_template: bool,
    ) -> OutlinePath;

    ///
    /// Builds the outline of the unset background modules of a grid
    ///
    /// Only the interior of the grid is swept: the outermost ring of modules is part of the
    /// quiet zone, which the caller fills as a single background rather than module by module.
    ///
    fn off_path(
        &self,
        size: CanvasSize,
        modules: &dyn ModuleSource,
        is_template: bool,
    ) -> OutlinePath;
}
