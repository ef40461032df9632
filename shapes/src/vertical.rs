/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::generator::*;
use super::layout::*;
use super::parameters::*;

use quirl_canvas::*;
use quirl_grid::*;

use serde_json::{Map, Value};

///
/// Shape generator that merges vertical runs of modules into rounded rectangles
///
/// The column-wise peer of `Horizontal`: every column of the grid is swept top to bottom, and
/// each maximal run of adjacent qualifying modules becomes a single rectangle spanning the whole
/// run. At most one run is open at any point of the sweep, so the output never contains touching
/// or overlapping rectangles from the same column.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vertical {
    /// The construction-time parameters of this generator
    params: ShapeParameters,
}

impl Vertical {
    /// The registry name of this generator
    pub const NAME: &'static str = "vertical";

    ///
    /// Creates a vertical run generator (the corner radius fraction is clamped into `[0, 1]`)
    ///
    pub fn new(inset: f32, corner_radius_fraction: f32) -> Vertical {
        Vertical {
            params: ShapeParameters::new(inset, corner_radius_fraction),
        }
    }

    ///
    /// Creates a vertical run generator from a generic settings record (missing or malformed
    /// entries use their defaults)
    ///
    pub fn from_settings(settings: Option<&Map<String, Value>>) -> Vertical {
        Vertical {
            params: ShapeParameters::from_settings(settings),
        }
    }

    ///
    /// Finishes a run: insets the accumulated rectangle and appends it with rounded corners
    ///
    /// The radius is taken from the *inset* rectangle's width, the dimension perpendicular to
    /// the sweep, so runs of every length round to the same pill profile.
    ///
    fn close_run(&self, path: &mut OutlinePath, run: Rect) {
        let inset = run.inset(self.params.inset());
        let radius = (inset.width / 2.0) * self.params.corner_radius_fraction();

        path.push(RoundedRect::with_radius(inset, radius));
    }
}

impl ShapeGenerator for Vertical {
    fn name(&self) -> &'static str {
        Vertical::NAME
    }

    fn settings(&self) -> Map<String, Value> {
        self.params.to_settings()
    }

    fn copy_shape(&self) -> Box<dyn ShapeGenerator> {
        Box::new(Vertical {
            params: self.params,
        })
    }

    fn on_path(
        &self,
        size: CanvasSize,
        modules: &dyn ModuleSource,
        is_template: bool,
    ) -> OutlinePath {
        let mut path = OutlinePath::new();
        let dimension = modules.dimension();

        if dimension == 0 || size.width <= 0.0 || size.height <= 0.0 {
            return path;
        }

        let layout = GridLayout::fit(size, dimension);

        for col in 0..dimension {
            let mut run: Option<Rect> = None;

            for row in 0..dimension {
                let masked = modules.is_marker(row, col) && !is_template;

                if !modules.is_set(row, col) || masked {
                    if let Some(rect) = run.take() {
                        self.close_run(&mut path, rect);
                    }
                    continue;
                }

                if let Some(rect) = &mut run {
                    rect.height += layout.module_size();
                } else {
                    run = Some(layout.module_rect(row, col));
                }
            }

            // A run reaching the bottom edge of the grid still closes
            if let Some(rect) = run {
                self.close_run(&mut path, rect);
            }
        }

        path
    }

    fn off_path(
        &self,
        size: CanvasSize,
        modules: &dyn ModuleSource,
        is_template: bool,
    ) -> OutlinePath {
        let mut path = OutlinePath::new();
        let dimension = modules.dimension();

        if dimension == 0 || size.width <= 0.0 || size.height <= 0.0 {
            return path;
        }

        let layout = GridLayout::fit(size, dimension);

        // Only the interior: the outer ring belongs to the quiet zone, which the caller fills
        // as one background rather than module by module
        for col in 1..dimension - 1 {
            let mut run: Option<Rect> = None;

            for row in 1..dimension - 1 {
                let masked = modules.is_marker(row, col) && !is_template;

                if modules.is_set(row, col) || masked {
                    if let Some(rect) = run.take() {
                        self.close_run(&mut path, rect);
                    }
                    continue;
                }

                if let Some(rect) = &mut run {
                    rect.height += layout.module_size();
                } else {
                    run = Some(layout.module_rect(row, col));
                }
            }

            if let Some(rect) = run {
                self.close_run(&mut path, rect);
            }
        }

        path
    }
}
