/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::source::*;

///
/// An immutable square matrix of on/off modules
///
/// This is the concrete grid type used when the module states are already known (usually because
/// an encoder has computed them). It stores the states in row-major order and implements
/// `ModuleSource` with no marker regions: wrap it in a `MarkedGrid` to add the usual three-corner
/// classification.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModuleGrid {
    /// Number of modules along each side of the grid
    dimension: usize,

    /// Module states in row-major order (`row * dimension + col`)
    modules: Vec<bool>,
}

impl ModuleGrid {
    ///
    /// Creates a grid by evaluating a function at every module position
    ///
    pub fn from_fn(dimension: usize, module_at: impl Fn(usize, usize) -> bool) -> ModuleGrid {
        let modules = (0..dimension * dimension)
            .map(|module| {
                let row = module / dimension;
                let col = module % dimension;

                module_at(row, col)
            })
            .collect();

        ModuleGrid { dimension, modules }
    }

    ///
    /// Parses the ASCII form of a grid
    ///
    /// One row per line, `#` for a set module and any other character for an unset one. Blank
    /// lines and surrounding whitespace are ignored, so grids can be written inline in source
    /// code. The grid dimension is the number of rows; short rows are padded with unset modules.
    ///
    pub fn from_text(text: &str) -> ModuleGrid {
        let rows = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| c == '#').collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let dimension = rows.len();
        let modules = rows
            .iter()
            .flat_map(|row| (0..dimension).map(move |col| row.get(col).copied().unwrap_or(false)))
            .collect();

        ModuleGrid { dimension, modules }
    }

    ///
    /// The ASCII form of this grid: one row per line, `#` for set modules and `.` for unset ones
    ///
    /// `ModuleGrid::from_text` parses this form back into an identical grid.
    ///
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.dimension * (self.dimension + 1));

        for row in 0..self.dimension {
            for col in 0..self.dimension {
                text.push(if self.is_set(row, col) { '#' } else { '.' });
            }
            text.push('\n');
        }

        text
    }

    ///
    /// The number of modules along each side of the grid
    ///
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    ///
    /// True if the module at the given position is set
    ///
    #[inline]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.modules[row * self.dimension + col]
    }
}

impl ModuleSource for ModuleGrid {
    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn is_set(&self, row: usize, col: usize) -> bool {
        ModuleGrid::is_set(self, row, col)
    }
}
