/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use quirl_canvas::*;
use quirl_grid::*;
use quirl_shapes::*;

///
/// Writes a styled module grid to stdout as an SVG document
///
pub fn main() {
    // A hand-drawn 11x11 grid with 3x3 marker squares in three of its corners
    let grid = ModuleGrid::from_text("
        ###.#.#.###
        #.#..#..#.#
        ###.#.#.###
        ..#.#.#.#..
        #.##.#.##.#
        .#..#.#..#.
        #.##.#.##.#
        ..#.#.#.#..
        ###.#.#.###
        #.#..#..#.#
        ###.#.#.###");
    let grid = MarkedGrid::new(grid, 3);

    let size = CanvasSize::new(440.0, 440.0);
    let shape = Horizontal::new(2.0, 1.0);

    // This demo draws no separate marker decoration, so the module path is built as a
    // template and the markers merge like ordinary modules
    let modules = shape.on_path(size, &grid, true);
    let background = shape.off_path(size, &grid, false);

    // An SVG document with one filled path per outline
    println!(r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 440 440">"##);
    println!(r##"  <rect width="440" height="440" fill="#f0f4f8"/>"##);
    println!(r##"  <path fill="#102a43" d="{}"/>"##, svg_path_data(&modules));
    println!(r##"  <path fill="#d9e2ec" d="{}"/>"##, svg_path_data(&background));
    println!("</svg>");
}

///
/// Formats an outline path as SVG path data
///
fn svg_path_data(path: &OutlinePath) -> String {
    let mut data = String::new();

    for op in path.to_path_ops() {
        match op {
            PathOp::Move(x, y) => data.push_str(&format!("M {} {} ", x, y)),
            PathOp::Line(x, y) => data.push_str(&format!("L {} {} ", x, y)),
            PathOp::BezierCurve(((x1, y1), (x2, y2)), (x, y)) => data.push_str(&format!("C {} {} {} {} {} {} ", x1, y1, x2, y2, x, y)),
            PathOp::ClosePath => data.push_str("Z "),
        }
    }

    data.trim_end().to_string()
}
