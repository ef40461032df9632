/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use quirl_canvas::*;
use quirl_shapes::*;

#[test]
fn exact_fit_fills_the_canvas() {
    let layout = GridLayout::fit(CanvasSize::new(500.0, 500.0), 5);

    assert!((layout.module_size() - 100.0).abs() < 1e-6);
    assert!(layout.x_offset().abs() < 1e-6);
    assert!(layout.y_offset().abs() < 1e-6);
}

#[test]
fn wide_canvas_centres_the_grid_horizontally() {
    let layout = GridLayout::fit(CanvasSize::new(600.0, 300.0), 5);

    // The module edge comes from the smaller canvas extent
    assert!((layout.module_size() - 60.0).abs() < 1e-6);
    assert!((layout.x_offset() - 150.0).abs() < 1e-6);
    assert!(layout.y_offset().abs() < 1e-6);
}

#[test]
fn tall_canvas_centres_the_grid_vertically() {
    let layout = GridLayout::fit(CanvasSize::new(300.0, 600.0), 5);

    assert!((layout.module_size() - 60.0).abs() < 1e-6);
    assert!(layout.x_offset().abs() < 1e-6);
    assert!((layout.y_offset() - 150.0).abs() < 1e-6);
}

#[test]
fn modules_are_always_square() {
    let layout = GridLayout::fit(CanvasSize::new(610.0, 290.0), 7);
    let rect = layout.module_rect(3, 5);

    assert!((rect.width - rect.height).abs() < 1e-6);
    assert!((rect.width - 290.0 / 7.0).abs() < 1e-4);
}

#[test]
fn module_positions_follow_rows_and_columns() {
    let layout = GridLayout::fit(CanvasSize::new(500.0, 500.0), 5);

    // Columns move along x, rows move along y
    assert!(layout.module_rect(1, 4) == Rect::new(400.0, 100.0, 100.0, 100.0));
    assert!(layout.module_rect(4, 1) == Rect::new(100.0, 400.0, 100.0, 100.0));
}

#[test]
fn offsets_shift_every_module_rect() {
    let layout = GridLayout::fit(CanvasSize::new(600.0, 300.0), 5);

    assert!(layout.module_rect(0, 0) == Rect::new(150.0, 0.0, 60.0, 60.0));
    assert!(layout.module_rect(2, 3) == Rect::new(150.0 + 180.0, 120.0, 60.0, 60.0));
}
