/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use quirl_canvas::*;
use quirl_grid::*;
use quirl_shapes::*;

///
/// 5x5 grid whose middle column is fully set
///
fn middle_column_grid() -> ModuleGrid {
    ModuleGrid::from_text(
        "
        ..#..
        ..#..
        ..#..
        ..#..
        ..#..",
    )
}

#[test]
fn full_column_merges_into_one_rectangle() {
    let shape = Vertical::new(0.0, 0.0);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &middle_column_grid(), false);

    assert!(path.len() == 1);
    assert!(path.rects()[0].rect() == Rect::new(200.0, 0.0, 100.0, 500.0));
    assert!(path.rects()[0].radius() == 0.0);
}

#[test]
fn background_covers_the_fully_off_interior_columns() {
    let shape = Vertical::new(0.0, 0.0);
    let path = shape.off_path(CanvasSize::new(500.0, 500.0), &middle_column_grid(), false);

    // Columns 1 and 3 are entirely off; column 2 is the set one
    assert!(path.len() == 2);
    assert!(path.rects()[0].rect() == Rect::new(100.0, 100.0, 100.0, 300.0));
    assert!(path.rects()[1].rect() == Rect::new(300.0, 100.0, 100.0, 300.0));
}

#[test]
fn runs_split_at_unset_modules() {
    let grid = ModuleGrid::from_text(
        "
        ##..#
        ##...
        .#.##
        ##...
        .#..#",
    );

    let shape = Vertical::new(0.0, 0.0);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &grid, false);

    // Swept column by column: 2 runs + 1 + 0 + 1 + 3
    assert!(path.len() == 7);
    assert!(path.rects()[0].rect() == Rect::new(0.0, 0.0, 100.0, 200.0));
    assert!(path.rects()[1].rect() == Rect::new(0.0, 300.0, 100.0, 100.0));
    assert!(path.rects()[2].rect() == Rect::new(100.0, 0.0, 100.0, 500.0));
}

#[test]
fn run_reaching_the_bottom_edge_still_closes() {
    let grid = ModuleGrid::from_text(
        "
        .....
        .....
        .....
        #....
        #....",
    );

    let shape = Vertical::new(0.0, 0.0);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &grid, false);

    assert!(path.len() == 1);
    assert!(path.rects()[0].rect() == Rect::new(0.0, 300.0, 100.0, 200.0));
}

#[test]
fn markers_break_runs() {
    let grid = MarkedGrid::new(ModuleGrid::from_fn(11, |_, _| true), 3);

    let shape = Vertical::new(0.0, 0.0);
    let path = shape.on_path(CanvasSize::new(440.0, 440.0), &grid, false);

    assert!(path.len() == 11);

    // Left columns run between the top-left and bottom-left markers
    assert!(path.rects()[0].rect() == Rect::new(0.0, 120.0, 40.0, 200.0));

    // Middle columns have no markers to dodge
    assert!(path.rects()[5].rect() == Rect::new(200.0, 0.0, 40.0, 440.0));

    // Right columns only dodge the top-right marker
    assert!(path.rects()[8].rect() == Rect::new(320.0, 120.0, 40.0, 320.0));
}

#[test]
fn template_mode_merges_markers_like_ordinary_modules() {
    let grid = MarkedGrid::new(ModuleGrid::from_fn(11, |_, _| true), 3);

    let shape = Vertical::new(0.0, 0.0);
    let path = shape.on_path(CanvasSize::new(440.0, 440.0), &grid, true);

    assert!(path.len() == 11);

    for (col, rect) in path.rects().iter().enumerate() {
        assert!(rect.rect() == Rect::new((col as f32) * 40.0, 0.0, 40.0, 440.0));
    }
}

#[test]
fn inset_shrinks_each_run() {
    let shape = Vertical::new(10.0, 0.0);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &middle_column_grid(), false);

    assert!(path.len() == 1);
    assert!(path.rects()[0].rect() == Rect::new(210.0, 10.0, 80.0, 480.0));
}

#[test]
fn corner_radius_comes_from_the_inset_run_width() {
    let shape = Vertical::new(10.0, 0.5);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &middle_column_grid(), false);

    assert!((path.rects()[0].radius() - 20.0).abs() < 1e-6);
}

#[test]
fn full_fraction_makes_a_pill() {
    let shape = Vertical::new(0.0, 1.0);
    let path = shape.on_path(CanvasSize::new(500.0, 500.0), &middle_column_grid(), false);

    assert!(path.rects()[0].rect() == Rect::new(200.0, 0.0, 100.0, 500.0));
    assert!((path.rects()[0].radius() - 50.0).abs() < 1e-6);
}

#[test]
fn background_honours_the_template_flag() {
    let grid = MarkedGrid::new(ModuleGrid::from_fn(11, |_, _| false), 3);
    let shape = Vertical::new(0.0, 0.0);

    let plain = shape.off_path(CanvasSize::new(440.0, 440.0), &grid, false);
    let template = shape.off_path(CanvasSize::new(440.0, 440.0), &grid, true);

    // Without the flag the markers punch holes in the background columns
    assert!(plain.len() == 9);
    assert!(plain.rects()[0].rect() == Rect::new(40.0, 120.0, 40.0, 200.0));

    // With it marker modules merge like any other background module
    assert!(template.len() == 9);
    assert!(template.rects()[0].rect() == Rect::new(40.0, 40.0, 40.0, 360.0));

    assert!(plain != template);
}

#[test]
fn degenerate_inputs_build_no_path() {
    let shape = Vertical::new(0.0, 0.0);
    let empty = ModuleGrid::from_text("");
    let grid = middle_column_grid();

    assert!(shape.on_path(CanvasSize::new(500.0, 500.0), &empty, false).is_empty());
    assert!(shape.off_path(CanvasSize::new(500.0, 500.0), &empty, false).is_empty());
    assert!(shape.on_path(CanvasSize::new(500.0, 0.0), &grid, false).is_empty());
    assert!(shape.off_path(CanvasSize::new(0.0, 500.0), &grid, false).is_empty());
}

#[test]
fn vertical_output_is_the_transpose_of_horizontal() {
    // Transposing the grid swaps the roles of the two generators
    let grid = ModuleGrid::from_fn(9, |row, col| (row * 5 + col * 3) % 4 == 0);
    let transposed = ModuleGrid::from_fn(9, |row, col| (col * 5 + row * 3) % 4 == 0);

    let horizontal = Horizontal::new(0.0, 0.0);
    let vertical = Vertical::new(0.0, 0.0);

    let rows = horizontal.on_path(CanvasSize::new(450.0, 450.0), &grid, false);
    let cols = vertical.on_path(CanvasSize::new(450.0, 450.0), &transposed, false);

    assert!(rows.len() == cols.len());

    for (row_rect, col_rect) in rows.rects().iter().zip(cols.rects().iter()) {
        let row_rect = row_rect.rect();
        let col_rect = col_rect.rect();

        assert!((row_rect.x - col_rect.y).abs() < 1e-6);
        assert!((row_rect.y - col_rect.x).abs() < 1e-6);
        assert!((row_rect.width - col_rect.height).abs() < 1e-6);
        assert!((row_rect.height - col_rect.width).abs() < 1e-6);
    }
}
