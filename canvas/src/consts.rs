/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Distance of a cubic bezier control point from the end of a quarter-circle arc, as a fraction
/// of the radius ((4/3)·(√2 − 1), the standard circular-arc approximation)
pub const CORNER_CONTROL_FRACTION: f32 = 0.552_284_8;
