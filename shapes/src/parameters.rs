/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_json::{Map, Value};

/// Settings key storing a generator's inset
pub const SETTING_INSET: &str = "inset";

/// Settings key storing a generator's corner radius fraction
pub const SETTING_CORNER_RADIUS_FRACTION: &str = "cornerRadiusFraction";

///
/// The construction-time parameters shared by the run-merging shape generators
///
/// `inset` pulls every emitted rectangle in from the module boundaries by a fixed number of
/// canvas units (independent of the module size). `corner_radius_fraction` rounds the
/// rectangle's corners: 0 leaves them square and 1 rounds them by half of the rectangle's edge
/// perpendicular to the sweep, producing fully pill-shaped runs.
///
/// Parameters are immutable once constructed. They travel between sessions as a generic
/// string-keyed settings record, which is deliberately forgiving: missing or malformed entries
/// fall back to their defaults rather than failing.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Uniform shrink applied to each emitted rectangle, in canvas units
    inset: f32,

    /// Fraction (0-1) of half the fixed dimension used as the corner radius
    corner_radius_fraction: f32,
}

impl ShapeParameters {
    ///
    /// Creates a parameter set, clamping the corner radius fraction into `[0, 1]`
    ///
    /// An out-of-range fraction is clamped rather than rejected, so values persisted by other
    /// tools can always be read back.
    ///
    pub fn new(inset: f32, corner_radius_fraction: f32) -> ShapeParameters {
        ShapeParameters {
            inset,
            corner_radius_fraction: corner_radius_fraction.max(0.0).min(1.0),
        }
    }

    ///
    /// Reads a parameter set from a generic settings record
    ///
    /// The recognized keys are `"inset"` and `"cornerRadiusFraction"`. A missing record, a
    /// missing key or a value that isn't numeric falls back to that key's default (0 for both);
    /// unrecognized keys are ignored.
    ///
    pub fn from_settings(settings: Option<&Map<String, Value>>) -> ShapeParameters {
        let inset = read_number(settings, SETTING_INSET).unwrap_or(0.0);
        let corner_radius_fraction =
            read_number(settings, SETTING_CORNER_RADIUS_FRACTION).unwrap_or(0.0);

        ShapeParameters::new(inset, corner_radius_fraction)
    }

    ///
    /// Writes this parameter set into a generic settings record
    ///
    /// `from_settings` reads the result back into an identical parameter set.
    ///
    pub fn to_settings(&self) -> Map<String, Value> {
        let mut settings = Map::new();

        settings.insert(SETTING_INSET.to_string(), Value::from(self.inset as f64));
        settings.insert(
            SETTING_CORNER_RADIUS_FRACTION.to_string(),
            Value::from(self.corner_radius_fraction as f64),
        );

        settings
    }

    ///
    /// Uniform shrink applied to each emitted rectangle, in canvas units
    ///
    #[inline]
    pub fn inset(&self) -> f32 {
        self.inset
    }

    ///
    /// Fraction (0-1) of half the fixed dimension used as the corner radius
    ///
    #[inline]
    pub fn corner_radius_fraction(&self) -> f32 {
        self.corner_radius_fraction
    }
}

impl Default for ShapeParameters {
    fn default() -> ShapeParameters {
        ShapeParameters::new(0.0, 0.0)
    }
}

///
/// Reads one numeric settings value, yielding nothing if the record, the key or a numeric value
/// is absent
///
fn read_number(settings: Option<&Map<String, Value>>, key: &str) -> Option<f32> {
    settings?.get(key)?.as_f64().map(|value| value as f32)
}
