/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::generator::*;
use super::horizontal::*;
use super::vertical::*;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use std::collections::HashMap;

/// Settings key storing the generator name in a named shape record
pub const SETTING_TYPE: &str = "type";

/// Settings key storing the generator parameters in a named shape record
pub const SETTING_SETTINGS: &str = "settings";

///
/// Errors that can occur while creating a shape generator from its serialized form
///
#[derive(Clone, PartialEq, Debug)]
pub enum RegistryError {
    /// The requested name doesn't belong to any registered shape generator
    UnknownShape(String),

    /// A named shape record was expected but the value isn't an object
    NotAnObject,

    /// A named shape record doesn't say which generator to create
    MissingShapeType,
}

/// Creates a boxed generator of one registered kind from an optional settings record
type CreateShape = fn(Option<&Map<String, Value>>) -> Box<dyn ShapeGenerator>;

fn create_horizontal(settings: Option<&Map<String, Value>>) -> Box<dyn ShapeGenerator> {
    Box::new(Horizontal::from_settings(settings))
}

fn create_vertical(settings: Option<&Map<String, Value>>) -> Box<dyn ShapeGenerator> {
    Box::new(Vertical::from_settings(settings))
}

static SHAPE_REGISTRY: Lazy<HashMap<&'static str, CreateShape>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, CreateShape> = HashMap::new();

    registry.insert(Horizontal::NAME, create_horizontal);
    registry.insert(Vertical::NAME, create_vertical);

    registry
});

///
/// The names of every registered shape generator, in sorted order
///
pub fn shape_names() -> Vec<&'static str> {
    let mut names = SHAPE_REGISTRY.keys().copied().collect::<Vec<_>>();
    names.sort();

    names
}

///
/// Creates a shape generator by registry name
///
/// The settings record follows the usual rules (missing or malformed entries fall back to their
/// defaults), so the only way this can fail is an unknown name.
///
pub fn create_shape(
    name: &str,
    settings: Option<&Map<String, Value>>,
) -> Result<Box<dyn ShapeGenerator>, RegistryError> {
    let create = SHAPE_REGISTRY
        .get(name)
        .ok_or_else(|| RegistryError::UnknownShape(name.to_string()))?;

    Ok(create(settings))
}

///
/// Wraps a generator's name and parameters into one named shape record
///
/// The record is a JSON object of the form `{ "type": "<name>", "settings": { ... } }`;
/// `shape_from_settings()` rebuilds an identical generator from it. This is the form a document
/// persists when it stores which generator it was styled with.
///
pub fn shape_settings(shape: &dyn ShapeGenerator) -> Value {
    let mut record = Map::new();

    record.insert(
        SETTING_TYPE.to_string(),
        Value::String(shape.name().to_string()),
    );
    record.insert(SETTING_SETTINGS.to_string(), Value::Object(shape.settings()));

    Value::Object(record)
}

///
/// Creates a shape generator from a named shape record
///
/// The `"type"` entry picks the generator; a missing or malformed `"settings"` entry means the
/// generator is created with its default parameters.
///
pub fn shape_from_settings(record: &Value) -> Result<Box<dyn ShapeGenerator>, RegistryError> {
    let record = record.as_object().ok_or(RegistryError::NotAnObject)?;
    let name = record
        .get(SETTING_TYPE)
        .and_then(|name| name.as_str())
        .ok_or(RegistryError::MissingShapeType)?;
    let settings = record.get(SETTING_SETTINGS).and_then(|value| value.as_object());

    create_shape(name, settings)
}
