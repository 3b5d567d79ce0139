use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{LoadError, Node, Registries};

/// Builds [`Node`] trees from behavior documents of the form `{ "root": <node> }`.
///
/// ```json
/// { "root": { "type": "selector", "children": [
///     { "type": "sequence", "children": [
///         { "type": "condition", "name": "playerVisible" },
///         { "type": "action", "name": "look", "params": { "target": "player" } }
///     ] },
///     { "type": "action", "name": "move", "params": { "mode": "patrolOrRandom" } }
/// ] } }
/// ```
///
/// Every problem is fatal: an unknown node type, an unregistered leaf name, or
/// a bad parameter block aborts the whole load.
#[derive(Debug, Clone, Copy)]
pub struct TreeLoader<'r> {
    registries: &'r Registries,
}

impl<'r> TreeLoader<'r> {
    pub fn new(registries: &'r Registries) -> Self {
        Self { registries }
    }

    pub fn load_str(&self, text: &str) -> Result<Node, LoadError> {
        let document: Value = serde_json::from_str(text)?;
        self.load_value(&document)
    }

    pub fn load_reader(&self, mut reader: impl Read) -> Result<Node, LoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.load_str(&text)
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Node, LoadError> {
        let text = std::fs::read_to_string(path)?;
        self.load_str(&text)
    }

    pub fn load_value(&self, document: &Value) -> Result<Node, LoadError> {
        let root = document.get("root").ok_or(LoadError::MissingRoot)?;
        let node = self.build(root, "root")?;
        debug!(nodes = node.count(), "behavior tree loaded");
        Ok(node)
    }

    fn build(&self, value: &Value, path: &str) -> Result<Node, LoadError> {
        let object = value.as_object().ok_or_else(|| LoadError::InvalidField {
            path: path.to_owned(),
            field: "node",
            expected: "an object",
        })?;

        let type_name = string_field(object, "type", path)?;
        match type_name {
            "selector" => Ok(Node::selector(self.children(object, path)?)),
            "sequence" => Ok(Node::sequence(self.children(object, path)?)),
            "action" => {
                let name = string_field(object, "name", path)?;
                let params = params(object, path)?;
                let action = self
                    .registries
                    .actions
                    .create(name, &params)
                    .ok_or_else(|| LoadError::UnknownAction {
                        path: path.to_owned(),
                        name: name.to_owned(),
                    })?
                    .map_err(|source| LoadError::InvalidParams {
                        path: path.to_owned(),
                        kind: "action",
                        name: name.to_owned(),
                        source,
                    })?;
                Ok(Node::action(name, action))
            }
            "condition" => {
                let name = string_field(object, "name", path)?;
                let params = params(object, path)?;
                let condition = self
                    .registries
                    .conditions
                    .create(name, &params)
                    .ok_or_else(|| LoadError::UnknownCondition {
                        path: path.to_owned(),
                        name: name.to_owned(),
                    })?
                    .map_err(|source| LoadError::InvalidParams {
                        path: path.to_owned(),
                        kind: "condition",
                        name: name.to_owned(),
                        source,
                    })?;
                Ok(Node::condition(name, condition))
            }
            "wait" => {
                let seconds = object
                    .get("seconds")
                    .ok_or_else(|| LoadError::MissingField {
                        path: path.to_owned(),
                        field: "seconds",
                    })?
                    .as_f64()
                    .ok_or_else(|| LoadError::InvalidField {
                        path: path.to_owned(),
                        field: "seconds",
                        expected: "a number",
                    })?;
                Ok(Node::wait(seconds as f32))
            }
            other => Err(LoadError::UnknownNodeType {
                path: path.to_owned(),
                type_name: other.to_owned(),
            }),
        }
    }

    fn children(&self, object: &Map<String, Value>, path: &str) -> Result<Vec<Node>, LoadError> {
        let items = object
            .get("children")
            .ok_or_else(|| LoadError::MissingField {
                path: path.to_owned(),
                field: "children",
            })?
            .as_array()
            .ok_or_else(|| LoadError::InvalidField {
                path: path.to_owned(),
                field: "children",
                expected: "an array",
            })?;

        items
            .iter()
            .enumerate()
            .map(|(i, child)| self.build(child, &format!("{path}.children[{i}]")))
            .collect()
    }
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'a str, LoadError> {
    object
        .get(field)
        .ok_or_else(|| LoadError::MissingField {
            path: path.to_owned(),
            field,
        })?
        .as_str()
        .ok_or_else(|| LoadError::InvalidField {
            path: path.to_owned(),
            field,
            expected: "a string",
        })
}

/// The leaf's `params` object; absent or `null` means no parameters.
fn params(object: &Map<String, Value>, path: &str) -> Result<Value, LoadError> {
    match object.get("params") {
        None | Some(Value::Null) => Ok(Value::Object(Map::new())),
        Some(value @ Value::Object(_)) => Ok(value.clone()),
        Some(_) => Err(LoadError::InvalidField {
            path: path.to_owned(),
            field: "params",
            expected: "an object",
        }),
    }
}
