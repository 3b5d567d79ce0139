use thiserror::Error;

/// A parameter block could not be turned into an action or condition.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("target is \"point\" but no `point` was given")]
    MissingPoint,
}

/// Fatal error while building a tree. `path` locates the offending node, e.g. `root.children[1]`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read behavior file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed behavior JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("behavior document has no `root` node")]
    MissingRoot,

    #[error("{path}: missing field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: field `{field}` must be {expected}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{path}: unknown node type `{type_name}`")]
    UnknownNodeType { path: String, type_name: String },

    #[error("{path}: unknown action `{name}`")]
    UnknownAction { path: String, name: String },

    #[error("{path}: unknown condition `{name}`")]
    UnknownCondition { path: String, name: String },

    #[error("{path}: invalid params for {kind} `{name}`: {source}")]
    InvalidParams {
        path: String,
        kind: &'static str,
        name: String,
        source: ParamError,
    },
}
