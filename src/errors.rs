use thiserror::Error;

use crate::options::Orientation;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("unsupported orientation: {0} (only vertical layout is implemented)")]
    UnsupportedOrientation(Orientation),

    #[error("tree nests deeper than {limit} levels, cyclic structure suspected")]
    TooDeep { limit: usize },

    #[error("label marker fragments are not supported: {0:?}")]
    LabelMarker(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Errors from reading an indented outline into a tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OutlineError {
    #[error("outline contains no nodes")]
    Empty,

    #[error("line {line}: second top-level node, an outline must have exactly one root")]
    MultipleRoots { line: usize },
}

/// Errors from loading or serializing settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
