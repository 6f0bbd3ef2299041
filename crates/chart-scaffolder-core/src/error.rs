//! Error types for chart-scaffolder-core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures turning a default value into attribute syntax.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// A function reference whose source text is blank would render as `{}`.
    #[error("function reference has no source text")]
    EmptyFunction,

    /// A `{"$function": ...}` marker inside an array or object; only a
    /// whole default can be a function reference.
    #[error("function reference `{source_text}` is nested inside an array or object")]
    NestedFunction { source_text: String },

    /// Nesting beyond the supported depth.
    #[error("value nests deeper than {max} levels")]
    TooDeep { max: usize },

    /// serde_json refused to encode the value.
    #[error("failed to encode value as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A template whose prop lists break the catalog contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("template '{template}' lists prop '{prop}' as both required and optional")]
    Overlap { template: String, prop: String },

    #[error("template '{template}' lists prop '{prop}' more than once")]
    Duplicate { template: String, prop: String },
}

/// Errors from [`crate::codegen::materialize`].
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The requested template is not a key of the catalog.
    #[error("template '{name}' not found. Available templates: {}", .available.join(", "))]
    TemplateNotFound { name: String, available: Vec<String> },

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// A default value could not be rendered.
    #[error("cannot render default for prop '{prop}': {source}")]
    Serialization {
        prop: String,
        #[source]
        source: SerializeError,
    },
}

/// Errors from loading or extracting a release catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid release catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `version` is not a semantic version.
    #[error("invalid catalog version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Errors from writing a scaffolded project to disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The scaffolder never writes into an existing path.
    #[error("destination {path} already exists")]
    DestinationExists { path: PathBuf },

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    /// The embedded package manifest could not be updated.
    #[error("failed to build package.json: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
