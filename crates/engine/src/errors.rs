use thiserror::Error;

/// Engine-level error type.
///
/// Only two kinds exist. The engine performs no I/O, so there is nothing to
/// time out or retry: either the caller handed it input with no safe default,
/// or the loaded configuration cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller-recoverable: malformed input with no safe default.
    #[error("Validation error on '{field}'{}: {message}", fmt_index(.index))]
    Validation {
        field: String,
        index: Option<usize>,
        message: String,
    },

    /// Fatal, never retried: the supplied catalogs or templates are unusable.
    #[error("Configuration error on '{field}'{}: {message}", fmt_index(.index))]
    Configuration {
        field: String,
        index: Option<usize>,
        message: String,
    },
}

impl EngineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            index: None,
            message: message.into(),
        }
    }

    pub fn validation_at(
        field: impl Into<String>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        EngineError::Validation {
            field: field.into(),
            index: Some(index),
            message: message.into(),
        }
    }

    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Configuration {
            field: field.into(),
            index: None,
            message: message.into(),
        }
    }

    pub fn configuration_at(
        field: impl Into<String>,
        index: usize,
        message: impl Into<String>,
    ) -> Self {
        EngineError::Configuration {
            field: field.into(),
            index: Some(index),
            message: message.into(),
        }
    }

    /// Re-roots the error under an enclosing catalog entry, e.g.
    /// `templates.advanced` → `tracks.templates.advanced` at the track's index.
    /// An inner index moves into the field path.
    pub fn nested(self, prefix: &str, index: usize) -> Self {
        let reroot = |field: String, inner: Option<usize>| match inner {
            Some(j) => format!("{prefix}.{field}[{j}]"),
            None => format!("{prefix}.{field}"),
        };
        match self {
            EngineError::Validation {
                field,
                index: inner,
                message,
            } => EngineError::Validation {
                field: reroot(field, inner),
                index: Some(index),
                message,
            },
            EngineError::Configuration {
                field,
                index: inner,
                message,
            } => EngineError::Configuration {
                field: reroot(field, inner),
                index: Some(index),
                message,
            },
        }
    }

    /// Name of the offending field, for upstream error rendering.
    pub fn field(&self) -> &str {
        match self {
            EngineError::Validation { field, .. } | EngineError::Configuration { field, .. } => {
                field
            }
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, EngineError::Configuration { .. })
    }
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
